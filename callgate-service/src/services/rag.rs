use callgate_core::{GateError, GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::rag::{self, Answer, Params};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

const MAX_TOP_K: u32 = 20;

impl ServiceHandler {
    pub async fn rag_create(&self, ctx: &RequestContext, p: &Principal, params: Params) -> GateResult<rag::WebhookMessage> {
        let client = &self.clients.rag;
        let customer_id = p.customer_id;
        let out = self
            .forward
            .create(ctx, p, customer_id, MANAGE, "rag_create", move || {
                client.rag_create(ctx, customer_id, params)
            })
            .await?;
        info!(customer_id = %customer_id, rag_id = %out.id, files = out.storage_file_ids.len(), "rag created");
        Ok(out)
    }

    pub async fn rag_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<rag::WebhookMessage> {
        debug!(customer_id = %p.customer_id, rag_id = %id, "rag.get");
        self.forward
            .get(ctx, p, MANAGE, "rag_get", self.clients.rag.rag_get(ctx, id))
            .await
    }

    pub async fn rag_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<rag::WebhookMessage>> {
        let client = &self.clients.rag;
        self.forward
            .list(ctx, p, MANAGE, "rag_list", page, move |q| client.rag_list(ctx, q))
            .await
    }

    pub async fn rag_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<rag::WebhookMessage> {
        let client = &self.clients.rag;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "rag_delete", client.rag_get(ctx, id), move |r| client.rag_delete(ctx, r.id))
            .await?;
        info!(customer_id = %p.customer_id, rag_id = %id, "rag deleted");
        Ok(out)
    }

    pub async fn rag_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: Params,
    ) -> GateResult<rag::WebhookMessage> {
        let client = &self.clients.rag;
        self.forward
            .mutate(ctx, p, MANAGE, "rag_update", client.rag_get(ctx, id), move |r| {
                client.rag_update(ctx, r.id, params)
            })
            .await
    }

    /// Ask a question against the rag's documents. `top_k` of 0 means the
    /// downstream default; values above 20 are rejected.
    pub async fn rag_query(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        text: String,
        top_k: u32,
    ) -> GateResult<Answer> {
        let client = &self.clients.rag;
        self.forward
            .mutate(ctx, p, MANAGE, "rag_query", client.rag_get(ctx, id), move |r| async move {
                if text.trim().is_empty() {
                    return Err(GateError::invalid_argument("query text must not be empty").into_anyhow());
                }
                if top_k > MAX_TOP_K {
                    let message = format!("top_k must be at most {MAX_TOP_K}");
                    return Err(GateError::invalid_argument(message).into_anyhow());
                }
                client.rag_query(ctx, r.id, text, top_k).await
            })
            .await
    }
}
