use callgate_core::{GateError, GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::common::Address;
use callgate_rpc::models::message;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    pub async fn message_send(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        source: Address,
        destinations: Vec<Address>,
        text: String,
    ) -> GateResult<message::WebhookMessage> {
        const OP: &str = "message_send";
        self.forward.authorize(p, p.customer_id, MANAGE, OP)?;
        if destinations.is_empty() {
            return Err(GateError::invalid_argument("no destinations").into_anyhow());
        }

        let params = message::SendParams {
            id: None,
            customer_id: p.customer_id,
            source,
            destinations,
            text,
        };
        let targets = params.destinations.len();
        let client = &self.clients.message;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, OP, move || client.message_send(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, message_id = %out.id, targets, "message sent");
        Ok(out)
    }

    pub async fn message_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<message::WebhookMessage> {
        debug!(customer_id = %p.customer_id, message_id = %id, "message.get");
        self.forward
            .get(ctx, p, MANAGE, "message_get", self.clients.message.message_get(ctx, id))
            .await
    }

    pub async fn message_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<message::WebhookMessage>> {
        let client = &self.clients.message;
        self.forward
            .list(ctx, p, MANAGE, "message_list", page, move |q| client.message_list(ctx, q))
            .await
    }

    pub async fn message_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<message::WebhookMessage> {
        let client = &self.clients.message;
        self.forward
            .mutate(ctx, p, MANAGE, "message_delete", client.message_get(ctx, id), move |m| {
                client.message_delete(ctx, m.id)
            })
            .await
    }
}
