use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::flow::{self, Action, FlowType};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    pub async fn flow_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        name: String,
        detail: String,
        actions: Vec<Action>,
        persist: bool,
    ) -> GateResult<flow::WebhookMessage> {
        let params = flow::CreateParams {
            customer_id: p.customer_id,
            kind: FlowType::Flow,
            name,
            detail,
            actions,
            persist,
        };
        let client = &self.clients.flow;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, "flow_create", move || client.flow_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, flow_id = %out.id, "flow created");
        Ok(out)
    }

    pub async fn flow_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<flow::WebhookMessage> {
        debug!(customer_id = %p.customer_id, flow_id = %id, "flow.get");
        self.forward
            .get(ctx, p, MANAGE, "flow_get", self.clients.flow.flow_get(ctx, id))
            .await
    }

    pub async fn flow_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<flow::WebhookMessage>> {
        let client = &self.clients.flow;
        self.forward
            .list(ctx, p, MANAGE, "flow_list", page, move |q| client.flow_list(ctx, q))
            .await
    }

    pub async fn flow_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: flow::UpdateParams,
    ) -> GateResult<flow::WebhookMessage> {
        let client = &self.clients.flow;
        self.forward
            .mutate(ctx, p, MANAGE, "flow_update", client.flow_get(ctx, id), move |f| {
                client.flow_update(ctx, f.id, params)
            })
            .await
    }

    pub async fn flow_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<flow::WebhookMessage> {
        let client = &self.clients.flow;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "flow_delete", client.flow_get(ctx, id), move |f| {
                client.flow_delete(ctx, f.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, flow_id = %id, "flow deleted");
        Ok(out)
    }
}
