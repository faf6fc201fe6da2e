use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::activeflow::{self, ReferenceType};
use callgate_rpc::models::flow::Action;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    /// Start executing a flow outside of any call. `flow_id` may be left
    /// out to run `actions` directly.
    pub async fn activeflow_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Option<Uuid>,
        flow_id: Option<Uuid>,
        actions: Vec<Action>,
    ) -> GateResult<activeflow::WebhookMessage> {
        const OP: &str = "activeflow_create";
        self.forward.authorize(p, p.customer_id, MANAGE, OP)?;

        let flow = self.flow_for_creation(ctx, p, flow_id, actions, OP).await?;
        let params = activeflow::CreateParams {
            id,
            customer_id: p.customer_id,
            flow_id: flow.id,
            reference_type: ReferenceType::None,
            reference_id: Uuid::nil(),
        };
        let client = &self.clients.flow;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, OP, move || client.activeflow_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, activeflow_id = %out.id, flow_id = %flow.id, "activeflow created");
        Ok(out)
    }

    pub async fn activeflow_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<activeflow::WebhookMessage> {
        debug!(customer_id = %p.customer_id, activeflow_id = %id, "activeflow.get");
        self.forward
            .get(ctx, p, MANAGE, "activeflow_get", self.clients.flow.activeflow_get(ctx, id))
            .await
    }

    pub async fn activeflow_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<activeflow::WebhookMessage>> {
        let client = &self.clients.flow;
        self.forward
            .list(ctx, p, MANAGE, "activeflow_list", page, move |q| client.activeflow_list(ctx, q))
            .await
    }

    pub async fn activeflow_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<activeflow::WebhookMessage> {
        let client = &self.clients.flow;
        self.forward
            .mutate(ctx, p, MANAGE, "activeflow_delete", client.activeflow_get(ctx, id), move |a| {
                client.activeflow_delete(ctx, a.id)
            })
            .await
    }

    pub async fn activeflow_stop(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<activeflow::WebhookMessage> {
        let client = &self.clients.flow;
        self.forward
            .mutate(ctx, p, MANAGE, "activeflow_stop", client.activeflow_get(ctx, id), move |a| {
                client.activeflow_stop(ctx, a.id)
            })
            .await
    }
}
