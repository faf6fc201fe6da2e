use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::common::Address;
use callgate_rpc::models::flow::Action;
use callgate_rpc::models::groupcall::{self, AnswerMethod, RingMethod};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupcallCreate {
    pub source: Address,
    pub destinations: Vec<Address>,
    #[serde(default)]
    pub flow_id: Option<Uuid>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub ring_method: RingMethod,
    #[serde(default)]
    pub answer_method: AnswerMethod,
}

impl ServiceHandler {
    pub async fn groupcall_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        req: GroupcallCreate,
    ) -> GateResult<groupcall::WebhookMessage> {
        const OP: &str = "groupcall_create";
        self.forward.authorize(p, p.customer_id, MANAGE, OP)?;

        let flow = self.flow_for_creation(ctx, p, req.flow_id, req.actions, OP).await?;
        let params = groupcall::CreateParams {
            id: None,
            customer_id: p.customer_id,
            owner_id: Some(p.id),
            flow_id: flow.id,
            source: req.source,
            destinations: req.destinations,
            ring_method: req.ring_method,
            answer_method: req.answer_method,
        };
        let client = &self.clients.call;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, OP, move || client.groupcall_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, groupcall_id = %out.id, flow_id = %flow.id, "groupcall created");
        Ok(out)
    }

    pub async fn groupcall_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<groupcall::WebhookMessage> {
        debug!(customer_id = %p.customer_id, groupcall_id = %id, "groupcall.get");
        self.forward
            .get(ctx, p, MANAGE, "groupcall_get", self.clients.call.groupcall_get(ctx, id))
            .await
    }

    pub async fn groupcall_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<groupcall::WebhookMessage>> {
        let client = &self.clients.call;
        self.forward
            .list(ctx, p, MANAGE, "groupcall_list", page, move |q| client.groupcall_list(ctx, q))
            .await
    }

    pub async fn groupcall_hangup(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<groupcall::WebhookMessage> {
        let client = &self.clients.call;
        self.forward
            .mutate(ctx, p, MANAGE, "groupcall_hangup", client.groupcall_get(ctx, id), move |g| {
                client.groupcall_hangup(ctx, g.id)
            })
            .await
    }

    pub async fn groupcall_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<groupcall::WebhookMessage> {
        let client = &self.clients.call;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "groupcall_delete", client.groupcall_get(ctx, id), move |g| {
                client.groupcall_delete(ctx, g.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, groupcall_id = %id, "groupcall deleted");
        Ok(out)
    }
}
