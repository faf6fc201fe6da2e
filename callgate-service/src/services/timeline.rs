use callgate_core::{CustomerId, GateResult, IntoWebhook, Owned, PageRequest, Principal, RequestContext};
use callgate_rpc::models::timeline::{self, EventQuery, ResourceType};
use tracing::debug;
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    /// Customer owning the resource a timeline belongs to.
    async fn timeline_owner(
        &self,
        ctx: &RequestContext,
        resource_type: ResourceType,
        resource_id: Uuid,
        op: &'static str,
    ) -> GateResult<CustomerId> {
        let flows = &self.clients.flow;
        let customer_id = match resource_type {
            ResourceType::Call => self
                .forward
                .fetch(ctx, op, self.clients.call.call_get(ctx, resource_id))
                .await?
                .customer_id(),
            ResourceType::Activeflow => self
                .forward
                .fetch(ctx, op, flows.activeflow_get(ctx, resource_id))
                .await?
                .customer_id(),
            ResourceType::Flow => self
                .forward
                .fetch(ctx, op, flows.flow_get(ctx, resource_id))
                .await?
                .customer_id(),
        };
        Ok(customer_id)
    }

    /// Events recorded against a call, activeflow or flow, newest first.
    pub async fn timeline_event_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        resource_type: ResourceType,
        resource_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<timeline::WebhookMessage>> {
        const OP: &str = "timeline_event_list";
        let customer_id = self.timeline_owner(ctx, resource_type, resource_id, OP).await?;
        self.forward.authorize(p, customer_id, MANAGE, OP)?;

        let scoped = self.forward.scoped_query(customer_id, page);
        let query = EventQuery {
            resource_type,
            resource_id,
            size: scoped.size,
            token: scoped.token,
        };
        debug!(resource_type = %resource_type, resource_id = %resource_id, size = query.size, "timeline.event_list");

        let events = ctx.guard(self.clients.timeline.event_list(ctx, query)).await?;
        Ok(events.iter().map(IntoWebhook::to_webhook_message).collect())
    }
}
