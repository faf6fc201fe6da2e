use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::campaigncall;
use tracing::debug;
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    pub async fn campaigncall_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<campaigncall::WebhookMessage>> {
        let client = &self.clients.campaign;
        self.forward
            .list(ctx, p, MANAGE, "campaigncall_list", page, move |q| client.campaigncall_list(ctx, q))
            .await
    }

    /// Campaign calls of one campaign, scoped to the campaign's customer.
    pub async fn campaigncall_list_by_campaign(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        campaign_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<campaigncall::WebhookMessage>> {
        const OP: &str = "campaigncall_list_by_campaign";
        let client = &self.clients.campaign;
        let campaign = self.forward.fetch(ctx, OP, client.campaign_get(ctx, campaign_id)).await?;

        let page = page.with_filter("campaign_id", campaign.id.to_string());
        self.forward
            .list_for(ctx, p, campaign.customer_id, MANAGE, OP, page, move |q| {
                client.campaigncall_list(ctx, q)
            })
            .await
    }

    pub async fn campaigncall_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<campaigncall::WebhookMessage> {
        debug!(customer_id = %p.customer_id, campaigncall_id = %id, "campaigncall.get");
        self.forward
            .get(ctx, p, MANAGE, "campaigncall_get", self.clients.campaign.campaigncall_get(ctx, id))
            .await
    }

    pub async fn campaigncall_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<campaigncall::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(ctx, p, MANAGE, "campaigncall_delete", client.campaigncall_get(ctx, id), move |c| {
                client.campaigncall_delete(ctx, c.id)
            })
            .await
    }
}
