use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::campaign::{self, BasicInfo, ResourceInfo, Status};
use callgate_rpc::models::flow::Action;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    pub async fn campaign_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: campaign::CreateParams,
    ) -> GateResult<campaign::WebhookMessage> {
        params.customer_id = p.customer_id;
        let client = &self.clients.campaign;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, "campaign_create", move || {
                client.campaign_create(ctx, params)
            })
            .await?;
        info!(customer_id = %p.customer_id, campaign_id = %out.id, "campaign created");
        Ok(out)
    }

    pub async fn campaign_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<campaign::WebhookMessage>> {
        let client = &self.clients.campaign;
        self.forward
            .list(ctx, p, MANAGE, "campaign_list", page, move |q| client.campaign_list(ctx, q))
            .await
    }

    pub async fn campaign_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<campaign::WebhookMessage> {
        debug!(customer_id = %p.customer_id, campaign_id = %id, "campaign.get");
        self.forward
            .get(ctx, p, MANAGE, "campaign_get", self.clients.campaign.campaign_get(ctx, id))
            .await
    }

    pub async fn campaign_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "campaign_delete", client.campaign_get(ctx, id), move |c| {
                client.campaign_delete(ctx, c.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, campaign_id = %id, "campaign deleted");
        Ok(out)
    }

    pub async fn campaign_update_basic_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        info: BasicInfo,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(ctx, p, MANAGE, "campaign_update_basic_info", client.campaign_get(ctx, id), move |c| {
                client.campaign_update_basic_info(ctx, c.id, info)
            })
            .await
    }

    pub async fn campaign_update_status(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        status: Status,
    ) -> GateResult<campaign::WebhookMessage> {
        debug!(campaign_id = %id, status = ?status, "campaign.update_status");
        let client = &self.clients.campaign;
        self.forward
            .mutate(ctx, p, MANAGE, "campaign_update_status", client.campaign_get(ctx, id), move |c| {
                client.campaign_update_status(ctx, c.id, status)
            })
            .await
    }

    pub async fn campaign_update_service_level(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        service_level: i32,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(
                ctx,
                p,
                MANAGE,
                "campaign_update_service_level",
                client.campaign_get(ctx, id),
                move |c| client.campaign_update_service_level(ctx, c.id, service_level),
            )
            .await
    }

    pub async fn campaign_update_actions(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        actions: Vec<Action>,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(ctx, p, MANAGE, "campaign_update_actions", client.campaign_get(ctx, id), move |c| {
                client.campaign_update_actions(ctx, c.id, actions)
            })
            .await
    }

    pub async fn campaign_update_resource_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        info: ResourceInfo,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(
                ctx,
                p,
                MANAGE,
                "campaign_update_resource_info",
                client.campaign_get(ctx, id),
                move |c| client.campaign_update_resource_info(ctx, c.id, info),
            )
            .await
    }

    pub async fn campaign_update_next_campaign_id(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        next_campaign_id: Uuid,
    ) -> GateResult<campaign::WebhookMessage> {
        let client = &self.clients.campaign;
        self.forward
            .mutate(
                ctx,
                p,
                MANAGE,
                "campaign_update_next_campaign_id",
                client.campaign_get(ctx, id),
                move |c| client.campaign_update_next_campaign_id(ctx, c.id, next_campaign_id),
            )
            .await
    }
}
