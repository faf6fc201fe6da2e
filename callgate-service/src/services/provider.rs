//! Providers are project resources; only super-admins see them.

use callgate_core::forward::FILTER_CUSTOMER_ID;
use callgate_core::{CustomerId, GateResult, IntoWebhook, PageRequest, Principal, RequestContext};
use callgate_rpc::models::provider;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, SUPER};

impl ServiceHandler {
    pub async fn provider_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        params: provider::Params,
    ) -> GateResult<provider::WebhookMessage> {
        let client = &self.clients.route;
        let out = self
            .forward
            .create(ctx, p, CustomerId::NIL, SUPER, "provider_create", move || {
                client.provider_create(ctx, params)
            })
            .await?;
        info!(provider_id = %out.id, hostname = %out.hostname, "provider created");
        Ok(out)
    }

    pub async fn provider_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<provider::WebhookMessage> {
        debug!(provider_id = %id, "provider.get");
        self.forward
            .get(ctx, p, SUPER, "provider_get", self.clients.route.provider_get(ctx, id))
            .await
    }

    pub async fn provider_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<provider::WebhookMessage>> {
        const OP: &str = "provider_list";
        self.forward.authorize(p, CustomerId::NIL, SUPER, OP)?;

        let mut query = self.forward.scoped_query(CustomerId::NIL, page);
        query.filters.remove(FILTER_CUSTOMER_ID);
        debug!(size = query.size, token = %query.token, "provider.list");

        let providers = ctx.guard(self.clients.route.provider_list(ctx, query)).await?;
        Ok(providers.iter().map(IntoWebhook::to_webhook_message).collect())
    }

    pub async fn provider_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<provider::WebhookMessage> {
        let client = &self.clients.route;
        let out = self
            .forward
            .mutate(ctx, p, SUPER, "provider_delete", client.provider_get(ctx, id), move |v| {
                client.provider_delete(ctx, v.id)
            })
            .await?;
        info!(provider_id = %id, "provider deleted");
        Ok(out)
    }

    pub async fn provider_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: provider::Params,
    ) -> GateResult<provider::WebhookMessage> {
        let client = &self.clients.route;
        self.forward
            .mutate(ctx, p, SUPER, "provider_update", client.provider_get(ctx, id), move |v| {
                client.provider_update(ctx, v.id, params)
            })
            .await
    }
}
