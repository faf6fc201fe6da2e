use callgate_core::{CustomerId, GateResult, IntoWebhook, PageRequest, Principal, RequestContext};
use callgate_rpc::models::number::{self, AvailableNumber};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE, SUPER};

impl ServiceHandler {
    /// Numbers that can be bought in `country_code`.
    pub async fn available_number_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        country_code: String,
        size: u64,
    ) -> GateResult<Vec<AvailableNumber>> {
        self.forward.authorize(p, p.customer_id, MANAGE, "available_number_list")?;
        let size = self.forward.pagination().clamp(size);
        debug!(country_code = %country_code, size, "available_number.list");

        let numbers = ctx
            .guard(self.clients.number.available_number_list(ctx, country_code, size))
            .await?;
        Ok(numbers.iter().map(IntoWebhook::to_webhook_message).collect())
    }

    pub async fn number_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: number::CreateParams,
    ) -> GateResult<number::WebhookMessage> {
        params.customer_id = p.customer_id;
        let client = &self.clients.number;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, "number_create", move || client.number_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, number_id = %out.id, number = %out.number, "number created");
        Ok(out)
    }

    pub async fn number_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<number::WebhookMessage> {
        debug!(customer_id = %p.customer_id, number_id = %id, "number.get");
        self.forward
            .get(ctx, p, MANAGE, "number_get", self.clients.number.number_get(ctx, id))
            .await
    }

    pub async fn number_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<number::WebhookMessage>> {
        let client = &self.clients.number;
        self.forward
            .list(ctx, p, MANAGE, "number_list", page, move |q| client.number_list(ctx, q))
            .await
    }

    pub async fn number_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<number::WebhookMessage> {
        let client = &self.clients.number;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "number_delete", client.number_get(ctx, id), move |n| {
                client.number_delete(ctx, n.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, number_id = %id, "number deleted");
        Ok(out)
    }

    pub async fn number_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: number::UpdateParams,
    ) -> GateResult<number::WebhookMessage> {
        let client = &self.clients.number;
        self.forward
            .mutate(ctx, p, MANAGE, "number_update", client.number_get(ctx, id), move |n| {
                client.number_update(ctx, n.id, params)
            })
            .await
    }

    pub async fn number_update_flow_ids(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
    ) -> GateResult<number::WebhookMessage> {
        let client = &self.clients.number;
        self.forward
            .mutate(ctx, p, MANAGE, "number_update_flow_ids", client.number_get(ctx, id), move |n| {
                client.number_update_flow_ids(ctx, n.id, call_flow_id, message_flow_id)
            })
            .await
    }

    /// Project-wide renewal run.
    pub async fn number_renew(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        tm_renew: DateTime<Utc>,
    ) -> GateResult<Vec<number::WebhookMessage>> {
        self.forward.authorize(p, CustomerId::NIL, SUPER, "number_renew")?;
        let renewed = ctx.guard(self.clients.number.number_renew(ctx, tm_renew)).await?;
        info!(tm_renew = %tm_renew, renewed = renewed.len(), "numbers renewed");
        Ok(renewed.iter().map(IntoWebhook::to_webhook_message).collect())
    }
}
