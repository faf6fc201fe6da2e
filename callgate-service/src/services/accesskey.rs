use callgate_core::{GateError, GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::accesskey;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, ADMIN};

impl ServiceHandler {
    /// `expire` is the key lifetime in seconds and must be at least the
    /// configured minimum.
    pub async fn accesskey_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        name: String,
        detail: String,
        expire: u64,
    ) -> GateResult<accesskey::WebhookMessage> {
        const OP: &str = "accesskey_create";
        self.forward.authorize(p, p.customer_id, ADMIN, OP)?;

        let min_expire = self.settings.auth.accesskey.min_expire.as_secs();
        if expire < min_expire {
            debug!(expire, min_expire, "accesskey expiration too short");
            return Err(GateError::invalid_argument(format!(
                "expire must be at least {min_expire} seconds"
            ))
            .into_anyhow());
        }

        let params = accesskey::CreateParams {
            customer_id: p.customer_id,
            name,
            detail,
            expire,
        };
        let client = &self.clients.customer;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, ADMIN, OP, move || client.accesskey_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, accesskey_id = %out.id, expire, "accesskey created");
        Ok(out)
    }

    pub async fn accesskey_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<accesskey::WebhookMessage> {
        debug!(customer_id = %p.customer_id, accesskey_id = %id, "accesskey.get");
        self.forward
            .get(ctx, p, ADMIN, "accesskey_get", self.clients.customer.accesskey_get(ctx, id))
            .await
    }

    pub async fn accesskey_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<accesskey::WebhookMessage>> {
        let client = &self.clients.customer;
        self.forward
            .list(ctx, p, ADMIN, "accesskey_list", page, move |q| client.accesskey_list(ctx, q))
            .await
    }

    pub async fn accesskey_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<accesskey::WebhookMessage> {
        let client = &self.clients.customer;
        let out = self
            .forward
            .mutate(ctx, p, ADMIN, "accesskey_delete", client.accesskey_get(ctx, id), move |k| {
                client.accesskey_delete(ctx, k.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, accesskey_id = %id, "accesskey deleted");
        Ok(out)
    }

    pub async fn accesskey_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        name: String,
        detail: String,
    ) -> GateResult<accesskey::WebhookMessage> {
        let client = &self.clients.customer;
        self.forward
            .mutate(ctx, p, ADMIN, "accesskey_update", client.accesskey_get(ctx, id), move |k| {
                client.accesskey_update(ctx, k.id, name, detail)
            })
            .await
    }
}
