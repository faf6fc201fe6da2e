use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::trunk::{self, BasicInfo};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, ADMIN};

impl ServiceHandler {
    pub async fn trunk_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: trunk::CreateParams,
    ) -> GateResult<trunk::WebhookMessage> {
        params.customer_id = p.customer_id;
        debug!(
            customer_id = %p.customer_id,
            domain_name = %params.domain_name,
            password_len = params.password.len(),
            "trunk.create"
        );
        let client = &self.clients.registrar;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, ADMIN, "trunk_create", move || client.trunk_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, trunk_id = %out.id, "trunk created");
        Ok(out)
    }

    pub async fn trunk_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<trunk::WebhookMessage> {
        debug!(customer_id = %p.customer_id, trunk_id = %id, "trunk.get");
        self.forward
            .get(ctx, p, ADMIN, "trunk_get", self.clients.registrar.trunk_get(ctx, id))
            .await
    }

    pub async fn trunk_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<trunk::WebhookMessage>> {
        let client = &self.clients.registrar;
        self.forward
            .list(ctx, p, ADMIN, "trunk_list", page, move |q| client.trunk_list(ctx, q))
            .await
    }

    pub async fn trunk_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<trunk::WebhookMessage> {
        let client = &self.clients.registrar;
        let out = self
            .forward
            .mutate(ctx, p, ADMIN, "trunk_delete", client.trunk_get(ctx, id), move |t| {
                client.trunk_delete(ctx, t.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, trunk_id = %id, "trunk deleted");
        Ok(out)
    }

    pub async fn trunk_update_basic_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        info: BasicInfo,
    ) -> GateResult<trunk::WebhookMessage> {
        let client = &self.clients.registrar;
        self.forward
            .mutate(ctx, p, ADMIN, "trunk_update_basic_info", client.trunk_get(ctx, id), move |t| {
                client.trunk_update_basic_info(ctx, t.id, info)
            })
            .await
    }
}
