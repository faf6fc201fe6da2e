use callgate_core::{
    CustomerId, GateError, GateResult, IntoWebhook, PageRequest, Permission, Principal, RequestContext,
};
use callgate_rpc::models::agent::{self, Agent, Status};
use callgate_rpc::models::common::Address;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE, SUPER};

/// Granting any project-level bit takes a super-admin; everything else a
/// manager of the agent's customer.
fn required_to_grant(permission: Permission) -> (Permission, bool) {
    if permission.intersects(Permission::PROJECT_ALL) {
        (SUPER, true)
    } else {
        (MANAGE, false)
    }
}

impl ServiceHandler {
    /// Fetch an agent the principal may act on: itself, or any agent of
    /// a customer it manages.
    async fn agent_for_self_or_manager(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        op: &'static str,
    ) -> GateResult<Agent> {
        let agent = self.forward.fetch(ctx, op, self.clients.agent.agent_get(ctx, id)).await?;
        if agent.id != p.id {
            self.forward.authorize(p, agent.customer_id, MANAGE, op)?;
        }
        Ok(agent)
    }

    pub async fn agent_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: agent::CreateParams,
    ) -> GateResult<agent::WebhookMessage> {
        const OP: &str = "agent_create";
        let (required, project) = required_to_grant(params.permission);
        let scope = if project { CustomerId::NIL } else { p.customer_id };
        self.forward.authorize(p, scope, required, OP)?;

        params.customer_id = p.customer_id;
        debug!(
            customer_id = %p.customer_id,
            username = %params.username,
            password_len = params.password.len(),
            "agent.create"
        );
        let client = &self.clients.agent;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, OP, move || client.agent_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, agent_id = %out.id, "agent created");
        Ok(out)
    }

    pub async fn agent_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<agent::WebhookMessage> {
        debug!(customer_id = %p.customer_id, agent_id = %id, "agent.get");
        let agent = self.agent_for_self_or_manager(ctx, p, id, "agent_get").await?;
        Ok(agent.to_webhook_message())
    }

    pub async fn agent_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<agent::WebhookMessage>> {
        let client = &self.clients.agent;
        self.forward
            .list(ctx, p, MANAGE, "agent_list", page, move |q| client.agent_list(ctx, q))
            .await
    }

    pub async fn agent_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<agent::WebhookMessage> {
        let client = &self.clients.agent;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "agent_delete", client.agent_get(ctx, id), move |a| {
                client.agent_delete(ctx, a.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, agent_id = %id, "agent deleted");
        Ok(out)
    }

    pub async fn agent_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: agent::UpdateParams,
    ) -> GateResult<agent::WebhookMessage> {
        let client = &self.clients.agent;
        self.forward
            .mutate(ctx, p, MANAGE, "agent_update", client.agent_get(ctx, id), move |a| {
                client.agent_update(ctx, a.id, params)
            })
            .await
    }

    pub async fn agent_update_addresses(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        addresses: Vec<Address>,
    ) -> GateResult<agent::WebhookMessage> {
        let client = &self.clients.agent;
        self.forward
            .mutate(ctx, p, MANAGE, "agent_update_addresses", client.agent_get(ctx, id), move |a| {
                client.agent_update_addresses(ctx, a.id, addresses)
            })
            .await
    }

    pub async fn agent_update_tag_ids(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        tag_ids: Vec<Uuid>,
    ) -> GateResult<agent::WebhookMessage> {
        let client = &self.clients.agent;
        self.forward
            .mutate(ctx, p, MANAGE, "agent_update_tag_ids", client.agent_get(ctx, id), move |a| {
                client.agent_update_tag_ids(ctx, a.id, tag_ids)
            })
            .await
    }

    pub async fn agent_update_status(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        status: Status,
    ) -> GateResult<agent::WebhookMessage> {
        const OP: &str = "agent_update_status";
        let agent = self.agent_for_self_or_manager(ctx, p, id, OP).await?;
        let updated = ctx
            .guard(self.clients.agent.agent_update_status(ctx, agent.id, status))
            .await?;
        debug!(agent_id = %id, status = ?status, "agent status updated");
        Ok(updated.to_webhook_message())
    }

    pub async fn agent_update_permission(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        permission: Permission,
    ) -> GateResult<agent::WebhookMessage> {
        const OP: &str = "agent_update_permission";
        let agent = self.forward.fetch(ctx, OP, self.clients.agent.agent_get(ctx, id)).await?;

        let (required, project) = required_to_grant(permission);
        let scope = if project { CustomerId::NIL } else { agent.customer_id };
        self.forward.authorize(p, scope, required, OP)?;

        let updated = ctx
            .guard(self.clients.agent.agent_update_permission(ctx, agent.id, permission))
            .await?;
        info!(agent_id = %id, permission = ?permission, by = %p.id, "agent permission updated");
        Ok(updated.to_webhook_message())
    }

    pub async fn agent_update_password(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        password: String,
    ) -> GateResult<agent::WebhookMessage> {
        const OP: &str = "agent_update_password";
        let agent = self.agent_for_self_or_manager(ctx, p, id, OP).await?;
        if password.is_empty() {
            return Err(GateError::invalid_argument("password must not be empty").into_anyhow());
        }
        let updated = ctx
            .guard(self.clients.agent.agent_update_password(ctx, agent.id, password))
            .await?;
        info!(agent_id = %id, by = %p.id, "agent password updated");
        Ok(updated.to_webhook_message())
    }
}
