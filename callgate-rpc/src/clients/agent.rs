use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, Permission, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::agent::{Agent, CreateParams, Status, UpdateParams};
use crate::models::common::Address;

/// agent-manager.
#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn agent_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Agent> {
        Err(not_implemented("agent_get"))
    }

    async fn agent_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Agent>> {
        Err(not_implemented("agent_list"))
    }

    async fn agent_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Agent> {
        Err(not_implemented("agent_create"))
    }

    async fn agent_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Agent> {
        Err(not_implemented("agent_delete"))
    }

    async fn agent_update(&self, _ctx: &RequestContext, _id: Uuid, _params: UpdateParams) -> Result<Agent> {
        Err(not_implemented("agent_update"))
    }

    async fn agent_update_addresses(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _addresses: Vec<Address>,
    ) -> Result<Agent> {
        Err(not_implemented("agent_update_addresses"))
    }

    async fn agent_update_tag_ids(&self, _ctx: &RequestContext, _id: Uuid, _tag_ids: Vec<Uuid>) -> Result<Agent> {
        Err(not_implemented("agent_update_tag_ids"))
    }

    async fn agent_update_status(&self, _ctx: &RequestContext, _id: Uuid, _status: Status) -> Result<Agent> {
        Err(not_implemented("agent_update_status"))
    }

    async fn agent_update_permission(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _permission: Permission,
    ) -> Result<Agent> {
        Err(not_implemented("agent_update_permission"))
    }

    async fn agent_update_password(&self, _ctx: &RequestContext, _id: Uuid, _password: String) -> Result<Agent> {
        Err(not_implemented("agent_update_password"))
    }

    /// Verifies the credentials and returns the agent.
    async fn agent_login(&self, _ctx: &RequestContext, _username: String, _password: String) -> Result<Agent> {
        Err(not_implemented("agent_login"))
    }
}
