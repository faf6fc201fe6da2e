use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::trunk::{BasicInfo, CreateParams, Trunk};

/// registrar-manager: SIP trunks.
#[async_trait]
pub trait RegistrarClient: Send + Sync {
    async fn trunk_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Trunk> {
        Err(not_implemented("trunk_get"))
    }

    async fn trunk_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Trunk>> {
        Err(not_implemented("trunk_list"))
    }

    async fn trunk_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Trunk> {
        Err(not_implemented("trunk_create"))
    }

    async fn trunk_update_basic_info(&self, _ctx: &RequestContext, _id: Uuid, _info: BasicInfo) -> Result<Trunk> {
        Err(not_implemented("trunk_update_basic_info"))
    }

    async fn trunk_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Trunk> {
        Err(not_implemented("trunk_delete"))
    }
}
