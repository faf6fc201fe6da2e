use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::accesskey::{Accesskey, CreateParams};

/// customer-manager: access keys.
#[async_trait]
pub trait CustomerClient: Send + Sync {
    async fn accesskey_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Accesskey> {
        Err(not_implemented("accesskey_get"))
    }

    /// Lookup used by authentication. `Ok(None)` when no key matches.
    async fn accesskey_get_by_token(&self, _ctx: &RequestContext, _token: String) -> Result<Option<Accesskey>> {
        Err(not_implemented("accesskey_get_by_token"))
    }

    async fn accesskey_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Accesskey>> {
        Err(not_implemented("accesskey_list"))
    }

    async fn accesskey_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Accesskey> {
        Err(not_implemented("accesskey_create"))
    }

    async fn accesskey_update(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _name: String,
        _detail: String,
    ) -> Result<Accesskey> {
        Err(not_implemented("accesskey_update"))
    }

    async fn accesskey_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Accesskey> {
        Err(not_implemented("accesskey_delete"))
    }
}
