use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::not_implemented;
use crate::models::number::{AvailableNumber, CreateParams, Number, UpdateParams};

/// number-manager.
#[async_trait]
pub trait NumberClient: Send + Sync {
    async fn available_number_list(
        &self,
        _ctx: &RequestContext,
        _country_code: String,
        _size: u64,
    ) -> Result<Vec<AvailableNumber>> {
        Err(not_implemented("available_number_list"))
    }

    async fn number_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Number> {
        Err(not_implemented("number_get"))
    }

    async fn number_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Number>> {
        Err(not_implemented("number_list"))
    }

    async fn number_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Number> {
        Err(not_implemented("number_create"))
    }

    async fn number_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Number> {
        Err(not_implemented("number_delete"))
    }

    async fn number_update(&self, _ctx: &RequestContext, _id: Uuid, _params: UpdateParams) -> Result<Number> {
        Err(not_implemented("number_update"))
    }

    async fn number_update_flow_ids(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _call_flow_id: Uuid,
        _message_flow_id: Uuid,
    ) -> Result<Number> {
        Err(not_implemented("number_update_flow_ids"))
    }

    /// Renews every number whose renewal is due before `tm_renew`.
    async fn number_renew(&self, _ctx: &RequestContext, _tm_renew: DateTime<Utc>) -> Result<Vec<Number>> {
        Err(not_implemented("number_renew"))
    }
}
