use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::activeflow::{self, Activeflow};
use crate::models::flow::{CreateParams, Flow, UpdateParams};

/// flow-manager: flows and activeflows.
#[async_trait]
pub trait FlowClient: Send + Sync {
    async fn flow_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Flow> {
        Err(not_implemented("flow_get"))
    }

    async fn flow_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Flow>> {
        Err(not_implemented("flow_list"))
    }

    async fn flow_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Flow> {
        Err(not_implemented("flow_create"))
    }

    async fn flow_update(&self, _ctx: &RequestContext, _id: Uuid, _params: UpdateParams) -> Result<Flow> {
        Err(not_implemented("flow_update"))
    }

    async fn flow_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Flow> {
        Err(not_implemented("flow_delete"))
    }

    async fn activeflow_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Activeflow> {
        Err(not_implemented("activeflow_get"))
    }

    async fn activeflow_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Activeflow>> {
        Err(not_implemented("activeflow_list"))
    }

    async fn activeflow_create(
        &self,
        _ctx: &RequestContext,
        _params: activeflow::CreateParams,
    ) -> Result<Activeflow> {
        Err(not_implemented("activeflow_create"))
    }

    async fn activeflow_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Activeflow> {
        Err(not_implemented("activeflow_delete"))
    }

    async fn activeflow_stop(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Activeflow> {
        Err(not_implemented("activeflow_stop"))
    }
}
