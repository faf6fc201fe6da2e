use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{CustomerId, ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::provider::{self, Provider};
use crate::models::route::{self, Route};

/// route-manager: providers and dial routes.
#[async_trait]
pub trait RouteClient: Send + Sync {
    async fn provider_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Provider> {
        Err(not_implemented("provider_get"))
    }

    async fn provider_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Provider>> {
        Err(not_implemented("provider_list"))
    }

    async fn provider_create(&self, _ctx: &RequestContext, _params: provider::Params) -> Result<Provider> {
        Err(not_implemented("provider_create"))
    }

    async fn provider_update(&self, _ctx: &RequestContext, _id: Uuid, _params: provider::Params) -> Result<Provider> {
        Err(not_implemented("provider_update"))
    }

    async fn provider_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Provider> {
        Err(not_implemented("provider_delete"))
    }

    async fn route_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Route> {
        Err(not_implemented("route_get"))
    }

    async fn route_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Route>> {
        Err(not_implemented("route_list"))
    }

    async fn route_create(
        &self,
        _ctx: &RequestContext,
        _customer_id: CustomerId,
        _params: route::Params,
    ) -> Result<Route> {
        Err(not_implemented("route_create"))
    }

    async fn route_update(&self, _ctx: &RequestContext, _id: Uuid, _params: route::Params) -> Result<Route> {
        Err(not_implemented("route_update"))
    }

    async fn route_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Route> {
        Err(not_implemented("route_delete"))
    }
}
