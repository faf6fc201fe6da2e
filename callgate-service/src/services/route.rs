use callgate_core::{CustomerId, GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::route;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, ADMIN};

impl ServiceHandler {
    /// Create a route for `customer_id`, which need not be the caller's
    /// own customer (a super-admin may route on behalf of anyone).
    pub async fn route_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        customer_id: CustomerId,
        params: route::Params,
    ) -> GateResult<route::WebhookMessage> {
        let client = &self.clients.route;
        let out = self
            .forward
            .create(ctx, p, customer_id, ADMIN, "route_create", move || {
                client.route_create(ctx, customer_id, params)
            })
            .await?;
        info!(customer_id = %customer_id, route_id = %out.id, target = %out.target, "route created");
        Ok(out)
    }

    pub async fn route_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<route::WebhookMessage> {
        debug!(customer_id = %p.customer_id, route_id = %id, "route.get");
        self.forward
            .get(ctx, p, ADMIN, "route_get", self.clients.route.route_get(ctx, id))
            .await
    }

    pub async fn route_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<route::WebhookMessage>> {
        let client = &self.clients.route;
        self.forward
            .list(ctx, p, ADMIN, "route_list", page, move |q| client.route_list(ctx, q))
            .await
    }

    pub async fn route_list_by_customer(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        customer_id: CustomerId,
        page: PageRequest,
    ) -> GateResult<Vec<route::WebhookMessage>> {
        let client = &self.clients.route;
        self.forward
            .list_for(ctx, p, customer_id, ADMIN, "route_list_by_customer", page, move |q| {
                client.route_list(ctx, q)
            })
            .await
    }

    pub async fn route_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<route::WebhookMessage> {
        let client = &self.clients.route;
        let out = self
            .forward
            .mutate(ctx, p, ADMIN, "route_delete", client.route_get(ctx, id), move |r| {
                client.route_delete(ctx, r.id)
            })
            .await?;
        info!(route_id = %id, "route deleted");
        Ok(out)
    }

    pub async fn route_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: route::Params,
    ) -> GateResult<route::WebhookMessage> {
        let client = &self.clients.route;
        self.forward
            .mutate(ctx, p, ADMIN, "route_update", client.route_get(ctx, id), move |r| {
                client.route_update(ctx, r.id, params)
            })
            .await
    }
}
