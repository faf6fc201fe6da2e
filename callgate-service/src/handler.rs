use std::sync::Arc;

use callgate_auth::{AccesskeyAuthenticator, Authenticate, Authenticator, Credentials, JwtProvider};
use callgate_core::{
    CustomerId, Forwarder, GateError, GateResult, Owned, Permission, Principal, RequestContext, TimeSource,
};
use callgate_rpc::models::flow::{self, Action, Flow, FlowType};
use callgate_rpc::RpcClients;
use tracing::{debug, info};
use uuid::Uuid;

use crate::realtime::{NoRealtime, RealtimeHub};
use crate::settings::Settings;

/// Customer admins and managers.
pub const MANAGE: Permission = Permission::CUSTOMER_ADMIN.union(Permission::CUSTOMER_MANAGER);
pub const ADMIN: Permission = Permission::CUSTOMER_ADMIN;
/// Project super-admins only. No tenant can satisfy this on its own.
pub const SUPER: Permission = Permission::PROJECT_SUPER_ADMIN;
/// Any member of the customer.
pub const MEMBER: Permission = Permission::MEMBER;

pub(crate) const TMP_FLOW_NAME: &str = "tmp";
pub(crate) const TMP_FLOW_DETAIL: &str = "tmp outbound flow";

/// One method per API operation. Stateless between requests; everything
/// shared (clients, signing key, clock) is read-only after construction.
pub struct ServiceHandler {
    pub(crate) clients: RpcClients,
    pub(crate) forward: Forwarder,
    pub(crate) auth: Authenticator,
    pub(crate) jwt: Arc<JwtProvider>,
    pub(crate) realtime: Arc<dyn RealtimeHub>,
    pub(crate) settings: Settings,
}

impl ServiceHandler {
    pub fn new(clients: RpcClients, settings: Settings, clock: Arc<dyn TimeSource>) -> anyhow::Result<Self> {
        let jwt = Arc::new(JwtProvider::new(settings.auth.jwt.clone(), clock.clone())?);
        let auth = Authenticator::new(
            jwt.clone(),
            AccesskeyAuthenticator::new(clients.customer.clone(), clock.clone()),
        );
        let forward = Forwarder::new(clock).with_pagination(settings.pagination);

        Ok(Self {
            clients,
            forward,
            auth,
            jwt,
            realtime: Arc::new(NoRealtime),
            settings,
        })
    }

    pub fn with_realtime(mut self, realtime: Arc<dyn RealtimeHub>) -> Self {
        self.realtime = realtime;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clients(&self) -> &RpcClients {
        &self.clients
    }

    /// Resolve the request's credentials into the principal to act as.
    pub async fn authenticate(&self, ctx: &RequestContext, credentials: &Credentials) -> GateResult<Principal> {
        self.auth.authenticate(ctx, credentials).await
    }

    /// Fetch a flow and make sure it belongs to `customer_id`.
    pub(crate) async fn owned_flow(
        &self,
        ctx: &RequestContext,
        customer_id: CustomerId,
        flow_id: Uuid,
        op: &'static str,
    ) -> GateResult<Flow> {
        let flow = self
            .forward
            .fetch(ctx, op, self.clients.flow.flow_get(ctx, flow_id))
            .await?;
        if flow.customer_id() != customer_id {
            debug!(op, flow_id = %flow_id, flow_customer_id = %flow.customer_id, "flow belongs to another customer");
            return Err(GateError::permission_denied(callgate_core::forward::DENIED_MESSAGE).into_anyhow());
        }
        Ok(flow)
    }

    /// The flow a new call/groupcall/activeflow runs. Without an explicit
    /// flow id a non-persistent flow is created from `actions`. Either way
    /// the flow is re-read and must belong to the principal's customer.
    pub(crate) async fn flow_for_creation(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        flow_id: Option<Uuid>,
        actions: Vec<Action>,
        op: &'static str,
    ) -> GateResult<Flow> {
        let flow_id = match flow_id.filter(|id| !id.is_nil()) {
            Some(id) => id,
            None => {
                let params = flow::CreateParams {
                    customer_id: principal.customer_id,
                    kind: FlowType::Flow,
                    name: TMP_FLOW_NAME.to_string(),
                    detail: TMP_FLOW_DETAIL.to_string(),
                    actions,
                    persist: false,
                };
                let tmp = ctx.guard(self.clients.flow.flow_create(ctx, params)).await?;
                info!(op, flow_id = %tmp.id, customer_id = %principal.customer_id, "created temporary flow");
                tmp.id
            }
        };
        self.owned_flow(ctx, principal.customer_id, flow_id, op).await
    }
}
