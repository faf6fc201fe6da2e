//! The generic resource-forwarding pattern.
//!
//! Every exposed operation is one of four shapes:
//! - get-one: ownership fetch, soft-delete check, authorize, convert
//! - list: authorize against the caller's tenant, default the page token,
//!   force tenant + not-deleted filters, convert each item
//! - create: authorize against the caller's tenant before any RPC, convert
//! - update/delete: ownership fetch, authorize, forward, convert
//!
//! plus the owner-only and participant-only variants used by the
//! service-agent endpoints.
//! Each RPC runs under [`RequestContext::guard`] so cancellation aborts it.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::TimeSource;
use crate::context::RequestContext;
use crate::errors::{GateError, GateResult};
use crate::permission::{self, Permission};
use crate::principal::Principal;
use crate::resource::{AgentOwned, IntoWebhook, Owned};
use crate::tenant::CustomerId;

/// Field-keyed list filters, as the downstream list RPCs take them.
pub type Filters = BTreeMap<String, String>;

pub const FILTER_CUSTOMER_ID: &str = "customer_id";
pub const FILTER_DELETED: &str = "deleted";
pub const FILTER_OWNER_ID: &str = "owner_id";

pub const DENIED_MESSAGE: &str = "user has no permission";

/// What the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub size: u64,
    pub token: Option<String>,
    pub filters: Filters,
}

impl PageRequest {
    pub fn new(size: u64, token: impl Into<String>) -> Self {
        Self {
            size,
            token: Some(token.into()),
            filters: Filters::new(),
        }
    }

    pub fn first(size: u64) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

/// What the downstream list RPC receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub size: u64,
    /// Creation-timestamp cursor; items strictly older are returned, newest first.
    pub token: String,
    pub filters: Filters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            default_size: 10,
            max_size: 100,
        }
    }
}

impl Pagination {
    pub fn clamp(&self, size: u64) -> u64 {
        match size {
            0 => self.default_size,
            s if s > self.max_size => self.max_size,
            s => s,
        }
    }
}

pub struct Forwarder {
    clock: Arc<dyn TimeSource>,
    pagination: Pagination,
}

impl Forwarder {
    pub fn new(clock: Arc<dyn TimeSource>) -> Self {
        Self {
            clock,
            pagination: Pagination::default(),
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn clock(&self) -> &dyn TimeSource {
        self.clock.as_ref()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn authorize(
        &self,
        principal: &Principal,
        customer_id: CustomerId,
        required: Permission,
        op: &'static str,
    ) -> GateResult<()> {
        if permission::check(principal, customer_id, required) {
            return Ok(());
        }
        warn!(
            op,
            principal_id = %principal.id,
            principal_customer_id = %principal.customer_id,
            customer_id = %customer_id,
            required = ?required,
            "permission denied"
        );
        Err(GateError::permission_denied(DENIED_MESSAGE).into_anyhow())
    }

    /// Self-service rule: the principal must be the assigned owner,
    /// whatever capability bits it holds.
    pub fn require_owner(
        &self,
        principal: &Principal,
        owner_id: Option<Uuid>,
        op: &'static str,
    ) -> GateResult<()> {
        if owner_id == Some(principal.id) {
            return Ok(());
        }
        warn!(op, principal_id = %principal.id, owner_id = ?owner_id, "not the resource owner");
        Err(GateError::permission_denied(DENIED_MESSAGE).into_anyhow())
    }

    /// Membership rule for shared conversations: the principal must be
    /// one of `participants`. Capability bits are not consulted.
    pub fn require_participant<I>(&self, principal: &Principal, participants: I, op: &'static str) -> GateResult<()>
    where
        I: IntoIterator<Item = Uuid>,
    {
        if participants.into_iter().any(|id| id == principal.id) {
            return Ok(());
        }
        warn!(op, principal_id = %principal.id, "not a participant");
        Err(GateError::permission_denied(DENIED_MESSAGE).into_anyhow())
    }

    /// Ownership fetch. A soft-deleted record is reported as not found.
    pub async fn fetch<R, Fut>(&self, ctx: &RequestContext, op: &'static str, fetch: Fut) -> GateResult<R>
    where
        R: Owned,
        Fut: Future<Output = GateResult<R>>,
    {
        let record = ctx.guard(fetch).await?;
        if record.is_deleted() {
            debug!(op, id = %record.id(), "record is soft-deleted");
            return Err(GateError::not_found("not found").into_anyhow());
        }
        Ok(record)
    }

    pub async fn get<R, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        required: Permission,
        op: &'static str,
        fetch: Fut,
    ) -> GateResult<R::Message>
    where
        R: Owned + IntoWebhook,
        Fut: Future<Output = GateResult<R>>,
    {
        let record = self.fetch(ctx, op, fetch).await?;
        self.authorize(principal, record.customer_id(), required, op)?;
        Ok(record.to_webhook_message())
    }

    /// Build the downstream query for a list scoped to `customer_id`.
    /// Tenant and not-deleted filters always win over caller filters.
    pub fn scoped_query(&self, customer_id: CustomerId, page: PageRequest) -> ListQuery {
        let token = match page.token {
            Some(t) if !t.is_empty() => t,
            _ => self.clock.current_page_token(),
        };

        let mut filters = page.filters;
        filters.insert(FILTER_CUSTOMER_ID.to_string(), customer_id.to_string());
        filters.insert(FILTER_DELETED.to_string(), "false".to_string());

        ListQuery {
            size: self.pagination.clamp(page.size),
            token,
            filters,
        }
    }

    pub async fn list<R, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        required: Permission,
        op: &'static str,
        page: PageRequest,
        forward: F,
    ) -> GateResult<Vec<R::Message>>
    where
        R: IntoWebhook,
        F: FnOnce(ListQuery) -> Fut,
        Fut: Future<Output = GateResult<Vec<R>>>,
    {
        self.list_for(ctx, principal, principal.customer_id, required, op, page, forward)
            .await
    }

    /// List scoped to an explicit tenant (e.g. a super-admin browsing a
    /// customer's routes).
    #[allow(clippy::too_many_arguments)]
    pub async fn list_for<R, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        customer_id: CustomerId,
        required: Permission,
        op: &'static str,
        page: PageRequest,
        forward: F,
    ) -> GateResult<Vec<R::Message>>
    where
        R: IntoWebhook,
        F: FnOnce(ListQuery) -> Fut,
        Fut: Future<Output = GateResult<Vec<R>>>,
    {
        self.authorize(principal, customer_id, required, op)?;

        let query = self.scoped_query(customer_id, page);
        debug!(op, customer_id = %customer_id, size = query.size, token = %query.token, "list");

        let items = ctx.guard(forward(query)).await?;
        Ok(items.iter().map(IntoWebhook::to_webhook_message).collect())
    }

    /// Authorize against `customer_id`, then run the creation RPC.
    #[allow(clippy::too_many_arguments)]
    pub async fn create<T, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        customer_id: CustomerId,
        required: Permission,
        op: &'static str,
        forward: F,
    ) -> GateResult<T::Message>
    where
        T: IntoWebhook,
        F: FnOnce() -> Fut,
        Fut: Future<Output = GateResult<T>>,
    {
        self.authorize(principal, customer_id, required, op)?;
        let created = ctx.guard(forward()).await?;
        Ok(created.to_webhook_message())
    }

    /// Ownership fetch, authorize, then forward. Returns the raw result.
    #[allow(clippy::too_many_arguments)]
    pub async fn apply<R, T, FFut, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        required: Permission,
        op: &'static str,
        fetch: FFut,
        forward: F,
    ) -> GateResult<T>
    where
        R: Owned,
        FFut: Future<Output = GateResult<R>>,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = GateResult<T>>,
    {
        let record = self.fetch(ctx, op, fetch).await?;
        self.authorize(principal, record.customer_id(), required, op)?;
        ctx.guard(forward(record)).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn mutate<R, T, FFut, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        required: Permission,
        op: &'static str,
        fetch: FFut,
        forward: F,
    ) -> GateResult<T::Message>
    where
        R: Owned,
        T: IntoWebhook,
        FFut: Future<Output = GateResult<R>>,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = GateResult<T>>,
    {
        let out = self.apply(ctx, principal, required, op, fetch, forward).await?;
        Ok(out.to_webhook_message())
    }

    pub async fn get_own<R, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        op: &'static str,
        fetch: Fut,
    ) -> GateResult<R::Message>
    where
        R: AgentOwned + IntoWebhook,
        Fut: Future<Output = GateResult<R>>,
    {
        let record = self.fetch(ctx, op, fetch).await?;
        self.require_owner(principal, record.owner_id(), op)?;
        Ok(record.to_webhook_message())
    }

    pub async fn apply_own<R, T, FFut, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        op: &'static str,
        fetch: FFut,
        forward: F,
    ) -> GateResult<T>
    where
        R: AgentOwned,
        FFut: Future<Output = GateResult<R>>,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = GateResult<T>>,
    {
        let record = self.fetch(ctx, op, fetch).await?;
        self.require_owner(principal, record.owner_id(), op)?;
        ctx.guard(forward(record)).await
    }

    pub async fn mutate_own<R, T, FFut, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        op: &'static str,
        fetch: FFut,
        forward: F,
    ) -> GateResult<T::Message>
    where
        R: AgentOwned,
        T: IntoWebhook,
        FFut: Future<Output = GateResult<R>>,
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = GateResult<T>>,
    {
        let out = self.apply_own(ctx, principal, op, fetch, forward).await?;
        Ok(out.to_webhook_message())
    }

    /// List of records owned by the principal itself. No capability bits
    /// are consulted; the owner filter does the scoping.
    pub async fn list_own<R, F, Fut>(
        &self,
        ctx: &RequestContext,
        principal: &Principal,
        op: &'static str,
        page: PageRequest,
        forward: F,
    ) -> GateResult<Vec<R::Message>>
    where
        R: IntoWebhook,
        F: FnOnce(ListQuery) -> Fut,
        Fut: Future<Output = GateResult<Vec<R>>>,
    {
        let mut query = self.scoped_query(principal.customer_id, page);
        query
            .filters
            .insert(FILTER_OWNER_ID.to_string(), principal.id.to_string());
        debug!(op, owner_id = %principal.id, size = query.size, token = %query.token, "list own");

        let items = ctx.guard(forward(query)).await?;
        Ok(items.iter().map(IntoWebhook::to_webhook_message).collect())
    }
}
