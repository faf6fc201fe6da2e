//! callgate-core: the permission model and the resource-forwarding
//! contract shared by every callgate handler.

pub mod clock;
pub mod config;
pub mod context;
pub mod errors;
pub mod forward;
pub mod permission;
pub mod principal;
pub mod resource;
pub mod tenant;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use config::{ConfigError, GateConfig, GateConfigSnapshot};
pub use context::RequestContext;
pub use errors::{ErrorKind, GateError, GateResult};
pub use forward::{Filters, Forwarder, ListQuery, PageRequest, Pagination};
pub use permission::Permission;
pub use principal::Principal;
pub use resource::{AgentOwned, IntoWebhook, Owned};
pub use tenant::CustomerId;
