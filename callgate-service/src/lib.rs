//! callgate-service: the API gateway's service-handler layer.
//!
//! [`ServiceHandler`] exposes one async method per API operation. Each
//! takes the request context and the authenticated principal, checks the
//! principal's permission (after fetching the target resource where
//! there is one), forwards to the downstream manager and returns the
//! resource's `WebhookMessage`.

pub mod handler;
pub mod realtime;
pub mod services;
pub mod settings;
pub mod telemetry;

pub use handler::{ServiceHandler, ADMIN, MANAGE, MEMBER, SUPER};
pub use realtime::{authorize_topic, Connection, Encapsulation, NoRealtime, RealtimeHub, Topic};
pub use services::{CallCreate, GroupcallCreate, LoginResult};
pub use settings::{Settings, SettingsError};
pub use telemetry::init_tracing;
