//! Hand-off to the realtime side: event subscriptions over websocket and
//! inbound media streaming. Transport lives behind [`RealtimeHub`]; this
//! module only decides who may do what.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use callgate_core::{permission, CustomerId, GateError, GateResult, Principal, RequestContext};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handler::MANAGE;

/// The upgraded connection, opaque to this layer.
pub struct Connection(Box<dyn Any + Send>);

impl Connection {
    pub fn new<T: Any + Send>(inner: T) -> Self {
        Self(Box::new(inner))
    }

    pub fn downcast<T: Any>(self) -> Result<Box<T>, Self> {
        self.0.downcast::<T>().map_err(Self)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Connection(..)")
    }
}

/// Media framing for an external media stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encapsulation {
    #[default]
    Rtp,
    Sln,
    Audiosocket,
}

impl FromStr for Encapsulation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rtp" => Ok(Self::Rtp),
            "sln" => Ok(Self::Sln),
            "audiosocket" => Ok(Self::Audiosocket),
            other => Err(GateError::invalid_argument(format!("unsupported encapsulation: {other}")).into_anyhow()),
        }
    }
}

#[async_trait]
pub trait RealtimeHub: Send + Sync {
    /// Serve event subscriptions for `principal` on `conn` until it closes.
    async fn websock(&self, ctx: &RequestContext, principal: &Principal, conn: Connection) -> GateResult<()>;

    /// Bridge the media of `call_id` onto `conn`.
    async fn media_stream(
        &self,
        ctx: &RequestContext,
        call_id: Uuid,
        encapsulation: Encapsulation,
        conn: Connection,
    ) -> GateResult<()>;
}

/// Used when no realtime transport is wired in.
pub struct NoRealtime;

#[async_trait]
impl RealtimeHub for NoRealtime {
    async fn websock(&self, _ctx: &RequestContext, _principal: &Principal, _conn: Connection) -> GateResult<()> {
        Err(GateError::not_implemented("realtime is not configured").into_anyhow())
    }

    async fn media_stream(
        &self,
        _ctx: &RequestContext,
        _call_id: Uuid,
        _encapsulation: Encapsulation,
        _conn: Connection,
    ) -> GateResult<()> {
        Err(GateError::not_implemented("realtime is not configured").into_anyhow())
    }
}

/// A parsed subscription topic, `<scope>:<uuid>:<event pattern>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topic {
    Customer { customer_id: CustomerId, pattern: String },
    Agent { agent_id: Uuid, pattern: String },
}

impl FromStr for Topic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GateError::invalid_argument(format!("invalid topic: {s}")).into_anyhow();

        let mut parts = s.splitn(3, ':');
        let scope = parts.next().ok_or_else(invalid)?;
        let id = parts
            .next()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or_else(invalid)?;
        let pattern = parts.next().unwrap_or_default().to_string();

        match scope {
            "customer_id" => Ok(Topic::Customer {
                customer_id: CustomerId::from(id),
                pattern,
            }),
            "agent_id" => Ok(Topic::Agent { agent_id: id, pattern }),
            _ => Err(invalid()),
        }
    }
}

/// May `principal` subscribe to `topic`? Tenant-wide topics need a
/// manager role on that tenant; agent topics belong to that agent only.
pub fn authorize_topic(principal: &Principal, topic: &str) -> GateResult<Topic> {
    let parsed: Topic = topic.parse()?;
    let allowed = match &parsed {
        Topic::Customer { customer_id, .. } => permission::check(principal, *customer_id, MANAGE),
        Topic::Agent { agent_id, .. } => *agent_id == principal.id || principal.is_super_admin(),
    };
    if !allowed {
        return Err(GateError::permission_denied(callgate_core::forward::DENIED_MESSAGE).into_anyhow());
    }
    Ok(parsed)
}
