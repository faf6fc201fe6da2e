//! Timeline events recorded against a resource.

use std::fmt;

use callgate_core::IntoWebhook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Resources that carry a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Activeflow,
    Call,
    Flow,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::Activeflow => "activeflow",
            ResourceType::Call => "call",
            ResourceType::Flow => "flow",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    /// Which manager published the event.
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub data: Value,
}

impl IntoWebhook for Event {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            timestamp: self.timestamp,
            event_type: self.event_type.clone(),
            data: self.data.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    pub resource_type: ResourceType,
    pub resource_id: Uuid,
    pub size: u64,
    pub token: String,
}
