//! SMS/MMS messages.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Outbound,
    Inbound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    #[default]
    Queued,
    Sent,
    Delivered,
    Failed,
}

/// Delivery state of one destination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Target {
    pub destination: Address,
    #[serde(default)]
    pub status: TargetStatus,
    #[serde(default)]
    pub parts: u32,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub direction: Direction,
    pub source: Address,
    #[serde(default)]
    pub targets: Vec<Target>,
    /// Carrier-side identifier; internal only.
    #[serde(default)]
    pub provider_reference_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Message);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub direction: Direction,
    pub source: Address,
    pub targets: Vec<Target>,
    pub text: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Message {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            direction: self.direction,
            source: self.source.clone(),
            targets: self.targets.clone(),
            text: self.text.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SendParams {
    pub id: Option<Uuid>,
    pub customer_id: CustomerId,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub text: String,
}
