//! Phone numbers owned by a customer.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Active,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub number: String,
    #[serde(default)]
    pub call_flow_id: Uuid,
    #[serde(default)]
    pub message_flow_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Upstream carrier and its handle; internal only.
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_reference_id: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub t38_enabled: bool,
    #[serde(default)]
    pub emergency_enabled: bool,
    #[serde(default)]
    pub tm_purchase: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_renew: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Number);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub number: String,
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
    pub status: Status,
    pub t38_enabled: bool,
    pub emergency_enabled: bool,
    pub tm_purchase: Option<DateTime<Utc>>,
    pub tm_renew: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Number {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            number: self.number.clone(),
            call_flow_id: self.call_flow_id,
            message_flow_id: self.message_flow_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            status: self.status,
            t38_enabled: self.t38_enabled,
            emergency_enabled: self.emergency_enabled,
            tm_purchase: self.tm_purchase,
            tm_renew: self.tm_renew,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

/// A number offered for purchase. Not owned by anyone yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableNumber {
    pub number: String,
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl IntoWebhook for AvailableNumber {
    type Message = AvailableNumber;

    fn to_webhook_message(&self) -> AvailableNumber {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub number: String,
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateParams {
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
}
