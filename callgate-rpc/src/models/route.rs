//! Outbound dial routes: which provider to try, in what order, per target.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

/// Target value matching every destination.
pub const TARGET_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    pub provider_id: Uuid,
    #[serde(default)]
    pub priority: i32,
    /// Country code or [`TARGET_ALL`].
    pub target: String,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Route);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub name: String,
    pub detail: String,
    pub provider_id: Uuid,
    pub priority: i32,
    pub target: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Route {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            provider_id: self.provider_id,
            priority: self.priority,
            target: self.target.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Params {
    pub name: String,
    pub detail: String,
    pub provider_id: Uuid,
    pub priority: i32,
    pub target: String,
}
