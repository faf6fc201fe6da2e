//! Long-lived API access keys.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accesskey {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    pub token: String,
    #[serde(default)]
    pub tm_expire: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Accesskey);

impl Accesskey {
    /// A key without an expiry never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.tm_expire, Some(at) if at <= now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub name: String,
    pub detail: String,
    pub token: String,
    pub tm_expire: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Accesskey {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            token: self.token.clone(),
            tm_expire: self.tm_expire,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub name: String,
    pub detail: String,
    /// Lifetime in seconds.
    pub expire: u64,
}
