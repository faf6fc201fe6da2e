//! Carriers used for outbound routing. Providers are project scoped.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook, Owned};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    #[default]
    Sip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: ProviderType,
    pub hostname: String,
    #[serde(default)]
    pub tech_prefix: String,
    #[serde(default)]
    pub tech_postfix: String,
    #[serde(default)]
    pub tech_headers: std::collections::HashMap<String, String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

impl Owned for Provider {
    fn id(&self) -> Uuid {
        self.id
    }

    fn customer_id(&self) -> CustomerId {
        CustomerId::NIL
    }

    fn tm_delete(&self) -> Option<DateTime<Utc>> {
        self.tm_delete
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ProviderType,
    pub hostname: String,
    pub tech_prefix: String,
    pub tech_postfix: String,
    pub tech_headers: std::collections::HashMap<String, String>,
    pub name: String,
    pub detail: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Provider {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            kind: self.kind,
            hostname: self.hostname.clone(),
            tech_prefix: self.tech_prefix.clone(),
            tech_postfix: self.tech_postfix.clone(),
            tech_headers: self.tech_headers.clone(),
            name: self.name.clone(),
            detail: self.detail.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Params {
    #[serde(rename = "type")]
    pub kind: ProviderType,
    pub hostname: String,
    pub tech_prefix: String,
    pub tech_postfix: String,
    pub tech_headers: std::collections::HashMap<String, String>,
    pub name: String,
    pub detail: String,
}
