//! SIP trunks registered with the registrar.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    Basic,
    Ip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trunk {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    pub domain_name: String,
    #[serde(default)]
    pub auth_types: Vec<AuthType>,
    /// Digest realm; internal only.
    #[serde(default)]
    pub realm: String,
    #[serde(default)]
    pub username: String,
    /// Never leaves this layer.
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub allowed_ips: Vec<String>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Trunk);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub name: String,
    pub detail: String,
    pub domain_name: String,
    pub auth_types: Vec<AuthType>,
    pub username: String,
    pub allowed_ips: Vec<String>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Trunk {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            name: self.name.clone(),
            detail: self.detail.clone(),
            domain_name: self.domain_name.clone(),
            auth_types: self.auth_types.clone(),
            username: self.username.clone(),
            allowed_ips: self.allowed_ips.clone(),
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
    pub domain_name: String,
    pub auth_types: Vec<AuthType>,
    pub username: String,
    pub password: String,
    pub allowed_ips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub detail: String,
    pub auth_types: Vec<AuthType>,
    pub username: String,
    pub password: String,
    pub allowed_ips: Vec<String>,
}
