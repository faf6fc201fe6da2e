//! Agents: the people (and bots) operating a customer's contact center.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook, Permission, Principal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingMethod {
    #[default]
    RingAll,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Offline,
    Available,
    Away,
    Busy,
    Ringing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub username: String,
    /// Never leaves this layer.
    #[serde(default)]
    pub password_hash: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub ring_method: RingMethod,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub permission: Permission,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Agent);

impl From<&Agent> for Principal {
    fn from(agent: &Agent) -> Self {
        Principal::new(agent.id, agent.customer_id, agent.permission)
            .with_username(agent.username.clone())
            .with_name(agent.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub username: String,
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
    pub status: Status,
    pub permission: Permission,
    pub tag_ids: Vec<Uuid>,
    pub addresses: Vec<Address>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Agent {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            username: self.username.clone(),
            name: self.name.clone(),
            detail: self.detail.clone(),
            ring_method: self.ring_method,
            status: self.status,
            permission: self.permission,
            tag_ids: self.tag_ids.clone(),
            addresses: self.addresses.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub username: String,
    pub password: String,
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
    pub permission: Permission,
    pub tag_ids: Vec<Uuid>,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateParams {
    pub name: String,
    pub detail: String,
    pub ring_method: RingMethod,
}
