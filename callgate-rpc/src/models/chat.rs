//! Chats: customer-level conversations between agents and participants.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    #[default]
    Normal,
    Group,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type", default)]
    pub kind: ChatType,
    #[serde(default)]
    pub room_owner_id: Uuid,
    #[serde(default)]
    pub participant_ids: Vec<Uuid>,
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

owned_record!(Chat);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub room_owner_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub name: String,
    pub detail: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Chat {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            kind: self.kind,
            room_owner_id: self.room_owner_id,
            participant_ids: self.participant_ids.clone(),
            name: self.name.clone(),
            detail: self.detail.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub room_owner_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub name: String,
    pub detail: String,
}
