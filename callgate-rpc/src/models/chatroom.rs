//! Chatrooms: an agent's personal view onto a chat.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::chat::ChatType;
use super::{agent_owned, owned_record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chatroom {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    #[serde(rename = "type", default)]
    pub kind: ChatType,
    pub chat_id: Uuid,
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

owned_record!(Chatroom);
agent_owned!(Chatroom);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub owner_type: String,
    pub owner_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: ChatType,
    pub chat_id: Uuid,
    pub room_owner_id: Uuid,
    pub participant_ids: Vec<Uuid>,
    pub name: String,
    pub detail: String,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Chatroom {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id,
            kind: self.kind,
            chat_id: self.chat_id,
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
