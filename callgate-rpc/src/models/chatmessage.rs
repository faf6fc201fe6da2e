//! Messages posted to a chat.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Normal,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub agent_id: Option<Uuid>,
    #[serde(default)]
    pub file_id: Option<Uuid>,
    #[serde(default)]
    pub link_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chatmessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    pub source: Address,
    #[serde(rename = "type", default)]
    pub kind: MessageType,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub medias: Vec<Media>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Chatmessage);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    pub source: Address,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Chatmessage {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            chat_id: self.chat_id,
            source: self.source.clone(),
            kind: self.kind,
            text: self.text.clone(),
            medias: self.medias.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    pub source: Address,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
}
