//! Messages posted to a talk, with their emoji reactions.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::chatmessage::{Media, MessageType};
use super::owned_record;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub owner_type: String,
    pub owner_id: Uuid,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talkmessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub owner_id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: MessageType,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub medias: Vec<Media>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Talkmessage);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub owner_type: String,
    pub owner_id: Uuid,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
    pub metadata: Metadata,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Talkmessage {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            chat_id: self.chat_id,
            parent_id: self.parent_id,
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id,
            kind: self.kind,
            text: self.text.clone(),
            medias: self.medias.clone(),
            metadata: self.metadata.clone(),
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
    pub parent_id: Option<Uuid>,
    pub owner_type: String,
    pub owner_id: Uuid,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
}
