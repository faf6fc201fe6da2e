//! Messages as seen from one chatroom.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::chatmessage::{Media, MessageType};
use super::common::Address;
use super::{agent_owned, owned_record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chatroommessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    /// The owner of the chatroom this copy lives in.
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    pub chatroom_id: Uuid,
    #[serde(default)]
    pub messagechat_id: Uuid,
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

owned_record!(Chatroommessage);
agent_owned!(Chatroommessage);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chatroom_id: Uuid,
    pub messagechat_id: Uuid,
    pub source: Address,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Chatroommessage {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            chatroom_id: self.chatroom_id,
            messagechat_id: self.messagechat_id,
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
    pub chatroom_id: Uuid,
    pub source: Address,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub text: String,
    pub medias: Vec<Media>,
}
