//! Participants seated in a talk.

use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    #[serde(default)]
    pub customer_id: CustomerId,
    #[serde(default)]
    pub chat_id: Uuid,
    pub owner_type: String,
    pub owner_id: Uuid,
    #[serde(default)]
    pub tm_joined: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub chat_id: Uuid,
    pub owner_type: String,
    pub owner_id: Uuid,
    pub tm_joined: Option<DateTime<Utc>>,
}

impl IntoWebhook for Participant {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            chat_id: self.chat_id,
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id,
            tm_joined: self.tm_joined,
        }
    }
}
