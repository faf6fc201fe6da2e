//! Talks kept by talk-manager: agent-to-agent chats with their
//! participant lists.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;
use super::talkparticipant::Participant;

/// Owner type talk-manager records for agents.
pub const OWNER_TYPE_AGENT: &str = "agent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TalkType {
    /// Public to every agent of the customer.
    #[default]
    Talk,
    Group,
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type", default)]
    pub kind: TalkType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Talk);

impl Talk {
    /// Agent ids among the participants.
    pub fn agent_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.participants
            .iter()
            .filter(|p| p.owner_type == OWNER_TYPE_AGENT)
            .map(|p| p.owner_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: TalkType,
    pub name: String,
    pub detail: String,
    pub participants: Vec<Participant>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Talk {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            kind: self.kind,
            name: self.name.clone(),
            detail: self.detail.clone(),
            participants: self.participants.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

/// Who to seat in a new talk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub owner_type: String,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: TalkType,
    pub name: String,
    pub detail: String,
    pub creator_type: String,
    pub creator_id: Uuid,
    pub participants: Vec<ParticipantInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
