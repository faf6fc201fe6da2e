//! Groupcalls: one logical call ringing several destinations.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::{agent_owned, owned_record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingMethod {
    #[default]
    RingAll,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMethod {
    #[default]
    HangupOthers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Progressing,
    Hangingup,
    Hangup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Groupcall {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub flow_id: Uuid,
    pub source: Address,
    #[serde(default)]
    pub destinations: Vec<Address>,
    #[serde(default)]
    pub master_call_id: Option<Uuid>,
    #[serde(default)]
    pub ring_method: RingMethod,
    #[serde(default)]
    pub answer_method: AnswerMethod,
    #[serde(default)]
    pub answer_call_id: Option<Uuid>,
    #[serde(default)]
    pub call_ids: Vec<Uuid>,
    #[serde(default)]
    pub call_count: u32,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Groupcall);
agent_owned!(Groupcall);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub owner_type: String,
    pub owner_id: Option<Uuid>,
    pub status: Status,
    pub flow_id: Uuid,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub ring_method: RingMethod,
    pub answer_method: AnswerMethod,
    pub answer_call_id: Option<Uuid>,
    pub call_ids: Vec<Uuid>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Groupcall {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id,
            status: self.status,
            flow_id: self.flow_id,
            source: self.source.clone(),
            destinations: self.destinations.clone(),
            ring_method: self.ring_method,
            answer_method: self.answer_method,
            answer_call_id: self.answer_call_id,
            call_ids: self.call_ids.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub id: Option<Uuid>,
    pub customer_id: CustomerId,
    pub owner_id: Option<Uuid>,
    pub flow_id: Uuid,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub ring_method: RingMethod,
    pub answer_method: AnswerMethod,
}
