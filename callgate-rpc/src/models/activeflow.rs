//! Activeflows: running instances of a flow.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flow::Action;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    None,
    Running,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    #[default]
    None,
    Api,
    Call,
    Campaign,
    Conversation,
    Message,
    Transcribe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activeflow {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub flow_id: Uuid,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub reference_type: ReferenceType,
    #[serde(default)]
    pub reference_id: Uuid,
    #[serde(default)]
    pub current_action: Option<Action>,
    #[serde(default)]
    pub forward_action_id: Option<Uuid>,
    /// Engine-internal execution stack; not exposed.
    #[serde(default)]
    pub stack_map: serde_json::Value,
    #[serde(default)]
    pub executed_actions: Vec<Action>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Activeflow);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub flow_id: Uuid,
    pub status: Status,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
    pub current_action: Option<Action>,
    pub forward_action_id: Option<Uuid>,
    pub executed_actions: Vec<Action>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Activeflow {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            flow_id: self.flow_id,
            status: self.status,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            current_action: self.current_action.clone(),
            forward_action_id: self.forward_action_id,
            executed_actions: self.executed_actions.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    /// Caller-chosen id; the flow engine generates one when absent.
    pub id: Option<Uuid>,
    pub customer_id: CustomerId,
    pub flow_id: Uuid,
    pub reference_type: ReferenceType,
    pub reference_id: Uuid,
}
