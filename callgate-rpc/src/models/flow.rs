//! Flows: ordered action lists executed by the flow engine.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::owned_record;

/// A single flow step. `option` is interpreted by the flow engine per type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub option: Value,
}

impl Action {
    pub fn new(kind: impl Into<String>, option: Value) -> Self {
        Self {
            id: Uuid::nil(),
            next_id: None,
            kind: kind.into(),
            option,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    #[default]
    Flow,
    Campaign,
    Conference,
    Queue,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type", default)]
    pub kind: FlowType,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    /// Temporary flows are garbage-collected by the flow engine.
    #[serde(default)]
    pub persist: bool,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Flow);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: FlowType,
    pub name: String,
    pub detail: String,
    pub actions: Vec<Action>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Flow {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            kind: self.kind,
            name: self.name.clone(),
            detail: self.detail.clone(),
            actions: self.actions.clone(),
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
    pub kind: FlowType,
    pub name: String,
    pub detail: String,
    pub actions: Vec<Action>,
    pub persist: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateParams {
    pub name: String,
    pub detail: String,
    pub actions: Vec<Action>,
}
