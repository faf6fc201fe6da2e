//! Outbound campaigns.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flow::Action;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    #[default]
    Call,
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Stop,
    Stopping,
    Run,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndHandle {
    #[default]
    Stop,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type", default)]
    pub kind: CampaignType,
    pub name: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub service_level: i32,
    #[serde(default)]
    pub end_handle: EndHandle,
    /// The flow generated from `actions` by the campaign manager.
    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub outplan_id: Uuid,
    #[serde(default)]
    pub outdial_id: Uuid,
    #[serde(default)]
    pub queue_id: Uuid,
    #[serde(default)]
    pub next_campaign_id: Uuid,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Campaign);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub name: String,
    pub detail: String,
    pub status: Status,
    pub service_level: i32,
    pub end_handle: EndHandle,
    pub actions: Vec<Action>,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Campaign {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            kind: self.kind,
            name: self.name.clone(),
            detail: self.detail.clone(),
            status: self.status,
            service_level: self.service_level,
            end_handle: self.end_handle,
            actions: self.actions.clone(),
            outplan_id: self.outplan_id,
            outdial_id: self.outdial_id,
            queue_id: self.queue_id,
            next_campaign_id: self.next_campaign_id,
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
    pub kind: CampaignType,
    pub name: String,
    pub detail: String,
    pub service_level: i32,
    pub end_handle: EndHandle,
    pub actions: Vec<Action>,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub detail: String,
    #[serde(rename = "type")]
    pub kind: CampaignType,
    pub service_level: i32,
    pub end_handle: EndHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceInfo {
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
}
