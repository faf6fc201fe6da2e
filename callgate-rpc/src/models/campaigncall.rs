//! Campaigncalls: individual dial attempts made by a campaign.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::owned_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Dialing,
    Progressing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallResult {
    #[default]
    None,
    Success,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaigncall {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub campaign_id: Uuid,
    #[serde(default)]
    pub outplan_id: Uuid,
    #[serde(default)]
    pub outdial_id: Uuid,
    #[serde(default)]
    pub outdial_target_id: Uuid,
    #[serde(default)]
    pub queue_id: Uuid,
    #[serde(default)]
    pub activeflow_id: Uuid,
    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub reference_type: String,
    #[serde(default)]
    pub reference_id: Uuid,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub result: CallResult,
    pub source: Address,
    pub destination: Address,
    #[serde(default)]
    pub destination_index: i32,
    #[serde(default)]
    pub try_count: i32,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Campaigncall);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub campaign_id: Uuid,
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub outdial_target_id: Uuid,
    pub queue_id: Uuid,
    pub activeflow_id: Uuid,
    pub flow_id: Uuid,
    pub reference_type: String,
    pub reference_id: Uuid,
    pub status: Status,
    pub result: CallResult,
    pub source: Address,
    pub destination: Address,
    pub destination_index: i32,
    pub try_count: i32,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Campaigncall {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            campaign_id: self.campaign_id,
            outplan_id: self.outplan_id,
            outdial_id: self.outdial_id,
            outdial_target_id: self.outdial_target_id,
            queue_id: self.queue_id,
            activeflow_id: self.activeflow_id,
            flow_id: self.flow_id,
            reference_type: self.reference_type.clone(),
            reference_id: self.reference_id,
            status: self.status,
            result: self.result,
            source: self.source.clone(),
            destination: self.destination.clone(),
            destination_index: self.destination_index,
            try_count: self.try_count,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}
