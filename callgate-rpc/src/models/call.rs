//! Calls.

use std::collections::HashMap;

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;
use super::flow::Action;
use super::{agent_owned, owned_record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallType {
    #[default]
    None,
    Flow,
    Conference,
    SipService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Dialing,
    Ringing,
    Progressing,
    Terminating,
    Canceling,
    Hangup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    Incoming,
    Outgoing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuteDirection {
    #[default]
    None,
    Both,
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingFormat {
    #[default]
    Wav,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub owner_type: String,
    #[serde(default)]
    pub owner_id: Option<Uuid>,

    /// Media-server handles; internal only.
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub bridge_id: String,

    #[serde(default)]
    pub flow_id: Uuid,
    #[serde(default)]
    pub activeflow_id: Uuid,
    #[serde(default)]
    pub confbridge_id: Uuid,
    #[serde(rename = "type", default)]
    pub kind: CallType,

    #[serde(default)]
    pub master_call_id: Uuid,
    #[serde(default)]
    pub chained_call_ids: Vec<Uuid>,
    #[serde(default)]
    pub recording_id: Uuid,
    #[serde(default)]
    pub recording_ids: Vec<Uuid>,
    #[serde(default)]
    pub groupcall_id: Uuid,

    pub source: Address,
    pub destination: Address,

    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub data: HashMap<String, String>,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub mute_direction: MuteDirection,
    #[serde(default)]
    pub hangup_by: String,
    #[serde(default)]
    pub hangup_reason: String,

    #[serde(default)]
    pub tm_ringing: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_progressing: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_hangup: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Call);
agent_owned!(Call);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub owner_type: String,
    pub owner_id: Option<Uuid>,
    pub flow_id: Uuid,
    pub activeflow_id: Uuid,
    #[serde(rename = "type")]
    pub kind: CallType,
    pub master_call_id: Uuid,
    pub chained_call_ids: Vec<Uuid>,
    pub recording_id: Uuid,
    pub recording_ids: Vec<Uuid>,
    pub groupcall_id: Uuid,
    pub source: Address,
    pub destination: Address,
    pub status: Status,
    pub action: Action,
    pub direction: Direction,
    pub mute_direction: MuteDirection,
    pub hangup_by: String,
    pub hangup_reason: String,
    pub tm_ringing: Option<DateTime<Utc>>,
    pub tm_progressing: Option<DateTime<Utc>>,
    pub tm_hangup: Option<DateTime<Utc>>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Call {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            owner_type: self.owner_type.clone(),
            owner_id: self.owner_id,
            flow_id: self.flow_id,
            activeflow_id: self.activeflow_id,
            kind: self.kind,
            master_call_id: self.master_call_id,
            chained_call_ids: self.chained_call_ids.clone(),
            recording_id: self.recording_id,
            recording_ids: self.recording_ids.clone(),
            groupcall_id: self.groupcall_id,
            source: self.source.clone(),
            destination: self.destination.clone(),
            status: self.status,
            action: self.action.clone(),
            direction: self.direction,
            mute_direction: self.mute_direction,
            hangup_by: self.hangup_by.clone(),
            hangup_reason: self.hangup_reason.clone(),
            tm_ringing: self.tm_ringing,
            tm_progressing: self.tm_progressing,
            tm_hangup: self.tm_hangup,
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

/// Outbound call request. One call is created per destination; agent or
/// extension destinations fan out into groupcalls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub flow_id: Uuid,
    pub master_call_id: Option<Uuid>,
    pub source: Address,
    pub destinations: Vec<Address>,
    pub early_execution: bool,
    pub connect: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TalkParams {
    pub text: String,
    pub gender: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordingParams {
    pub format: RecordingFormat,
    pub end_of_silence: u32,
    pub end_of_key: String,
    pub duration: u32,
}
