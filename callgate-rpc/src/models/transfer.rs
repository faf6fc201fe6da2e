//! Call transfers.

use callgate_core::{CustomerId, IntoWebhook};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    #[default]
    Attended,
    Blind,
}

/// A transfer in progress. Transfers are short-lived and never soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: TransferType,
    pub transferer_call_id: Uuid,
    #[serde(default)]
    pub transferee_addresses: Vec<Address>,
    #[serde(default)]
    pub transferee_call_id: Option<Uuid>,
    #[serde(default)]
    pub groupcall_id: Option<Uuid>,
    /// Confbridge bridging the parties; internal only.
    #[serde(default)]
    pub confbridge_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(rename = "type")]
    pub kind: TransferType,
    pub transferer_call_id: Uuid,
    pub transferee_addresses: Vec<Address>,
    pub transferee_call_id: Option<Uuid>,
    pub groupcall_id: Option<Uuid>,
}

impl IntoWebhook for Transfer {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            kind: self.kind,
            transferer_call_id: self.transferer_call_id,
            transferee_addresses: self.transferee_addresses.clone(),
            transferee_call_id: self.transferee_call_id,
            groupcall_id: self.groupcall_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartParams {
    #[serde(rename = "type")]
    pub kind: TransferType,
    pub transferer_call_id: Uuid,
    pub transferee_addresses: Vec<Address>,
}
