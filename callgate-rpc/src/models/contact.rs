//! Contacts kept by contact-manager: people the customer talks to, with
//! their phone numbers, emails and tags.

use callgate_core::resource::soft_delete;
use callgate_core::{CustomerId, IntoWebhook};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::owned_record;

/// Where a contact record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    Manual,
    Import,
    Api,
    Sync,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub number: String,
    /// Normalized E.164 form, used for lookups.
    #[serde(default)]
    pub number_e164: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Email {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default)]
    pub emails: Vec<Email>,
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
    #[serde(default)]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(default, with = "soft_delete")]
    pub tm_delete: Option<DateTime<Utc>>,
}

owned_record!(Contact);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub id: Uuid,
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub company: String,
    pub job_title: String,
    pub source: Source,
    pub external_id: String,
    pub notes: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub emails: Vec<Email>,
    pub tag_ids: Vec<Uuid>,
    pub tm_create: Option<DateTime<Utc>>,
    pub tm_update: Option<DateTime<Utc>>,
    pub tm_delete: Option<DateTime<Utc>>,
}

impl IntoWebhook for Contact {
    type Message = WebhookMessage;

    fn to_webhook_message(&self) -> WebhookMessage {
        WebhookMessage {
            id: self.id,
            customer_id: self.customer_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            display_name: self.display_name.clone(),
            company: self.company.clone(),
            job_title: self.job_title.clone(),
            source: self.source,
            external_id: self.external_id.clone(),
            notes: self.notes.clone(),
            phone_numbers: self.phone_numbers.clone(),
            emails: self.emails.clone(),
            tag_ids: self.tag_ids.clone(),
            tm_create: self.tm_create,
            tm_update: self.tm_update,
            tm_delete: self.tm_delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub company: String,
    pub job_title: String,
    pub source: Source,
    pub external_id: String,
    pub notes: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub emails: Vec<Email>,
    pub tag_ids: Vec<Uuid>,
}

/// Partial update; `None` leaves the field as it is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update of one phone number or email entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

impl UpdateParams {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_only_carries_set_fields() {
        let params = UpdateParams {
            display_name: Some("Jo Doe".into()),
            ..Default::default()
        };
        let v = serde_json::to_value(&params).unwrap();
        assert_eq!(v, serde_json::json!({ "display_name": "Jo Doe" }));
        assert!(UpdateParams::default().is_empty());
    }
}
