//! Records returned by the downstream services and their outbound
//! projections. Each module exposes the record, a `WebhookMessage`
//! projection and the parameter structs its create/update RPCs take.

/// Implements `Owned` for a record with `id`, `customer_id` and
/// `tm_delete` fields.
macro_rules! owned_record {
    ($ty:ty) => {
        impl callgate_core::Owned for $ty {
            fn id(&self) -> uuid::Uuid {
                self.id
            }

            fn customer_id(&self) -> callgate_core::CustomerId {
                self.customer_id
            }

            fn tm_delete(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.tm_delete
            }
        }
    };
}

/// Implements `AgentOwned` for a record with an `owner_id: Option<Uuid>` field.
macro_rules! agent_owned {
    ($ty:ty) => {
        impl callgate_core::AgentOwned for $ty {
            fn owner_id(&self) -> Option<uuid::Uuid> {
                self.owner_id
            }
        }
    };
}

pub(crate) use agent_owned;
pub(crate) use owned_record;

pub mod accesskey;
pub mod activeflow;
pub mod agent;
pub mod call;
pub mod campaign;
pub mod campaigncall;
pub mod chat;
pub mod chatmessage;
pub mod chatroom;
pub mod chatroommessage;
pub mod common;
pub mod contact;
pub mod flow;
pub mod groupcall;
pub mod message;
pub mod number;
pub mod provider;
pub mod rag;
pub mod route;
pub mod talk;
pub mod talkmessage;
pub mod talkparticipant;
pub mod timeline;
pub mod transfer;
pub mod trunk;
