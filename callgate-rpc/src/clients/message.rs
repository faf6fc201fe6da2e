use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::message::{Message, SendParams};

/// message-manager.
#[async_trait]
pub trait MessageClient: Send + Sync {
    async fn message_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Message> {
        Err(not_implemented("message_get"))
    }

    async fn message_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Message>> {
        Err(not_implemented("message_list"))
    }

    async fn message_send(&self, _ctx: &RequestContext, _params: SendParams) -> Result<Message> {
        Err(not_implemented("message_send"))
    }

    async fn message_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Message> {
        Err(not_implemented("message_delete"))
    }
}
