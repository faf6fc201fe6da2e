use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::chat::{self, Chat};
use crate::models::chatmessage::{self, Chatmessage};
use crate::models::chatroom::Chatroom;
use crate::models::chatroommessage::{self, Chatroommessage};

/// chat-manager: chats, their messages, and per-agent chatrooms.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn chat_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chat> {
        Err(not_implemented("chat_get"))
    }

    async fn chat_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Chat>> {
        Err(not_implemented("chat_list"))
    }

    async fn chat_create(&self, _ctx: &RequestContext, _params: chat::CreateParams) -> Result<Chat> {
        Err(not_implemented("chat_create"))
    }

    async fn chat_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chat> {
        Err(not_implemented("chat_delete"))
    }

    async fn chat_update_basic_info(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _name: String,
        _detail: String,
    ) -> Result<Chat> {
        Err(not_implemented("chat_update_basic_info"))
    }

    async fn chat_update_room_owner_id(&self, _ctx: &RequestContext, _id: Uuid, _owner_id: Uuid) -> Result<Chat> {
        Err(not_implemented("chat_update_room_owner_id"))
    }

    async fn chat_add_participant_id(&self, _ctx: &RequestContext, _id: Uuid, _participant_id: Uuid) -> Result<Chat> {
        Err(not_implemented("chat_add_participant_id"))
    }

    async fn chat_remove_participant_id(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _participant_id: Uuid,
    ) -> Result<Chat> {
        Err(not_implemented("chat_remove_participant_id"))
    }

    async fn chatmessage_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatmessage> {
        Err(not_implemented("chatmessage_get"))
    }

    async fn chatmessage_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Chatmessage>> {
        Err(not_implemented("chatmessage_list"))
    }

    async fn chatmessage_create(
        &self,
        _ctx: &RequestContext,
        _params: chatmessage::CreateParams,
    ) -> Result<Chatmessage> {
        Err(not_implemented("chatmessage_create"))
    }

    async fn chatmessage_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatmessage> {
        Err(not_implemented("chatmessage_delete"))
    }

    async fn chatroom_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatroom> {
        Err(not_implemented("chatroom_get"))
    }

    async fn chatroom_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Chatroom>> {
        Err(not_implemented("chatroom_list"))
    }

    async fn chatroom_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatroom> {
        Err(not_implemented("chatroom_delete"))
    }

    async fn chatroom_update_basic_info(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _name: String,
        _detail: String,
    ) -> Result<Chatroom> {
        Err(not_implemented("chatroom_update_basic_info"))
    }

    async fn chatroommessage_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatroommessage> {
        Err(not_implemented("chatroommessage_get"))
    }

    async fn chatroommessage_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Chatroommessage>> {
        Err(not_implemented("chatroommessage_list"))
    }

    async fn chatroommessage_create(
        &self,
        _ctx: &RequestContext,
        _params: chatroommessage::CreateParams,
    ) -> Result<Chatroommessage> {
        Err(not_implemented("chatroommessage_create"))
    }

    async fn chatroommessage_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Chatroommessage> {
        Err(not_implemented("chatroommessage_delete"))
    }
}
