//! Self-service endpoints. The principal may only touch what it owns;
//! capability bits are not consulted.

use callgate_core::forward::{DENIED_MESSAGE, FILTER_OWNER_ID};
use callgate_core::{GateError, GateResult, IntoWebhook, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chat::{self, ChatType};
use callgate_rpc::models::chatmessage::{Media, MessageType};
use callgate_rpc::models::common::{Address, AddressType};
use callgate_rpc::models::{call, chatroom, chatroommessage};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::handler::ServiceHandler;

impl ServiceHandler {
    pub async fn service_agent_call_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<call::WebhookMessage>> {
        let client = &self.clients.call;
        self.forward
            .list_own(ctx, p, "service_agent_call_list", page, move |q| client.call_list(ctx, q))
            .await
    }

    pub async fn service_agent_call_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<call::WebhookMessage> {
        debug!(agent_id = %p.id, call_id = %id, "service_agent.call.get");
        self.forward
            .get_own(ctx, p, "service_agent_call_get", self.clients.call.call_get(ctx, id))
            .await
    }

    pub async fn service_agent_call_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<call::WebhookMessage> {
        let client = &self.clients.call;
        self.forward
            .mutate_own(ctx, p, "service_agent_call_delete", client.call_get(ctx, id), move |c| {
                client.call_delete(ctx, c.id)
            })
            .await
    }

    pub async fn service_agent_chatroom_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<chatroom::WebhookMessage>> {
        let client = &self.clients.chat;
        self.forward
            .list_own(ctx, p, "service_agent_chatroom_list", page, move |q| client.chatroom_list(ctx, q))
            .await
    }

    pub async fn service_agent_chatroom_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroom::WebhookMessage> {
        self.forward
            .get_own(ctx, p, "service_agent_chatroom_get", self.clients.chat.chatroom_get(ctx, id))
            .await
    }

    /// Open a chat with `participant_ids` and return the principal's own
    /// room in it. A one-to-one chat is a normal chat, anything larger a
    /// group.
    pub async fn service_agent_chatroom_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        participant_ids: Vec<Uuid>,
        name: String,
        detail: String,
    ) -> GateResult<chatroom::WebhookMessage> {
        const OP: &str = "service_agent_chatroom_create";

        let mut participants = vec![p.id];
        for id in participant_ids {
            if participants.contains(&id) {
                continue;
            }
            let agent = self.forward.fetch(ctx, OP, self.clients.agent.agent_get(ctx, id)).await?;
            if agent.customer_id != p.customer_id {
                warn!(
                    op = OP,
                    agent_id = %p.id,
                    participant_id = %id,
                    "participant belongs to another customer"
                );
                return Err(GateError::permission_denied(DENIED_MESSAGE).into_anyhow());
            }
            participants.push(id);
        }
        let kind = if participants.len() <= 2 { ChatType::Normal } else { ChatType::Group };

        let params = chat::CreateParams {
            customer_id: p.customer_id,
            kind,
            room_owner_id: p.id,
            participant_ids: participants,
            name,
            detail,
        };
        let chat = ctx.guard(self.clients.chat.chat_create(ctx, params)).await?;
        info!(agent_id = %p.id, chat_id = %chat.id, kind = ?kind, "chat created");

        let page = PageRequest::first(1).with_filter("chat_id", chat.id.to_string());
        let mut query = self.forward.scoped_query(p.customer_id, page);
        query.filters.insert(FILTER_OWNER_ID.to_string(), p.id.to_string());

        let rooms = ctx.guard(self.clients.chat.chatroom_list(ctx, query)).await?;
        match rooms.into_iter().next() {
            Some(room) => Ok(room.to_webhook_message()),
            None => {
                debug!(op = OP, chat_id = %chat.id, "no chatroom for the owner");
                Err(GateError::not_found("chatroom not found").into_anyhow())
            }
        }
    }

    pub async fn service_agent_chatroom_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroom::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate_own(ctx, p, "service_agent_chatroom_delete", client.chatroom_get(ctx, id), move |r| {
                client.chatroom_delete(ctx, r.id)
            })
            .await
    }

    pub async fn service_agent_chatroom_update_basic_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        name: String,
        detail: String,
    ) -> GateResult<chatroom::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate_own(
                ctx,
                p,
                "service_agent_chatroom_update_basic_info",
                client.chatroom_get(ctx, id),
                move |r| client.chatroom_update_basic_info(ctx, r.id, name, detail),
            )
            .await
    }

    pub async fn service_agent_chatroommessage_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        chatroom_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<chatroommessage::WebhookMessage>> {
        const OP: &str = "service_agent_chatroommessage_list";
        let client = &self.clients.chat;
        let room = self.forward.fetch(ctx, OP, client.chatroom_get(ctx, chatroom_id)).await?;
        self.forward.require_owner(p, room.owner_id, OP)?;

        let page = page.with_filter("chatroom_id", room.id.to_string());
        self.forward
            .list_own(ctx, p, OP, page, move |q| client.chatroommessage_list(ctx, q))
            .await
    }

    pub async fn service_agent_chatroommessage_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroommessage::WebhookMessage> {
        self.forward
            .get_own(
                ctx,
                p,
                "service_agent_chatroommessage_get",
                self.clients.chat.chatroommessage_get(ctx, id),
            )
            .await
    }

    /// Post into one of the principal's own chatrooms, as the principal.
    pub async fn service_agent_chatroommessage_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        chatroom_id: Uuid,
        kind: MessageType,
        text: String,
        medias: Vec<Media>,
    ) -> GateResult<chatroommessage::WebhookMessage> {
        let client = &self.clients.chat;
        let source = Address::new(AddressType::Agent, p.id.to_string());
        let out = self
            .forward
            .mutate_own(
                ctx,
                p,
                "service_agent_chatroommessage_create",
                client.chatroom_get(ctx, chatroom_id),
                move |room| {
                    client.chatroommessage_create(
                        ctx,
                        chatroommessage::CreateParams {
                            customer_id: room.customer_id,
                            chatroom_id: room.id,
                            source,
                            kind,
                            text,
                            medias,
                        },
                    )
                },
            )
            .await?;
        info!(agent_id = %p.id, chatroom_id = %chatroom_id, chatroommessage_id = %out.id, "chatroom message created");
        Ok(out)
    }
}
