use callgate_core::forward::FILTER_OWNER_ID;
use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chatroom;
use tracing::debug;
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    /// Chatrooms belonging to one agent of the caller's customer.
    pub async fn chatroom_list_by_owner(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        owner_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<chatroom::WebhookMessage>> {
        let client = &self.clients.chat;
        let page = page.with_filter(FILTER_OWNER_ID, owner_id.to_string());
        self.forward
            .list(ctx, p, MANAGE, "chatroom_list_by_owner", page, move |q| client.chatroom_list(ctx, q))
            .await
    }

    pub async fn chatroom_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroom::WebhookMessage> {
        debug!(customer_id = %p.customer_id, chatroom_id = %id, "chatroom.get");
        self.forward
            .get(ctx, p, MANAGE, "chatroom_get", self.clients.chat.chatroom_get(ctx, id))
            .await
    }

    pub async fn chatroom_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroom::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chatroom_delete", client.chatroom_get(ctx, id), move |r| {
                client.chatroom_delete(ctx, r.id)
            })
            .await
    }

    pub async fn chatroom_update_basic_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        name: String,
        detail: String,
    ) -> GateResult<chatroom::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chatroom_update_basic_info", client.chatroom_get(ctx, id), move |r| {
                client.chatroom_update_basic_info(ctx, r.id, name, detail)
            })
            .await
    }
}
