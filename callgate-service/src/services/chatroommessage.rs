use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chatroommessage;
use tracing::debug;
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    pub async fn chatroommessage_list_by_chatroom(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        chatroom_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<chatroommessage::WebhookMessage>> {
        const OP: &str = "chatroommessage_list_by_chatroom";
        let client = &self.clients.chat;
        let room = self.forward.fetch(ctx, OP, client.chatroom_get(ctx, chatroom_id)).await?;

        let page = page.with_filter("chatroom_id", room.id.to_string());
        self.forward
            .list_for(ctx, p, room.customer_id, MANAGE, OP, page, move |q| {
                client.chatroommessage_list(ctx, q)
            })
            .await
    }

    pub async fn chatroommessage_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroommessage::WebhookMessage> {
        debug!(customer_id = %p.customer_id, chatroommessage_id = %id, "chatroommessage.get");
        self.forward
            .get(ctx, p, MANAGE, "chatroommessage_get", self.clients.chat.chatroommessage_get(ctx, id))
            .await
    }

    pub async fn chatroommessage_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatroommessage::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chatroommessage_delete", client.chatroommessage_get(ctx, id), move |m| {
                client.chatroommessage_delete(ctx, m.id)
            })
            .await
    }
}
