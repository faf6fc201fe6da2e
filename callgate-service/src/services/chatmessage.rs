use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chatmessage::{self, Media, MessageType};
use callgate_rpc::models::common::Address;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    /// Post into a chat. The chat is fetched first and the message is
    /// created under the chat's customer.
    #[allow(clippy::too_many_arguments)]
    pub async fn chatmessage_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        chat_id: Uuid,
        source: Address,
        kind: MessageType,
        text: String,
        medias: Vec<Media>,
    ) -> GateResult<chatmessage::WebhookMessage> {
        let client = &self.clients.chat;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "chatmessage_create", client.chat_get(ctx, chat_id), move |chat| {
                client.chatmessage_create(
                    ctx,
                    chatmessage::CreateParams {
                        customer_id: chat.customer_id,
                        chat_id: chat.id,
                        source,
                        kind,
                        text,
                        medias,
                    },
                )
            })
            .await?;
        info!(customer_id = %p.customer_id, chat_id = %chat_id, chatmessage_id = %out.id, "chatmessage created");
        Ok(out)
    }

    pub async fn chatmessage_list_by_chat(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        chat_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<chatmessage::WebhookMessage>> {
        const OP: &str = "chatmessage_list_by_chat";
        let client = &self.clients.chat;
        let chat = self.forward.fetch(ctx, OP, client.chat_get(ctx, chat_id)).await?;

        let page = page.with_filter("chat_id", chat.id.to_string());
        self.forward
            .list_for(ctx, p, chat.customer_id, MANAGE, OP, page, move |q| client.chatmessage_list(ctx, q))
            .await
    }

    pub async fn chatmessage_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatmessage::WebhookMessage> {
        debug!(customer_id = %p.customer_id, chatmessage_id = %id, "chatmessage.get");
        self.forward
            .get(ctx, p, MANAGE, "chatmessage_get", self.clients.chat.chatmessage_get(ctx, id))
            .await
    }

    pub async fn chatmessage_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<chatmessage::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chatmessage_delete", client.chatmessage_get(ctx, id), move |m| {
                client.chatmessage_delete(ctx, m.id)
            })
            .await
    }
}
