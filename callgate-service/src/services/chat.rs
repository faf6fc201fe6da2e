use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chat::{self, ChatType};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    #[allow(clippy::too_many_arguments)]
    pub async fn chat_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        kind: ChatType,
        room_owner_id: Uuid,
        participant_ids: Vec<Uuid>,
        name: String,
        detail: String,
    ) -> GateResult<chat::WebhookMessage> {
        let params = chat::CreateParams {
            customer_id: p.customer_id,
            kind,
            room_owner_id,
            participant_ids,
            name,
            detail,
        };
        let client = &self.clients.chat;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, "chat_create", move || client.chat_create(ctx, params))
            .await?;
        info!(customer_id = %p.customer_id, chat_id = %out.id, "chat created");
        Ok(out)
    }

    pub async fn chat_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<chat::WebhookMessage>> {
        let client = &self.clients.chat;
        self.forward
            .list(ctx, p, MANAGE, "chat_list", page, move |q| client.chat_list(ctx, q))
            .await
    }

    pub async fn chat_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<chat::WebhookMessage> {
        debug!(customer_id = %p.customer_id, chat_id = %id, "chat.get");
        self.forward
            .get(ctx, p, MANAGE, "chat_get", self.clients.chat.chat_get(ctx, id))
            .await
    }

    pub async fn chat_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<chat::WebhookMessage> {
        let client = &self.clients.chat;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "chat_delete", client.chat_get(ctx, id), move |c| {
                client.chat_delete(ctx, c.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, chat_id = %id, "chat deleted");
        Ok(out)
    }

    pub async fn chat_update_basic_info(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        name: String,
        detail: String,
    ) -> GateResult<chat::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chat_update_basic_info", client.chat_get(ctx, id), move |c| {
                client.chat_update_basic_info(ctx, c.id, name, detail)
            })
            .await
    }

    pub async fn chat_update_room_owner(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        room_owner_id: Uuid,
    ) -> GateResult<chat::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chat_update_room_owner", client.chat_get(ctx, id), move |c| {
                client.chat_update_room_owner_id(ctx, c.id, room_owner_id)
            })
            .await
    }

    pub async fn chat_add_participant(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        participant_id: Uuid,
    ) -> GateResult<chat::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chat_add_participant", client.chat_get(ctx, id), move |c| {
                client.chat_add_participant_id(ctx, c.id, participant_id)
            })
            .await
    }

    pub async fn chat_remove_participant(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        participant_id: Uuid,
    ) -> GateResult<chat::WebhookMessage> {
        let client = &self.clients.chat;
        self.forward
            .mutate(ctx, p, MANAGE, "chat_remove_participant", client.chat_get(ctx, id), move |c| {
                client.chat_remove_participant_id(ctx, c.id, participant_id)
            })
            .await
    }
}
