//! Agent-to-agent talks. Access follows seating rather than capability
//! bits: an agent reaches a talk only as one of its participants, except
//! that the messages of a public talk are readable by every agent of the
//! customer.

use std::collections::HashSet;

use callgate_core::forward::{DENIED_MESSAGE, FILTER_OWNER_ID};
use callgate_core::{GateError, GateResult, IntoWebhook, PageRequest, Principal, RequestContext};
use callgate_rpc::models::chatmessage::{Media, MessageType};
use callgate_rpc::models::talk::{self, ParticipantInput, Talk, TalkType, OWNER_TYPE_AGENT};
use callgate_rpc::models::{talkmessage, talkparticipant};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::handler::ServiceHandler;

const FILTER_OWNER_TYPE: &str = "owner_type";
const FILTER_TYPE: &str = "type";
const FILTER_CHAT_ID: &str = "chat_id";

/// Newest first, each talk once, at most `size` of them.
fn merge_talks(public: Vec<Talk>, seated: Vec<Talk>, size: usize) -> Vec<Talk> {
    let mut seen = HashSet::new();
    let mut talks: Vec<Talk> = public
        .into_iter()
        .chain(seated.into_iter().filter(|t| t.kind != TalkType::Talk))
        .filter(|t| seen.insert(t.id))
        .collect();
    talks.sort_by(|a, b| b.tm_create.cmp(&a.tm_create));
    talks.truncate(size);
    talks
}

impl ServiceHandler {
    /// Fetch a talk the principal is seated in.
    async fn talk_for_participant(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
        op: &'static str,
    ) -> GateResult<Talk> {
        let talk = self.forward.fetch(ctx, op, self.clients.talk.talk_get(ctx, talk_id)).await?;
        self.forward.require_participant(p, talk.agent_ids(), op)?;
        Ok(talk)
    }

    /// New agent participants must belong to the caller's customer.
    async fn check_agent_seat(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        seat: &ParticipantInput,
        op: &'static str,
    ) -> GateResult<()> {
        if seat.owner_type != OWNER_TYPE_AGENT || seat.owner_id == p.id {
            return Ok(());
        }
        let agent = self
            .forward
            .fetch(ctx, op, self.clients.agent.agent_get(ctx, seat.owner_id))
            .await?;
        if agent.customer_id != p.customer_id {
            warn!(op, agent_id = %p.id, participant_id = %seat.owner_id, "participant belongs to another customer");
            return Err(GateError::permission_denied(DENIED_MESSAGE).into_anyhow());
        }
        Ok(())
    }

    pub async fn service_agent_talk_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<talk::WebhookMessage> {
        let talk = self.talk_for_participant(ctx, p, id, "service_agent_talk_get").await?;
        Ok(talk.to_webhook_message())
    }

    /// The customer's public talks plus every talk the agent is seated in.
    pub async fn service_agent_talk_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<talk::WebhookMessage>> {
        const OP: &str = "service_agent_talk_list";
        let page = PageRequest {
            size: page.size,
            token: page.token,
            ..Default::default()
        };

        let mut public = self.forward.scoped_query(p.customer_id, page.clone());
        public.filters.insert(FILTER_TYPE.to_string(), "talk".to_string());
        let mut seated = self.forward.scoped_query(p.customer_id, page);
        seated
            .filters
            .insert(FILTER_OWNER_TYPE.to_string(), OWNER_TYPE_AGENT.to_string());
        seated.filters.insert(FILTER_OWNER_ID.to_string(), p.id.to_string());
        let size = public.size as usize;
        debug!(op = OP, agent_id = %p.id, size, token = %public.token, "list talks");

        let client = &self.clients.talk;
        let public = ctx.guard(client.talk_list(ctx, public)).await?;
        let seated = ctx.guard(client.talk_list(ctx, seated)).await?;
        Ok(merge_talks(public, seated, size)
            .iter()
            .map(IntoWebhook::to_webhook_message)
            .collect())
    }

    /// Open a talk with the caller seated as its creator.
    pub async fn service_agent_talk_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        kind: TalkType,
        name: String,
        detail: String,
        participants: Vec<ParticipantInput>,
    ) -> GateResult<talk::WebhookMessage> {
        const OP: &str = "service_agent_talk_create";
        for seat in &participants {
            self.check_agent_seat(ctx, p, seat, OP).await?;
        }

        let params = talk::CreateParams {
            customer_id: p.customer_id,
            kind,
            name,
            detail,
            creator_type: OWNER_TYPE_AGENT.to_string(),
            creator_id: p.id,
            participants,
        };
        let talk = ctx.guard(self.clients.talk.talk_create(ctx, params)).await?;
        info!(agent_id = %p.id, talk_id = %talk.id, kind = ?kind, "talk created");
        Ok(talk.to_webhook_message())
    }

    pub async fn service_agent_talk_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        name: Option<String>,
        detail: Option<String>,
    ) -> GateResult<talk::WebhookMessage> {
        let talk = self.talk_for_participant(ctx, p, id, "service_agent_talk_update").await?;
        let params = talk::UpdateParams { name, detail };
        let updated = ctx.guard(self.clients.talk.talk_update(ctx, talk.id, params)).await?;
        Ok(updated.to_webhook_message())
    }

    pub async fn service_agent_talk_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<talk::WebhookMessage> {
        let talk = self.talk_for_participant(ctx, p, id, "service_agent_talk_delete").await?;
        let deleted = ctx.guard(self.clients.talk.talk_delete(ctx, talk.id)).await?;
        info!(agent_id = %p.id, talk_id = %id, "talk deleted");
        Ok(deleted.to_webhook_message())
    }

    pub async fn service_agent_talk_participant_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
    ) -> GateResult<Vec<talkparticipant::WebhookMessage>> {
        let talk = self
            .talk_for_participant(ctx, p, talk_id, "service_agent_talk_participant_list")
            .await?;
        let participants = ctx.guard(self.clients.talk.talk_participant_list(ctx, talk.id)).await?;
        Ok(participants.iter().map(IntoWebhook::to_webhook_message).collect())
    }

    pub async fn service_agent_talk_participant_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
        seat: ParticipantInput,
    ) -> GateResult<talkparticipant::WebhookMessage> {
        const OP: &str = "service_agent_talk_participant_create";
        let talk = self.talk_for_participant(ctx, p, talk_id, OP).await?;
        self.check_agent_seat(ctx, p, &seat, OP).await?;

        let participant = ctx
            .guard(self.clients.talk.talk_participant_create(ctx, talk.id, seat))
            .await?;
        info!(agent_id = %p.id, talk_id = %talk_id, participant_id = %participant.id, "participant added");
        Ok(participant.to_webhook_message())
    }

    pub async fn service_agent_talk_participant_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
        participant_id: Uuid,
    ) -> GateResult<talkparticipant::WebhookMessage> {
        let talk = self
            .talk_for_participant(ctx, p, talk_id, "service_agent_talk_participant_delete")
            .await?;
        let participant = ctx
            .guard(self.clients.talk.talk_participant_delete(ctx, talk.id, participant_id))
            .await?;
        info!(agent_id = %p.id, talk_id = %talk_id, participant_id = %participant_id, "participant removed");
        Ok(participant.to_webhook_message())
    }

    pub async fn service_agent_talk_message_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<talkmessage::WebhookMessage> {
        const OP: &str = "service_agent_talk_message_get";
        let message = self.forward.fetch(ctx, OP, self.clients.talk.talkmessage_get(ctx, id)).await?;
        self.talk_for_participant(ctx, p, message.chat_id, OP).await?;
        Ok(message.to_webhook_message())
    }

    /// Messages of a talk. Public talks of the caller's customer are
    /// readable without a seat.
    pub async fn service_agent_talk_message_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
        page: PageRequest,
    ) -> GateResult<Vec<talkmessage::WebhookMessage>> {
        const OP: &str = "service_agent_talk_message_list";
        let client = &self.clients.talk;
        let talk = self.forward.fetch(ctx, OP, client.talk_get(ctx, talk_id)).await?;
        let public = talk.kind == TalkType::Talk && talk.customer_id == p.customer_id;
        if !public {
            self.forward.require_participant(p, talk.agent_ids(), OP)?;
        }

        let page = page.with_filter(FILTER_CHAT_ID, talk.id.to_string());
        let query = self.forward.scoped_query(talk.customer_id, page);
        debug!(op = OP, talk_id = %talk.id, size = query.size, token = %query.token, "list talk messages");
        let messages = ctx.guard(client.talkmessage_list(ctx, query)).await?;
        Ok(messages.iter().map(IntoWebhook::to_webhook_message).collect())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn service_agent_talk_message_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        talk_id: Uuid,
        parent_id: Option<Uuid>,
        kind: MessageType,
        text: String,
        medias: Vec<Media>,
    ) -> GateResult<talkmessage::WebhookMessage> {
        const OP: &str = "service_agent_talk_message_create";
        let talk = self.talk_for_participant(ctx, p, talk_id, OP).await?;
        if text.trim().is_empty() && medias.is_empty() {
            return Err(GateError::invalid_argument("message needs text or media").into_anyhow());
        }

        let params = talkmessage::CreateParams {
            customer_id: talk.customer_id,
            chat_id: talk.id,
            parent_id,
            owner_type: OWNER_TYPE_AGENT.to_string(),
            owner_id: p.id,
            kind,
            text,
            medias,
        };
        let message = ctx.guard(self.clients.talk.talkmessage_create(ctx, params)).await?;
        info!(agent_id = %p.id, talk_id = %talk_id, message_id = %message.id, "talk message posted");
        Ok(message.to_webhook_message())
    }

    /// Only the author may remove a message.
    pub async fn service_agent_talk_message_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<talkmessage::WebhookMessage> {
        const OP: &str = "service_agent_talk_message_delete";
        let client = &self.clients.talk;
        let message = self.forward.fetch(ctx, OP, client.talkmessage_get(ctx, id)).await?;
        let author = (message.owner_type == OWNER_TYPE_AGENT).then_some(message.owner_id);
        self.forward.require_owner(p, author, OP)?;

        let deleted = ctx.guard(client.talkmessage_delete(ctx, message.id)).await?;
        info!(agent_id = %p.id, message_id = %id, "talk message deleted");
        Ok(deleted.to_webhook_message())
    }

    pub async fn service_agent_talk_message_reaction_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        message_id: Uuid,
        emoji: String,
    ) -> GateResult<talkmessage::WebhookMessage> {
        const OP: &str = "service_agent_talk_message_reaction_create";
        let client = &self.clients.talk;
        let message = self.forward.fetch(ctx, OP, client.talkmessage_get(ctx, message_id)).await?;
        self.talk_for_participant(ctx, p, message.chat_id, OP).await?;
        if emoji.trim().is_empty() {
            return Err(GateError::invalid_argument("emoji must not be empty").into_anyhow());
        }

        let reacted = ctx
            .guard(client.talkmessage_reaction_create(ctx, message.id, OWNER_TYPE_AGENT.to_string(), p.id, emoji))
            .await?;
        Ok(reacted.to_webhook_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgate_core::CustomerId;
    use chrono::{TimeZone, Utc};

    fn talk(kind: TalkType, minute: u32) -> Talk {
        Talk {
            id: Uuid::new_v4(),
            customer_id: CustomerId::new(),
            kind,
            name: String::new(),
            detail: String::new(),
            participants: Vec::new(),
            tm_create: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, minute, 0).unwrap()),
            tm_update: None,
            tm_delete: None,
        }
    }

    #[test]
    fn merged_talks_are_unique_and_newest_first() {
        let shared = talk(TalkType::Talk, 10);
        let group = talk(TalkType::Group, 30);
        let direct = talk(TalkType::Direct, 20);
        let old = talk(TalkType::Talk, 1);

        let out = merge_talks(
            vec![shared.clone(), old.clone()],
            vec![shared.clone(), group.clone(), direct.clone(), group.clone()],
            3,
        );

        let ids: Vec<_> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![group.id, direct.id, shared.id]);
    }
}
