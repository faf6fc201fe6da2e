use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::talk::{self, ParticipantInput, Talk};
use crate::models::talkmessage::{self, Talkmessage};
use crate::models::talkparticipant::Participant;

/// talk-manager: talks, their participants and messages.
#[async_trait]
pub trait TalkClient: Send + Sync {
    async fn talk_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Talk> {
        Err(not_implemented("talk_get"))
    }

    async fn talk_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Talk>> {
        Err(not_implemented("talk_list"))
    }

    async fn talk_create(&self, _ctx: &RequestContext, _params: talk::CreateParams) -> Result<Talk> {
        Err(not_implemented("talk_create"))
    }

    async fn talk_update(&self, _ctx: &RequestContext, _id: Uuid, _params: talk::UpdateParams) -> Result<Talk> {
        Err(not_implemented("talk_update"))
    }

    async fn talk_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Talk> {
        Err(not_implemented("talk_delete"))
    }

    async fn talk_participant_list(&self, _ctx: &RequestContext, _talk_id: Uuid) -> Result<Vec<Participant>> {
        Err(not_implemented("talk_participant_list"))
    }

    async fn talk_participant_create(
        &self,
        _ctx: &RequestContext,
        _talk_id: Uuid,
        _participant: ParticipantInput,
    ) -> Result<Participant> {
        Err(not_implemented("talk_participant_create"))
    }

    async fn talk_participant_delete(
        &self,
        _ctx: &RequestContext,
        _talk_id: Uuid,
        _participant_id: Uuid,
    ) -> Result<Participant> {
        Err(not_implemented("talk_participant_delete"))
    }

    async fn talkmessage_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Talkmessage> {
        Err(not_implemented("talkmessage_get"))
    }

    async fn talkmessage_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Talkmessage>> {
        Err(not_implemented("talkmessage_list"))
    }

    async fn talkmessage_create(
        &self,
        _ctx: &RequestContext,
        _params: talkmessage::CreateParams,
    ) -> Result<Talkmessage> {
        Err(not_implemented("talkmessage_create"))
    }

    async fn talkmessage_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Talkmessage> {
        Err(not_implemented("talkmessage_delete"))
    }

    async fn talkmessage_reaction_create(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _owner_type: String,
        _owner_id: Uuid,
        _emoji: String,
    ) -> Result<Talkmessage> {
        Err(not_implemented("talkmessage_reaction_create"))
    }
}
