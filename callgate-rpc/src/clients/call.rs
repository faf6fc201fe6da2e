use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::call::{Call, CreateParams, MuteDirection, RecordingParams, TalkParams};
use crate::models::groupcall::{self, Groupcall};

/// call-manager: calls and groupcalls.
#[async_trait]
pub trait CallClient: Send + Sync {
    async fn call_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Call> {
        Err(not_implemented("call_get"))
    }

    async fn call_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Call>> {
        Err(not_implemented("call_list"))
    }

    /// Returns the created calls and the groupcalls created for
    /// multi-target destinations.
    async fn call_create(
        &self,
        _ctx: &RequestContext,
        _params: CreateParams,
    ) -> Result<(Vec<Call>, Vec<Groupcall>)> {
        Err(not_implemented("call_create"))
    }

    async fn call_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Call> {
        Err(not_implemented("call_delete"))
    }

    async fn call_hangup(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Call> {
        Err(not_implemented("call_hangup"))
    }

    async fn call_talk(&self, _ctx: &RequestContext, _id: Uuid, _params: TalkParams) -> Result<()> {
        Err(not_implemented("call_talk"))
    }

    async fn call_hold_on(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_hold_on"))
    }

    async fn call_hold_off(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_hold_off"))
    }

    async fn call_mute_on(&self, _ctx: &RequestContext, _id: Uuid, _direction: MuteDirection) -> Result<()> {
        Err(not_implemented("call_mute_on"))
    }

    async fn call_mute_off(&self, _ctx: &RequestContext, _id: Uuid, _direction: MuteDirection) -> Result<()> {
        Err(not_implemented("call_mute_off"))
    }

    async fn call_moh_on(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_moh_on"))
    }

    async fn call_moh_off(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_moh_off"))
    }

    async fn call_silence_on(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_silence_on"))
    }

    async fn call_silence_off(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        Err(not_implemented("call_silence_off"))
    }

    async fn call_recording_start(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _params: RecordingParams,
    ) -> Result<Call> {
        Err(not_implemented("call_recording_start"))
    }

    async fn call_recording_stop(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Call> {
        Err(not_implemented("call_recording_stop"))
    }

    async fn groupcall_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Groupcall> {
        Err(not_implemented("groupcall_get"))
    }

    async fn groupcall_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Groupcall>> {
        Err(not_implemented("groupcall_list"))
    }

    async fn groupcall_create(
        &self,
        _ctx: &RequestContext,
        _params: groupcall::CreateParams,
    ) -> Result<Groupcall> {
        Err(not_implemented("groupcall_create"))
    }

    async fn groupcall_hangup(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Groupcall> {
        Err(not_implemented("groupcall_hangup"))
    }

    async fn groupcall_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Groupcall> {
        Err(not_implemented("groupcall_delete"))
    }
}
