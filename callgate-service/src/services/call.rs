use callgate_core::{GateResult, IntoWebhook, PageRequest, Principal, RequestContext};
use callgate_rpc::models::call::{self, MuteDirection, RecordingParams, TalkParams};
use callgate_rpc::models::common::Address;
use callgate_rpc::models::flow::Action;
use callgate_rpc::models::groupcall;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};
use crate::realtime::{Connection, Encapsulation};

/// Outbound call request. Without `flow_id` the call runs `actions` in a
/// temporary flow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallCreate {
    #[serde(default)]
    pub flow_id: Option<Uuid>,
    #[serde(default)]
    pub actions: Vec<Action>,
    pub source: Address,
    pub destinations: Vec<Address>,
    #[serde(default)]
    pub early_execution: bool,
    #[serde(default)]
    pub connect: bool,
}

impl ServiceHandler {
    /// Returns the calls and the groupcalls created for multi-target
    /// destinations.
    pub async fn call_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        req: CallCreate,
    ) -> GateResult<(Vec<call::WebhookMessage>, Vec<groupcall::WebhookMessage>)> {
        const OP: &str = "call_create";
        debug!(customer_id = %p.customer_id, destinations = req.destinations.len(), "call.create");
        self.forward.authorize(p, p.customer_id, MANAGE, OP)?;

        let flow = self.flow_for_creation(ctx, p, req.flow_id, req.actions, OP).await?;
        let params = call::CreateParams {
            customer_id: p.customer_id,
            flow_id: flow.id,
            master_call_id: None,
            source: req.source,
            destinations: req.destinations,
            early_execution: req.early_execution,
            connect: req.connect,
        };
        let (calls, groupcalls) = ctx.guard(self.clients.call.call_create(ctx, params)).await?;
        info!(
            customer_id = %p.customer_id,
            flow_id = %flow.id,
            calls = calls.len(),
            groupcalls = groupcalls.len(),
            "calls created"
        );

        Ok((
            calls.iter().map(IntoWebhook::to_webhook_message).collect(),
            groupcalls.iter().map(IntoWebhook::to_webhook_message).collect(),
        ))
    }

    pub async fn call_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<call::WebhookMessage> {
        debug!(customer_id = %p.customer_id, call_id = %id, "call.get");
        self.forward
            .get(ctx, p, MANAGE, "call_get", self.clients.call.call_get(ctx, id))
            .await
    }

    pub async fn call_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<call::WebhookMessage>> {
        let client = &self.clients.call;
        self.forward
            .list(ctx, p, MANAGE, "call_list", page, move |q| client.call_list(ctx, q))
            .await
    }

    pub async fn call_delete(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<call::WebhookMessage> {
        let client = &self.clients.call;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "call_delete", client.call_get(ctx, id), move |c| {
                client.call_delete(ctx, c.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, call_id = %id, "call deleted");
        Ok(out)
    }

    pub async fn call_hangup(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<call::WebhookMessage> {
        let client = &self.clients.call;
        self.forward
            .mutate(ctx, p, MANAGE, "call_hangup", client.call_get(ctx, id), move |c| {
                client.call_hangup(ctx, c.id)
            })
            .await
    }

    pub async fn call_talk(&self, ctx: &RequestContext, p: &Principal, id: Uuid, params: TalkParams) -> GateResult<()> {
        debug!(call_id = %id, language = %params.language, "call.talk");
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_talk", client.call_get(ctx, id), move |c| {
                client.call_talk(ctx, c.id, params)
            })
            .await
    }

    pub async fn call_hold_on(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_hold_on", client.call_get(ctx, id), move |c| {
                client.call_hold_on(ctx, c.id)
            })
            .await
    }

    pub async fn call_hold_off(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_hold_off", client.call_get(ctx, id), move |c| {
                client.call_hold_off(ctx, c.id)
            })
            .await
    }

    pub async fn call_mute_on(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        direction: MuteDirection,
    ) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_mute_on", client.call_get(ctx, id), move |c| {
                client.call_mute_on(ctx, c.id, direction)
            })
            .await
    }

    pub async fn call_mute_off(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        direction: MuteDirection,
    ) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_mute_off", client.call_get(ctx, id), move |c| {
                client.call_mute_off(ctx, c.id, direction)
            })
            .await
    }

    pub async fn call_moh_on(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_moh_on", client.call_get(ctx, id), move |c| {
                client.call_moh_on(ctx, c.id)
            })
            .await
    }

    pub async fn call_moh_off(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_moh_off", client.call_get(ctx, id), move |c| {
                client.call_moh_off(ctx, c.id)
            })
            .await
    }

    pub async fn call_silence_on(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_silence_on", client.call_get(ctx, id), move |c| {
                client.call_silence_on(ctx, c.id)
            })
            .await
    }

    pub async fn call_silence_off(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<()> {
        let client = &self.clients.call;
        self.forward
            .apply(ctx, p, MANAGE, "call_silence_off", client.call_get(ctx, id), move |c| {
                client.call_silence_off(ctx, c.id)
            })
            .await
    }

    pub async fn call_recording_start(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: RecordingParams,
    ) -> GateResult<call::WebhookMessage> {
        let client = &self.clients.call;
        self.forward
            .mutate(ctx, p, MANAGE, "call_recording_start", client.call_get(ctx, id), move |c| {
                client.call_recording_start(ctx, c.id, params)
            })
            .await
    }

    pub async fn call_recording_stop(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<call::WebhookMessage> {
        let client = &self.clients.call;
        self.forward
            .mutate(ctx, p, MANAGE, "call_recording_stop", client.call_get(ctx, id), move |c| {
                client.call_recording_stop(ctx, c.id)
            })
            .await
    }

    /// Check the call, then give the connection to the realtime hub for
    /// the life of the stream.
    pub async fn call_media_stream_start(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        encapsulation: Encapsulation,
        conn: Connection,
    ) -> GateResult<()> {
        let realtime = &self.realtime;
        self.forward
            .apply(
                ctx,
                p,
                MANAGE,
                "call_media_stream_start",
                self.clients.call.call_get(ctx, id),
                move |c| realtime.media_stream(ctx, c.id, encapsulation, conn),
            )
            .await
    }
}
