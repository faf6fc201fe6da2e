use callgate_core::{GateResult, Principal, RequestContext};
use callgate_rpc::models::common::Address;
use callgate_rpc::models::transfer::{self, TransferType};
use tracing::info;
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

impl ServiceHandler {
    /// Transfer the call `transferer_call_id` to `transferee_addresses`.
    /// Authorized against the transferring call's customer.
    pub async fn transfer_start(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        kind: TransferType,
        transferer_call_id: Uuid,
        transferee_addresses: Vec<Address>,
    ) -> GateResult<transfer::WebhookMessage> {
        let calls = &self.clients.call;
        let transfers = &self.clients.transfer;
        let out = self
            .forward
            .mutate(
                ctx,
                p,
                MANAGE,
                "transfer_start",
                calls.call_get(ctx, transferer_call_id),
                move |c| {
                    transfers.transfer_start(
                        ctx,
                        transfer::StartParams {
                            kind,
                            transferer_call_id: c.id,
                            transferee_addresses,
                        },
                    )
                },
            )
            .await?;
        info!(transfer_id = %out.id, transferer_call_id = %transferer_call_id, kind = ?kind, "transfer started");
        Ok(out)
    }
}
