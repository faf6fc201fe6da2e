use anyhow::Result;
use async_trait::async_trait;
use callgate_core::RequestContext;

use super::not_implemented;
use crate::models::transfer::{StartParams, Transfer};

/// transfer-manager.
#[async_trait]
pub trait TransferClient: Send + Sync {
    async fn transfer_start(&self, _ctx: &RequestContext, _params: StartParams) -> Result<Transfer> {
        Err(not_implemented("transfer_start"))
    }
}
