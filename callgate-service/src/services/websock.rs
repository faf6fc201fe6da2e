use callgate_core::{GateResult, Principal, RequestContext};
use tracing::info;

use crate::handler::ServiceHandler;
use crate::realtime::Connection;

impl ServiceHandler {
    /// Hand an upgraded connection to the realtime hub. Subscriptions
    /// made over it are checked with [`crate::realtime::authorize_topic`].
    pub async fn websock_create(&self, ctx: &RequestContext, p: &Principal, conn: Connection) -> GateResult<()> {
        info!(agent_id = %p.id, customer_id = %p.customer_id, "websocket opened");
        let result = ctx.guard(self.realtime.websock(ctx, p, conn)).await;
        info!(agent_id = %p.id, ok = result.is_ok(), "websocket closed");
        result
    }
}
