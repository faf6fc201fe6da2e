use anyhow::Result;
use async_trait::async_trait;
use callgate_core::RequestContext;

use super::not_implemented;
use crate::models::timeline::{Event, EventQuery};

/// timeline-manager.
#[async_trait]
pub trait TimelineClient: Send + Sync {
    async fn event_list(&self, _ctx: &RequestContext, _query: EventQuery) -> Result<Vec<Event>> {
        Err(not_implemented("event_list"))
    }
}
