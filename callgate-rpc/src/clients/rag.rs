use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{CustomerId, ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::rag::{Answer, Params, Rag};

/// rag-manager.
#[async_trait]
pub trait RagClient: Send + Sync {
    async fn rag_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Rag> {
        Err(not_implemented("rag_get"))
    }

    async fn rag_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Rag>> {
        Err(not_implemented("rag_list"))
    }

    async fn rag_create(&self, _ctx: &RequestContext, _customer_id: CustomerId, _params: Params) -> Result<Rag> {
        Err(not_implemented("rag_create"))
    }

    async fn rag_update(&self, _ctx: &RequestContext, _id: Uuid, _params: Params) -> Result<Rag> {
        Err(not_implemented("rag_update"))
    }

    async fn rag_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Rag> {
        Err(not_implemented("rag_delete"))
    }

    async fn rag_query(&self, _ctx: &RequestContext, _id: Uuid, _text: String, _top_k: u32) -> Result<Answer> {
        Err(not_implemented("rag_query"))
    }
}
