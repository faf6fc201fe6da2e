use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::campaign::{BasicInfo, Campaign, CreateParams, ResourceInfo, Status};
use crate::models::campaigncall::Campaigncall;
use crate::models::flow::Action;

/// campaign-manager: campaigns and their campaigncalls.
#[async_trait]
pub trait CampaignClient: Send + Sync {
    async fn campaign_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Campaign> {
        Err(not_implemented("campaign_get"))
    }

    async fn campaign_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Campaign>> {
        Err(not_implemented("campaign_list"))
    }

    async fn campaign_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Campaign> {
        Err(not_implemented("campaign_create"))
    }

    async fn campaign_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Campaign> {
        Err(not_implemented("campaign_delete"))
    }

    async fn campaign_update_basic_info(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _info: BasicInfo,
    ) -> Result<Campaign> {
        Err(not_implemented("campaign_update_basic_info"))
    }

    async fn campaign_update_status(&self, _ctx: &RequestContext, _id: Uuid, _status: Status) -> Result<Campaign> {
        Err(not_implemented("campaign_update_status"))
    }

    async fn campaign_update_service_level(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _service_level: i32,
    ) -> Result<Campaign> {
        Err(not_implemented("campaign_update_service_level"))
    }

    async fn campaign_update_actions(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _actions: Vec<Action>,
    ) -> Result<Campaign> {
        Err(not_implemented("campaign_update_actions"))
    }

    async fn campaign_update_resource_info(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _info: ResourceInfo,
    ) -> Result<Campaign> {
        Err(not_implemented("campaign_update_resource_info"))
    }

    async fn campaign_update_next_campaign_id(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _next_campaign_id: Uuid,
    ) -> Result<Campaign> {
        Err(not_implemented("campaign_update_next_campaign_id"))
    }

    async fn campaigncall_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Campaigncall> {
        Err(not_implemented("campaigncall_get"))
    }

    async fn campaigncall_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Campaigncall>> {
        Err(not_implemented("campaigncall_list"))
    }

    async fn campaigncall_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Campaigncall> {
        Err(not_implemented("campaigncall_delete"))
    }
}
