use anyhow::Result;
use async_trait::async_trait;
use callgate_core::{CustomerId, ListQuery, RequestContext};
use uuid::Uuid;

use super::not_implemented;
use crate::models::contact::{Contact, CreateParams, Email, EntryUpdate, PhoneNumber, UpdateParams};

/// contact-manager. Every sub-entry mutation returns the whole contact.
#[async_trait]
pub trait ContactClient: Send + Sync {
    async fn contact_get(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Contact> {
        Err(not_implemented("contact_get"))
    }

    async fn contact_list(&self, _ctx: &RequestContext, _query: ListQuery) -> Result<Vec<Contact>> {
        Err(not_implemented("contact_list"))
    }

    async fn contact_create(&self, _ctx: &RequestContext, _params: CreateParams) -> Result<Contact> {
        Err(not_implemented("contact_create"))
    }

    async fn contact_update(&self, _ctx: &RequestContext, _id: Uuid, _params: UpdateParams) -> Result<Contact> {
        Err(not_implemented("contact_update"))
    }

    async fn contact_delete(&self, _ctx: &RequestContext, _id: Uuid) -> Result<Contact> {
        Err(not_implemented("contact_delete"))
    }

    /// Find a customer's contact by E.164 phone number or email address.
    async fn contact_lookup(
        &self,
        _ctx: &RequestContext,
        _customer_id: CustomerId,
        _phone_e164: String,
        _email: String,
    ) -> Result<Contact> {
        Err(not_implemented("contact_lookup"))
    }

    async fn contact_phone_number_create(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _phone_number: PhoneNumber,
    ) -> Result<Contact> {
        Err(not_implemented("contact_phone_number_create"))
    }

    async fn contact_phone_number_update(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _phone_number_id: Uuid,
        _update: EntryUpdate,
    ) -> Result<Contact> {
        Err(not_implemented("contact_phone_number_update"))
    }

    async fn contact_phone_number_delete(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _phone_number_id: Uuid,
    ) -> Result<Contact> {
        Err(not_implemented("contact_phone_number_delete"))
    }

    async fn contact_email_create(&self, _ctx: &RequestContext, _id: Uuid, _email: Email) -> Result<Contact> {
        Err(not_implemented("contact_email_create"))
    }

    async fn contact_email_update(
        &self,
        _ctx: &RequestContext,
        _id: Uuid,
        _email_id: Uuid,
        _update: EntryUpdate,
    ) -> Result<Contact> {
        Err(not_implemented("contact_email_update"))
    }

    async fn contact_email_delete(&self, _ctx: &RequestContext, _id: Uuid, _email_id: Uuid) -> Result<Contact> {
        Err(not_implemented("contact_email_delete"))
    }

    async fn contact_tag_add(&self, _ctx: &RequestContext, _id: Uuid, _tag_id: Uuid) -> Result<Contact> {
        Err(not_implemented("contact_tag_add"))
    }

    async fn contact_tag_remove(&self, _ctx: &RequestContext, _id: Uuid, _tag_id: Uuid) -> Result<Contact> {
        Err(not_implemented("contact_tag_remove"))
    }
}
