//! Contact book as seen by an agent: any member of the customer may read
//! and edit the customer's contacts.

use callgate_core::{GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::contact::{self, Email, EntryUpdate, PhoneNumber, UpdateParams};
use tracing::{debug, info};
use uuid::Uuid;

use super::contact::{check_email, check_lookup, check_phone_number};
use crate::handler::{ServiceHandler, MEMBER};

impl ServiceHandler {
    pub async fn service_agent_contact_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: contact::CreateParams,
    ) -> GateResult<contact::WebhookMessage> {
        params.customer_id = p.customer_id;
        let client = &self.clients.contact;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MEMBER, "service_agent_contact_create", move || {
                client.contact_create(ctx, params)
            })
            .await?;
        info!(customer_id = %p.customer_id, agent_id = %p.id, contact_id = %out.id, "contact created by agent");
        Ok(out)
    }

    pub async fn service_agent_contact_get(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        debug!(agent_id = %p.id, contact_id = %id, "service_agent.contact.get");
        self.forward
            .get(ctx, p, MEMBER, "service_agent_contact_get", self.clients.contact.contact_get(ctx, id))
            .await
    }

    pub async fn service_agent_contact_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<contact::WebhookMessage>> {
        let client = &self.clients.contact;
        self.forward
            .list(ctx, p, MEMBER, "service_agent_contact_list", page, move |q| client.contact_list(ctx, q))
            .await
    }

    pub async fn service_agent_contact_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: UpdateParams,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, "service_agent_contact_update", client.contact_get(ctx, id), move |c| {
                client.contact_update(ctx, c.id, params)
            })
            .await
    }

    pub async fn service_agent_contact_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        let out = self
            .forward
            .mutate(ctx, p, MEMBER, "service_agent_contact_delete", client.contact_get(ctx, id), move |c| {
                client.contact_delete(ctx, c.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, agent_id = %p.id, contact_id = %id, "contact deleted by agent");
        Ok(out)
    }

    pub async fn service_agent_contact_lookup(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        phone_e164: String,
        email: String,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_lookup";
        self.forward.authorize(p, p.customer_id, MEMBER, OP)?;
        check_lookup(&phone_e164, &email)?;

        let lookup = self.clients.contact.contact_lookup(ctx, p.customer_id, phone_e164, email);
        self.forward.get(ctx, p, MEMBER, OP, lookup).await
    }

    pub async fn service_agent_contact_phone_number_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        phone_number: PhoneNumber,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_phone_number_create";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| async move {
                check_phone_number(&phone_number)?;
                client.contact_phone_number_create(ctx, c.id, phone_number).await
            })
            .await
    }

    pub async fn service_agent_contact_phone_number_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        phone_number_id: Uuid,
        update: EntryUpdate,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_phone_number_update";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| {
                client.contact_phone_number_update(ctx, c.id, phone_number_id, update)
            })
            .await
    }

    pub async fn service_agent_contact_phone_number_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        phone_number_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_phone_number_delete";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| {
                client.contact_phone_number_delete(ctx, c.id, phone_number_id)
            })
            .await
    }

    pub async fn service_agent_contact_email_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        email: Email,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_email_create";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| async move {
                check_email(&email)?;
                client.contact_email_create(ctx, c.id, email).await
            })
            .await
    }

    pub async fn service_agent_contact_email_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        email_id: Uuid,
        update: EntryUpdate,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_email_update";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| {
                client.contact_email_update(ctx, c.id, email_id, update)
            })
            .await
    }

    pub async fn service_agent_contact_email_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        email_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "service_agent_contact_email_delete";
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, OP, client.contact_get(ctx, id), move |c| {
                client.contact_email_delete(ctx, c.id, email_id)
            })
            .await
    }

    pub async fn service_agent_contact_tag_add(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        tag_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, "service_agent_contact_tag_add", client.contact_get(ctx, id), move |c| {
                client.contact_tag_add(ctx, c.id, tag_id)
            })
            .await
    }

    pub async fn service_agent_contact_tag_remove(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        tag_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MEMBER, "service_agent_contact_tag_remove", client.contact_get(ctx, id), move |c| {
                client.contact_tag_remove(ctx, c.id, tag_id)
            })
            .await
    }
}
