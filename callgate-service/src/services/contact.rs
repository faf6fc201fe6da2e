use callgate_core::{GateError, GateResult, PageRequest, Principal, RequestContext};
use callgate_rpc::models::contact::{self, Email, PhoneNumber, UpdateParams};
use tracing::{debug, info};
use uuid::Uuid;

use crate::handler::{ServiceHandler, MANAGE};

pub(crate) fn check_phone_number(phone_number: &PhoneNumber) -> GateResult<()> {
    if phone_number.number.trim().is_empty() && phone_number.number_e164.trim().is_empty() {
        return Err(GateError::invalid_argument("phone number must not be empty").into_anyhow());
    }
    Ok(())
}

pub(crate) fn check_email(email: &Email) -> GateResult<()> {
    if email.address.trim().is_empty() {
        return Err(GateError::invalid_argument("email address must not be empty").into_anyhow());
    }
    Ok(())
}

pub(crate) fn check_lookup(phone_e164: &str, email: &str) -> GateResult<()> {
    if phone_e164.is_empty() && email.is_empty() {
        return Err(GateError::invalid_argument("lookup needs a phone number or an email").into_anyhow());
    }
    Ok(())
}

impl ServiceHandler {
    pub async fn contact_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        mut params: contact::CreateParams,
    ) -> GateResult<contact::WebhookMessage> {
        params.customer_id = p.customer_id;
        let client = &self.clients.contact;
        let out = self
            .forward
            .create(ctx, p, p.customer_id, MANAGE, "contact_create", move || {
                client.contact_create(ctx, params)
            })
            .await?;
        info!(customer_id = %p.customer_id, contact_id = %out.id, "contact created");
        Ok(out)
    }

    pub async fn contact_get(&self, ctx: &RequestContext, p: &Principal, id: Uuid) -> GateResult<contact::WebhookMessage> {
        debug!(customer_id = %p.customer_id, contact_id = %id, "contact.get");
        self.forward
            .get(ctx, p, MANAGE, "contact_get", self.clients.contact.contact_get(ctx, id))
            .await
    }

    pub async fn contact_list(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        page: PageRequest,
    ) -> GateResult<Vec<contact::WebhookMessage>> {
        let client = &self.clients.contact;
        self.forward
            .list(ctx, p, MANAGE, "contact_list", page, move |q| client.contact_list(ctx, q))
            .await
    }

    pub async fn contact_update(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        params: UpdateParams,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_update", client.contact_get(ctx, id), move |c| {
                client.contact_update(ctx, c.id, params)
            })
            .await
    }

    pub async fn contact_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        let out = self
            .forward
            .mutate(ctx, p, MANAGE, "contact_delete", client.contact_get(ctx, id), move |c| {
                client.contact_delete(ctx, c.id)
            })
            .await?;
        info!(customer_id = %p.customer_id, contact_id = %id, "contact deleted");
        Ok(out)
    }

    /// Find one of the caller's contacts by E.164 number or email. At
    /// least one of the two must be given.
    pub async fn contact_lookup(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        phone_e164: String,
        email: String,
    ) -> GateResult<contact::WebhookMessage> {
        const OP: &str = "contact_lookup";
        self.forward.authorize(p, p.customer_id, MANAGE, OP)?;
        check_lookup(&phone_e164, &email)?;

        let lookup = self.clients.contact.contact_lookup(ctx, p.customer_id, phone_e164, email);
        self.forward.get(ctx, p, MANAGE, OP, lookup).await
    }

    pub async fn contact_phone_number_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        phone_number: PhoneNumber,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_phone_number_create", client.contact_get(ctx, id), move |c| async move {
                check_phone_number(&phone_number)?;
                client.contact_phone_number_create(ctx, c.id, phone_number).await
            })
            .await
    }

    pub async fn contact_phone_number_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        phone_number_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_phone_number_delete", client.contact_get(ctx, id), move |c| {
                client.contact_phone_number_delete(ctx, c.id, phone_number_id)
            })
            .await
    }

    pub async fn contact_email_create(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        email: Email,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_email_create", client.contact_get(ctx, id), move |c| async move {
                check_email(&email)?;
                client.contact_email_create(ctx, c.id, email).await
            })
            .await
    }

    pub async fn contact_email_delete(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        email_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_email_delete", client.contact_get(ctx, id), move |c| {
                client.contact_email_delete(ctx, c.id, email_id)
            })
            .await
    }

    pub async fn contact_tag_add(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        tag_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_tag_add", client.contact_get(ctx, id), move |c| {
                client.contact_tag_add(ctx, c.id, tag_id)
            })
            .await
    }

    pub async fn contact_tag_remove(
        &self,
        ctx: &RequestContext,
        p: &Principal,
        id: Uuid,
        tag_id: Uuid,
    ) -> GateResult<contact::WebhookMessage> {
        let client = &self.clients.contact;
        self.forward
            .mutate(ctx, p, MANAGE, "contact_tag_remove", client.contact_get(ctx, id), move |c| {
                client.contact_tag_remove(ctx, c.id, tag_id)
            })
            .await
    }
}
