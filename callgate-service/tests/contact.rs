mod common;

use callgate_core::{CustomerId, ErrorKind, GateError, PageRequest, RequestContext};
use callgate_rpc::models::contact::{self, Email, PhoneNumber};
use serde_json::json;

use common::{agent, harness, manager};

#[tokio::test]
async fn agents_use_the_member_routes() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let id = h.upstream.seed("contact", tenant, json!({ "display_name": "Jo Doe" }));

    let err = h.handler.contact_get(&ctx, &agent(tenant), id).await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let out = h.handler.contact_get(&ctx, &manager(tenant), id).await.unwrap();
    assert_eq!(out.display_name, "Jo Doe");

    let out = h.handler.service_agent_contact_get(&ctx, &agent(tenant), id).await.unwrap();
    assert_eq!(out.id, id);

    let err = h
        .handler
        .service_agent_contact_get(&ctx, &agent(CustomerId::new()), id)
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let out = h
        .handler
        .service_agent_contact_list(&ctx, &agent(tenant), PageRequest::first(10))
        .await
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(h.upstream.last_query().filters["customer_id"], tenant.to_string());
}

#[tokio::test]
async fn contacts_are_created_in_the_callers_customer() {
    let h = harness();
    let tenant = CustomerId::new();
    let params = contact::CreateParams {
        customer_id: CustomerId::new(),
        display_name: "Jo Doe".into(),
        ..Default::default()
    };

    let out = h
        .handler
        .service_agent_contact_create(&RequestContext::new(), &agent(tenant), params)
        .await
        .unwrap();
    assert_eq!(out.customer_id, tenant);
    assert_eq!(h.upstream.sent("contact_create")[0]["customer_id"], json!(tenant));
}

#[tokio::test]
async fn entries_are_checked_after_the_tenant() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let id = h.upstream.seed("contact", tenant, json!({}));

    let err = h
        .handler
        .contact_phone_number_create(&ctx, &manager(CustomerId::new()), id, PhoneNumber::default())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let err = h
        .handler
        .contact_phone_number_create(&ctx, &manager(tenant), id, PhoneNumber::default())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument);

    let err = h
        .handler
        .service_agent_contact_email_create(&ctx, &agent(CustomerId::new()), id, Email::default())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.sent("contact_phone_number_create").is_empty());

    let number = PhoneNumber {
        number_e164: "+821100000001".into(),
        ..Default::default()
    };
    h.handler
        .contact_phone_number_create(&ctx, &manager(tenant), id, number)
        .await
        .unwrap();
    assert_eq!(h.upstream.sent("contact_phone_number_create")[0]["number_e164"], "+821100000001");
}

#[tokio::test]
async fn lookup_needs_a_key_and_stays_in_the_customer() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let numbers = json!([{ "number": "011-0000-0001", "number_e164": "+821100000001" }]);
    let id = h.upstream.seed("contact", tenant, json!({ "phone_numbers": numbers }));

    let err = h
        .handler
        .contact_lookup(&ctx, &manager(tenant), String::new(), String::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument);
    assert!(h.upstream.rpcs().is_empty());

    let out = h
        .handler
        .service_agent_contact_lookup(&ctx, &agent(tenant), "+821100000001".into(), String::new())
        .await
        .unwrap();
    assert_eq!(out.id, id);

    let stranger = manager(CustomerId::new());
    let err = h
        .handler
        .contact_lookup(&ctx, &stranger, "+821100000001".into(), String::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotFound);
    assert_eq!(h.upstream.sent("contact_lookup")[1]["customer_id"], json!(stranger.customer_id));
}
