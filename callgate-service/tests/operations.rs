mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use callgate_auth::Credentials;
use callgate_core::{CustomerId, ErrorKind, GateError, PageRequest, Permission, RequestContext};
use callgate_rpc::models::common::Address;
use callgate_rpc::models::route;
use callgate_rpc::models::timeline::ResourceType;
use callgate_rpc::models::transfer::TransferType;
use serde_json::json;

use common::{admin, agent, agent_record, call_record, flow_record, harness, manager, now, super_admin};

#[tokio::test]
async fn providers_are_super_admin_only() {
    let h = harness();
    let ctx = RequestContext::new();

    let err = h
        .handler
        .provider_list(&ctx, &admin(CustomerId::new()), PageRequest::first(10))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.rpcs().is_empty());

    h.handler
        .provider_list(&ctx, &super_admin(), PageRequest::first(10))
        .await
        .unwrap();
    let query = h.upstream.last_query();
    assert!(!query.filters.contains_key("customer_id"));
    assert_eq!(query.filters["deleted"], "false");
}

#[tokio::test]
async fn granting_project_bits_needs_a_super_admin() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let target = agent_record(tenant, Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(target.clone());

    let err = h
        .handler
        .agent_update_permission(&ctx, &admin(tenant), target.id, Permission::PROJECT_SUPER_ADMIN)
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let out = h
        .handler
        .agent_update_permission(&ctx, &admin(tenant), target.id, Permission::CUSTOMER_MANAGER)
        .await
        .unwrap();
    assert_eq!(out.permission, Permission::CUSTOMER_MANAGER);

    let out = h
        .handler
        .agent_update_permission(&ctx, &super_admin(), target.id, Permission::PROJECT_SUPER_ADMIN)
        .await
        .unwrap();
    assert_eq!(out.permission, Permission::PROJECT_SUPER_ADMIN);
}

#[tokio::test]
async fn agents_may_change_their_own_password_only() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let me = agent(tenant);
    let mut record = agent_record(tenant, Permission::CUSTOMER_AGENT);
    record.id = me.id;
    h.upstream.add_agent(record);
    let colleague = agent_record(tenant, Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(colleague.clone());

    h.handler
        .agent_update_password(&ctx, &me, me.id, "s3cret".into())
        .await
        .unwrap();

    let err = h
        .handler
        .agent_update_password(&ctx, &me, colleague.id, "s3cret".into())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let err = h
        .handler
        .agent_update_password(&ctx, &me, me.id, String::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn message_without_destinations_is_invalid() {
    let h = harness();
    let ctx = RequestContext::new();
    let p = manager(CustomerId::new());

    let err = h
        .handler
        .message_send(&ctx, &p, Address::tel("+821100000001"), Vec::new(), "hi".into())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument);
    assert!(h.upstream.rpcs().is_empty());

    let out = h
        .handler
        .message_send(
            &ctx,
            &p,
            Address::tel("+821100000001"),
            vec![Address::tel("+821100000002")],
            "hi".into(),
        )
        .await
        .unwrap();
    assert_eq!(out.customer_id, p.customer_id);
}

#[tokio::test]
async fn login_issues_a_token_the_gateway_accepts() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let record = agent_record(tenant, Permission::CUSTOMER_MANAGER);
    h.upstream.add_agent(record.clone());
    h.upstream
        .passwords
        .lock()
        .unwrap()
        .insert(record.username.clone(), ("hunter2".into(), record.id));

    let login = h.handler.login(&ctx, &record.username, "hunter2").await.unwrap();
    assert_eq!(login.username, record.username);

    let creds = Credentials::new().with_header("Authorization", format!("Bearer {}", login.token));
    let p = h.handler.authenticate(&ctx, &creds).await.unwrap();
    assert_eq!(p.id, record.id);
    assert_eq!(p.customer_id, tenant);
    assert_eq!(p.permission, Permission::CUSTOMER_MANAGER);

    let err = h.handler.login(&ctx, &record.username, "wrong").await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotAuthenticated);
}

#[tokio::test]
async fn cancelled_request_makes_no_rpc() {
    let h = harness();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());

    let ctx = RequestContext::new();
    ctx.cancel();
    let err = h.handler.call_get(&ctx, &admin(tenant), c.id).await.unwrap_err();

    assert_eq!(GateError::kind_of(&err), ErrorKind::Cancelled);
    assert!(h.upstream.rpcs().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancellation_aborts_an_in_flight_fetch() {
    let h = harness();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());
    h.upstream.stall.store(true, Ordering::SeqCst);

    let ctx = RequestContext::new();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = h.handler.call_get(&ctx, &admin(tenant), c.id).await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn deadline_bounds_a_stalled_fetch() {
    let h = harness();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());
    h.upstream.stall.store(true, Ordering::SeqCst);

    let ctx = RequestContext::new().with_timeout(Duration::from_secs(3));
    let err = h.handler.call_get(&ctx, &admin(tenant), c.id).await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::DeadlineExceeded);
}

#[tokio::test]
async fn upstream_failures_pass_through_unchanged() {
    let h = harness();
    let tenant = CustomerId::new();
    *h.upstream.failure.lock().unwrap() = Some("call-manager: connection reset".into());

    let err = h
        .handler
        .call_get(&RequestContext::new(), &admin(tenant), uuid::Uuid::new_v4())
        .await
        .unwrap_err();

    assert_eq!(GateError::kind_of(&err), ErrorKind::Upstream);
    assert_eq!(err.to_string(), "call-manager: connection reset");
}

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let h = harness();
    let err = h
        .handler
        .authenticate(&RequestContext::new(), &Credentials::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotAuthenticated);
}

#[tokio::test]
async fn deleted_agent_cannot_log_in() {
    let h = harness();
    let ctx = RequestContext::new();
    let mut record = agent_record(CustomerId::new(), Permission::CUSTOMER_MANAGER);
    record.tm_delete = Some(now());
    h.upstream.add_agent(record.clone());
    h.upstream
        .passwords
        .lock()
        .unwrap()
        .insert(record.username.clone(), ("hunter2".into(), record.id));

    let err = h.handler.login(&ctx, &record.username, "hunter2").await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotAuthenticated);
}

#[tokio::test]
async fn password_change_checks_tenant_before_input() {
    let h = harness();
    let ctx = RequestContext::new();
    let target = agent_record(CustomerId::new(), Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(target.clone());

    let err = h
        .handler
        .agent_update_password(&ctx, &manager(CustomerId::new()), target.id, String::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(!h.upstream.rpcs().contains(&"agent_update_password"));
}

#[tokio::test]
async fn rag_query_checks_tenant_then_limits() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let rag = h.upstream.seed("rag", tenant, json!({ "name": "handbook" }));
    let p = manager(tenant);

    let err = h
        .handler
        .rag_query(&ctx, &manager(CustomerId::new()), rag, String::new(), 99)
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    for (text, top_k) in [("", 5), ("   ", 5), ("what is the refund policy", 21)] {
        let err = h.handler.rag_query(&ctx, &p, rag, text.into(), top_k).await.unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument, "text {text:?} top_k {top_k}");
    }
    assert!(h.upstream.sent("rag_query").is_empty());

    for top_k in [0, 20] {
        let answer = h
            .handler
            .rag_query(&ctx, &p, rag, "what is the refund policy".into(), top_k)
            .await
            .unwrap();
        assert_eq!(answer.rag_id, rag);
    }
    let sent = h.upstream.sent("rag_query");
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1]["top_k"], 20);
}

#[tokio::test]
async fn number_renewal_is_super_admin_only() {
    let h = harness();
    let ctx = RequestContext::new();

    for p in [admin(CustomerId::new()), manager(CustomerId::new())] {
        let err = h.handler.number_renew(&ctx, &p, now()).await.unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    }
    assert!(h.upstream.rpcs().is_empty());

    h.handler.number_renew(&ctx, &super_admin(), now()).await.unwrap();
    assert_eq!(h.upstream.sent("number_renew").len(), 1);
}

#[tokio::test]
async fn routes_are_created_for_the_named_customer() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let params = route::Params {
        name: "default".into(),
        provider_id: uuid::Uuid::new_v4(),
        target: "all".into(),
        ..Default::default()
    };

    let err = h
        .handler
        .route_create(&ctx, &admin(CustomerId::new()), tenant, params.clone())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.sent("route_create").is_empty());

    let out = h.handler.route_create(&ctx, &admin(tenant), tenant, params.clone()).await.unwrap();
    assert_eq!(out.customer_id, tenant);

    let out = h.handler.route_create(&ctx, &super_admin(), tenant, params).await.unwrap();
    assert_eq!(out.customer_id, tenant);
    assert_eq!(h.upstream.sent("route_create")[1]["customer_id"], json!(tenant));
}

#[tokio::test]
async fn transfer_of_a_foreign_call_is_denied() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());
    let to = vec![Address::tel("+821100000009")];

    let err = h
        .handler
        .transfer_start(&ctx, &manager(CustomerId::new()), TransferType::Blind, c.id, to.clone())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.sent("transfer_start").is_empty());

    let out = h
        .handler
        .transfer_start(&ctx, &manager(tenant), TransferType::Blind, c.id, to)
        .await
        .unwrap();
    assert_eq!(out.customer_id, tenant);
    assert_eq!(out.transferer_call_id, c.id);
}

#[tokio::test]
async fn timeline_follows_the_resource_owner() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());
    let f = flow_record(tenant);
    h.upstream.add_flow(f.clone());
    let af = h.upstream.seed("activeflow", tenant, json!({ "flow_id": f.id }));

    for (kind, id) in [(ResourceType::Call, c.id), (ResourceType::Flow, f.id), (ResourceType::Activeflow, af)] {
        let err = h
            .handler
            .timeline_event_list(&ctx, &manager(CustomerId::new()), kind, id, PageRequest::first(10))
            .await
            .unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied, "{kind}");

        let events = h
            .handler
            .timeline_event_list(&ctx, &manager(tenant), kind, id, PageRequest::first(10))
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data["id"], json!(id));
    }

    let sent = h.upstream.sent("event_list");
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0]["resource_type"], "call");
    assert_eq!(sent[2]["resource_id"], json!(af));
}
