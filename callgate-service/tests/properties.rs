mod common;

use callgate_core::clock::format_page_token;
use callgate_core::{CustomerId, ErrorKind, GateError, PageRequest, Permission, RequestContext};
use chrono::Duration;

use common::{
    admin, agent_record, call_record, chatroom_record, flow_record, harness, manager, now, principal,
    super_admin,
};

#[tokio::test]
async fn other_tenants_resources_are_denied_whatever_the_bits() {
    let h = harness();
    let ctx = RequestContext::new();
    let theirs = CustomerId::new();
    let p = principal(CustomerId::new(), Permission::CUSTOMER_ALL);

    let c = call_record(theirs, None);
    h.upstream.add_call(c.clone());
    let f = flow_record(theirs);
    h.upstream.add_flow(f.clone());
    let a = agent_record(theirs, Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(a.clone());
    let r = chatroom_record(theirs, Some(p.id));
    h.upstream.add_chatroom(r.clone());

    let errs = vec![
        h.handler.call_get(&ctx, &p, c.id).await.unwrap_err(),
        h.handler.call_hold_on(&ctx, &p, c.id).await.unwrap_err(),
        h.handler.flow_get(&ctx, &p, f.id).await.unwrap_err(),
        h.handler.flow_delete(&ctx, &p, f.id).await.unwrap_err(),
        h.handler.agent_get(&ctx, &p, a.id).await.unwrap_err(),
        h.handler
            .agent_update_permission(&ctx, &p, a.id, Permission::CUSTOMER_ADMIN)
            .await
            .unwrap_err(),
        h.handler.chatroom_get(&ctx, &p, r.id).await.unwrap_err(),
    ];
    for err in &errs {
        assert_eq!(GateError::kind_of(err), ErrorKind::PermissionDenied, "{err}");
    }

    let rpcs = h.upstream.rpcs();
    assert!(!rpcs.contains(&"call_hold_on"));
    assert!(!rpcs.contains(&"flow_delete"));
    assert!(!rpcs.contains(&"agent_update_permission"));
}

#[tokio::test]
async fn super_admin_reaches_every_tenant() {
    let h = harness();
    let ctx = RequestContext::new();
    let p = super_admin();
    let c = call_record(CustomerId::new(), None);
    h.upstream.add_call(c.clone());

    let out = h.handler.call_get(&ctx, &p, c.id).await.unwrap();
    assert_eq!(out.id, c.id);
}

#[tokio::test]
async fn soft_deleted_records_read_as_not_found() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();

    let mut c = call_record(tenant, None);
    c.tm_delete = Some(now() - Duration::days(1));
    h.upstream.add_call(c.clone());

    for p in [admin(tenant), super_admin()] {
        let err = h.handler.call_get(&ctx, &p, c.id).await.unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::NotFound);
    }

    let err = h.handler.call_delete(&ctx, &admin(tenant), c.id).await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotFound);
    assert!(!h.upstream.rpcs().contains(&"call_delete"));
}

#[tokio::test]
async fn empty_page_token_defaults_to_the_clock() {
    let h = harness();
    let ctx = RequestContext::new();
    let p = manager(CustomerId::new());

    h.handler.call_list(&ctx, &p, PageRequest::first(0)).await.unwrap();
    let query = h.upstream.last_query();
    assert_eq!(query.token, format_page_token(now()));
    assert_eq!(query.size, 10);

    let later = now() + Duration::minutes(5);
    h.clock.set(later);
    h.handler
        .call_list(&ctx, &p, PageRequest::new(500, ""))
        .await
        .unwrap();
    let query = h.upstream.last_query();
    assert_eq!(query.token, format_page_token(later));
    assert_eq!(query.size, 100);

    h.handler
        .call_list(&ctx, &p, PageRequest::new(20, "2026-01-01 00:00:00.000000"))
        .await
        .unwrap();
    assert_eq!(h.upstream.last_query().token, "2026-01-01 00:00:00.000000");
}

#[tokio::test]
async fn list_filters_are_forced_to_the_callers_tenant() {
    let h = harness();
    let tenant = CustomerId::new();
    let p = manager(tenant);

    let page = PageRequest::first(5)
        .with_filter("customer_id", CustomerId::new().to_string())
        .with_filter("deleted", "true")
        .with_filter("status", "hangup");
    h.handler.call_list(&RequestContext::new(), &p, page).await.unwrap();

    let query = h.upstream.last_query();
    assert_eq!(query.filters["customer_id"], tenant.to_string());
    assert_eq!(query.filters["deleted"], "false");
    assert_eq!(query.filters["status"], "hangup");
}

#[tokio::test]
async fn listed_records_keep_their_identity() {
    let h = harness();
    let tenant = CustomerId::new();
    let p = admin(tenant);
    let mut ids: Vec<_> = (0..3)
        .map(|_| {
            let c = call_record(tenant, None);
            h.upstream.add_call(c.clone());
            c.id
        })
        .collect();
    h.upstream.add_call(call_record(CustomerId::new(), None));

    let out = h
        .handler
        .call_list(&RequestContext::new(), &p, PageRequest::first(10))
        .await
        .unwrap();

    let mut got: Vec<_> = out.iter().map(|c| c.id).collect();
    ids.sort();
    got.sort();
    assert_eq!(got, ids);
    assert!(out.iter().all(|c| c.customer_id == tenant));
}
