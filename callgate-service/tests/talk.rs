mod common;

use callgate_core::{CustomerId, ErrorKind, GateError, PageRequest, Permission, RequestContext};
use callgate_rpc::models::chatmessage::MessageType;
use callgate_rpc::models::talk::{ParticipantInput, TalkType};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{agent, agent_record, harness, super_admin, Upstream};

fn seats(agent_ids: &[Uuid]) -> Value {
    agent_ids
        .iter()
        .map(|id| json!({ "id": Uuid::new_v4(), "owner_type": "agent", "owner_id": id }))
        .collect()
}

fn seed_talk(upstream: &Upstream, tenant: CustomerId, kind: &str, agent_ids: &[Uuid]) -> Uuid {
    upstream.seed("talk", tenant, json!({ "type": kind, "participants": seats(agent_ids) }))
}

fn seat(owner_id: Uuid) -> ParticipantInput {
    ParticipantInput {
        owner_type: "agent".into(),
        owner_id,
    }
}

#[tokio::test]
async fn talks_are_reached_through_a_seat() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let seated = agent(tenant);
    let talk = seed_talk(&h.upstream, tenant, "group", &[seated.id, Uuid::new_v4()]);

    let out = h.handler.service_agent_talk_get(&ctx, &seated, talk).await.unwrap();
    assert_eq!(out.id, talk);

    for p in [agent(tenant), super_admin()] {
        let err = h.handler.service_agent_talk_get(&ctx, &p, talk).await.unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

        let err = h.handler.service_agent_talk_delete(&ctx, &p, talk).await.unwrap_err();
        assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    }
    assert!(!h.upstream.rpcs().contains(&"talk_delete"));

    h.upstream.delete_record(talk);
    let err = h.handler.service_agent_talk_get(&ctx, &seated, talk).await.unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotFound);
}

#[tokio::test]
async fn public_talk_messages_are_open_to_the_customer() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let p = agent(tenant);
    let public = seed_talk(&h.upstream, tenant, "talk", &[Uuid::new_v4()]);
    let group = seed_talk(&h.upstream, tenant, "group", &[Uuid::new_v4()]);
    h.upstream.seed("talkmessage", tenant, json!({ "chat_id": public, "text": "hello" }));

    let out = h
        .handler
        .service_agent_talk_message_list(&ctx, &p, public, PageRequest::first(10))
        .await
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(h.upstream.last_query().filters["chat_id"], public.to_string());

    let outsider = agent(CustomerId::new());
    let err = h
        .handler
        .service_agent_talk_message_list(&ctx, &outsider, public, PageRequest::first(10))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let err = h
        .handler
        .service_agent_talk_message_list(&ctx, &p, group, PageRequest::first(10))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
}

#[tokio::test]
async fn talk_list_is_public_talks_plus_seated_ones() {
    let h = harness();
    let tenant = CustomerId::new();
    let p = agent(tenant);
    let public = seed_talk(&h.upstream, tenant, "talk", &[]);
    let mine = seed_talk(&h.upstream, tenant, "direct", &[p.id, Uuid::new_v4()]);
    seed_talk(&h.upstream, tenant, "group", &[Uuid::new_v4()]);
    seed_talk(&h.upstream, CustomerId::new(), "talk", &[p.id]);

    let out = h
        .handler
        .service_agent_talk_list(&RequestContext::new(), &p, PageRequest::first(10))
        .await
        .unwrap();

    let mut ids: Vec<Uuid> = out.iter().map(|t| t.id).collect();
    ids.sort();
    let mut want = vec![public, mine];
    want.sort();
    assert_eq!(ids, want);
    assert_eq!(h.upstream.rpcs(), vec!["talk_list", "talk_list"]);
}

#[tokio::test]
async fn seats_must_stay_within_the_customer() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let p = agent(tenant);
    let peer = agent_record(tenant, Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(peer.clone());
    let outsider = agent_record(CustomerId::new(), Permission::CUSTOMER_AGENT);
    h.upstream.add_agent(outsider.clone());

    let err = h
        .handler
        .service_agent_talk_create(
            &ctx,
            &p,
            TalkType::Group,
            "ops".into(),
            String::new(),
            vec![seat(peer.id), seat(outsider.id)],
        )
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.sent("talk_create").is_empty());

    let out = h
        .handler
        .service_agent_talk_create(&ctx, &p, TalkType::Direct, "pair".into(), String::new(), vec![seat(peer.id)])
        .await
        .unwrap();
    assert_eq!(out.customer_id, tenant);
    let sent = &h.upstream.sent("talk_create")[0];
    assert_eq!(sent["creator_type"], "agent");
    assert_eq!(sent["creator_id"], json!(p.id));

    let err = h
        .handler
        .service_agent_talk_participant_create(&ctx, &p, out.id, seat(outsider.id))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(h.upstream.sent("talk_participant_create").is_empty());
}

#[tokio::test]
async fn messages_need_a_seat_and_content() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let p = agent(tenant);
    let talk = seed_talk(&h.upstream, tenant, "group", &[p.id]);

    let stranger = agent(tenant);
    let err = h
        .handler
        .service_agent_talk_message_create(&ctx, &stranger, talk, None, MessageType::Normal, "hi".into(), Vec::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);

    let err = h
        .handler
        .service_agent_talk_message_create(&ctx, &p, talk, None, MessageType::Normal, "  ".into(), Vec::new())
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::InvalidArgument);
    assert!(h.upstream.sent("talkmessage_create").is_empty());

    let out = h
        .handler
        .service_agent_talk_message_create(&ctx, &p, talk, None, MessageType::Normal, "hi".into(), Vec::new())
        .await
        .unwrap();
    assert_eq!(out.chat_id, talk);
    assert_eq!(out.owner_id, p.id);
    assert_eq!(out.customer_id, tenant);
}

#[tokio::test]
async fn only_the_author_removes_a_message() {
    let h = harness();
    let ctx = RequestContext::new();
    let tenant = CustomerId::new();
    let author = agent(tenant);
    let reader = agent(tenant);
    let talk = seed_talk(&h.upstream, tenant, "group", &[author.id, reader.id]);
    let message = h.upstream.seed(
        "talkmessage",
        tenant,
        json!({ "chat_id": talk, "owner_type": "agent", "owner_id": author.id, "text": "hi" }),
    );

    let err = h
        .handler
        .service_agent_talk_message_delete(&ctx, &reader, message)
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(!h.upstream.rpcs().contains(&"talkmessage_delete"));

    let out = h
        .handler
        .service_agent_talk_message_reaction_create(&ctx, &reader, message, "👍".into())
        .await
        .unwrap();
    assert_eq!(out.id, message);
    assert_eq!(h.upstream.sent("talkmessage_reaction_create")[0]["owner_id"], json!(reader.id));

    h.handler
        .service_agent_talk_message_delete(&ctx, &author, message)
        .await
        .unwrap();
    assert!(h.upstream.rpcs().contains(&"talkmessage_delete"));
}
