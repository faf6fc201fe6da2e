mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use callgate_core::{CustomerId, ErrorKind, GateError, GateResult, Principal, RequestContext};
use callgate_service::{Connection, Encapsulation, RealtimeHub};
use uuid::Uuid;

use common::{admin, agent, call_record, harness};

#[derive(Default)]
struct Hub {
    sockets: Mutex<Vec<(Uuid, String)>>,
    streams: Mutex<Vec<(Uuid, Encapsulation)>>,
}

#[async_trait]
impl RealtimeHub for Hub {
    async fn websock(&self, _ctx: &RequestContext, principal: &Principal, conn: Connection) -> GateResult<()> {
        let peer = conn.downcast::<String>().map_err(|_| anyhow::anyhow!("unexpected connection"))?;
        self.sockets.lock().unwrap().push((principal.id, *peer));
        Ok(())
    }

    async fn media_stream(
        &self,
        _ctx: &RequestContext,
        call_id: Uuid,
        encapsulation: Encapsulation,
        _conn: Connection,
    ) -> GateResult<()> {
        self.streams.lock().unwrap().push((call_id, encapsulation));
        Ok(())
    }
}

#[tokio::test]
async fn websocket_is_handed_to_the_hub() {
    let hub = Arc::new(Hub::default());
    let handler = harness().handler.with_realtime(hub.clone());
    let p = agent(CustomerId::new());

    handler
        .websock_create(&RequestContext::new(), &p, Connection::new("10.0.0.7:51234".to_string()))
        .await
        .unwrap();

    assert_eq!(hub.sockets.lock().unwrap().as_slice(), &[(p.id, "10.0.0.7:51234".to_string())]);
}

#[tokio::test]
async fn media_stream_needs_the_call_tenant() {
    let h = harness();
    let tenant = CustomerId::new();
    let c = call_record(tenant, None);
    h.upstream.add_call(c.clone());
    let hub = Arc::new(Hub::default());
    let handler = h.handler.with_realtime(hub.clone());
    let ctx = RequestContext::new();

    let err = handler
        .call_media_stream_start(&ctx, &admin(CustomerId::new()), c.id, Encapsulation::Rtp, Connection::new(()))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::PermissionDenied);
    assert!(hub.streams.lock().unwrap().is_empty());

    let encapsulation: Encapsulation = "audiosocket".parse().unwrap();
    handler
        .call_media_stream_start(&ctx, &admin(tenant), c.id, encapsulation, Connection::new(()))
        .await
        .unwrap();
    assert_eq!(hub.streams.lock().unwrap().as_slice(), &[(c.id, Encapsulation::Audiosocket)]);
}

#[tokio::test]
async fn without_a_hub_realtime_is_not_implemented() {
    let h = harness();
    let err = h
        .handler
        .websock_create(&RequestContext::new(), &agent(CustomerId::new()), Connection::new(()))
        .await
        .unwrap_err();
    assert_eq!(GateError::kind_of(&err), ErrorKind::NotImplemented);
}
