#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use callgate_core::{
    CustomerId, FixedClock, GateConfig, GateError, ListQuery, Permission, Principal, RequestContext,
};
use callgate_rpc::models::accesskey::{self, Accesskey};
use callgate_rpc::models::activeflow::{self, Activeflow};
use callgate_rpc::models::agent::Agent;
use callgate_rpc::models::call::{self, Call};
use callgate_rpc::models::campaign::Campaign;
use callgate_rpc::models::campaigncall::Campaigncall;
use callgate_rpc::models::chat::{self, Chat};
use callgate_rpc::models::chatmessage::Chatmessage;
use callgate_rpc::models::chatroom::Chatroom;
use callgate_rpc::models::chatroommessage::{self, Chatroommessage};
use callgate_rpc::models::contact::{self, Contact, PhoneNumber};
use callgate_rpc::models::flow::{self, Flow};
use callgate_rpc::models::groupcall::{self, Groupcall};
use callgate_rpc::models::message::{self, Message};
use callgate_rpc::models::number::Number;
use callgate_rpc::models::provider::Provider;
use callgate_rpc::models::rag::{Answer, Rag};
use callgate_rpc::models::route::{self, Route};
use callgate_rpc::models::talk::{self, ParticipantInput, Talk};
use callgate_rpc::models::talkmessage::{self, Talkmessage};
use callgate_rpc::models::talkparticipant::Participant;
use callgate_rpc::models::timeline::{Event, EventQuery};
use callgate_rpc::models::transfer::{StartParams, Transfer};
use callgate_rpc::models::trunk::Trunk;
use callgate_rpc::{
    AgentClient, CallClient, CampaignClient, ChatClient, ContactClient, CustomerClient, FlowClient,
    MessageClient, NumberClient, RagClient, RegistrarClient, RouteClient, RpcClients, TalkClient,
    TimelineClient, TransferClient,
};
use callgate_service::{ServiceHandler, Settings};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

pub const SECRET: &str = "integration-test-secret";

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

/// In-memory stand-in for every downstream manager the tests touch.
/// Each RPC appends its name to `rpcs`.
#[derive(Default)]
pub struct Upstream {
    pub rpcs: Mutex<Vec<&'static str>>,
    pub queries: Mutex<Vec<ListQuery>>,

    pub calls: Mutex<HashMap<Uuid, Call>>,
    pub flows: Mutex<HashMap<Uuid, Flow>>,
    pub agents: Mutex<HashMap<Uuid, Agent>>,
    pub chatrooms: Mutex<HashMap<Uuid, Chatroom>>,
    pub chatroommessages: Mutex<HashMap<Uuid, Chatroommessage>>,
    pub messages: Mutex<HashMap<Uuid, Message>>,
    pub providers: Mutex<Vec<Provider>>,
    pub passwords: Mutex<HashMap<String, (String, Uuid)>>,

    pub flow_creates: Mutex<Vec<flow::CreateParams>>,
    pub call_creates: Mutex<Vec<call::CreateParams>>,
    pub chat_creates: Mutex<Vec<chat::CreateParams>>,
    pub chatroommessage_creates: Mutex<Vec<chatroommessage::CreateParams>>,
    pub accesskey_creates: Mutex<Vec<accesskey::CreateParams>>,

    /// Records of the remaining families as raw JSON, tagged by family.
    pub records: Mutex<HashMap<Uuid, (&'static str, Value)>>,
    /// Request payloads of the remaining families, by RPC name.
    pub sent: Mutex<Vec<(&'static str, Value)>>,

    /// When set, `call_get` never resolves.
    pub stall: AtomicBool,
    /// When set, `call_get` fails with this text.
    pub failure: Mutex<Option<String>>,
}

impl Upstream {
    pub fn record(&self, rpc: &'static str) {
        self.rpcs.lock().unwrap().push(rpc);
    }

    pub fn rpcs(&self) -> Vec<&'static str> {
        self.rpcs.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> ListQuery {
        self.queries.lock().unwrap().last().cloned().expect("no list query recorded")
    }

    pub fn add_call(&self, call: Call) {
        self.calls.lock().unwrap().insert(call.id, call);
    }

    pub fn add_flow(&self, flow: Flow) {
        self.flows.lock().unwrap().insert(flow.id, flow);
    }

    pub fn add_agent(&self, agent: Agent) {
        self.agents.lock().unwrap().insert(agent.id, agent);
    }

    pub fn add_chatroom(&self, room: Chatroom) {
        self.chatrooms.lock().unwrap().insert(room.id, room);
    }

    pub fn add_message(&self, msg: Message) {
        self.messages.lock().unwrap().insert(msg.id, msg);
    }

    pub fn add_chatroommessage(&self, msg: Chatroommessage) {
        self.chatroommessages.lock().unwrap().insert(msg.id, msg);
    }

    /// Store a record of `family` under a fresh id. `fields` are laid over
    /// the minimal record.
    pub fn seed(&self, family: &'static str, customer_id: CustomerId, fields: Value) -> Uuid {
        let id = Uuid::new_v4();
        let mut record = minimal_record(family);
        record["id"] = json!(id);
        record["customer_id"] = json!(customer_id);
        record["tm_create"] = json!(now());
        if let (Some(record), Value::Object(fields)) = (record.as_object_mut(), fields) {
            record.extend(fields);
        }
        self.records.lock().unwrap().insert(id, (family, record));
        id
    }

    /// Mark a seeded record deleted a day ago.
    pub fn delete_record(&self, id: Uuid) {
        if let Some((_, record)) = self.records.lock().unwrap().get_mut(&id) {
            record["tm_delete"] = json!(now() - Duration::days(1));
        }
    }

    pub fn sent(&self, rpc: &str) -> Vec<Value> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == rpc)
            .map(|(_, v)| v.clone())
            .collect()
    }

    fn send<P: Serialize>(&self, rpc: &'static str, payload: &P) {
        self.record(rpc);
        let value = serde_json::to_value(payload).unwrap_or_default();
        self.sent.lock().unwrap().push((rpc, value));
    }

    fn fetch_record<T: DeserializeOwned>(&self, rpc: &'static str, family: &str, id: Uuid) -> Result<T> {
        self.record(rpc);
        let record = match self.records.lock().unwrap().get(&id) {
            Some((f, record)) if *f == family => record.clone(),
            _ => return Err(GateError::not_found(format!("{family} not found")).into_anyhow()),
        };
        Ok(serde_json::from_value(record)?)
    }

    /// Records of `family` matching every query filter outside `skip`.
    fn list_records<T: DeserializeOwned>(
        &self,
        rpc: &'static str,
        family: &str,
        query: &ListQuery,
        skip: &[&str],
    ) -> Result<Vec<T>> {
        self.record(rpc);
        self.queries.lock().unwrap().push(query.clone());
        let records: Vec<Value> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|(f, _)| *f == family)
            .filter(|(_, record)| {
                query.filters.iter().all(|(key, want)| match key.as_str() {
                    k if skip.contains(&k) => true,
                    "deleted" => record["tm_delete"].is_null() == (want == "false"),
                    k => match &record[k] {
                        Value::Null => true,
                        Value::String(have) => have == want,
                        have => have.to_string() == *want,
                    },
                })
            })
            .map(|(_, record)| record.clone())
            .collect();
        records
            .into_iter()
            .map(|r| serde_json::from_value(r).map_err(Into::into))
            .collect()
    }

    fn lookup<T: Clone>(map: &Mutex<HashMap<Uuid, T>>, id: Uuid, what: &str) -> Result<T> {
        map.lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| GateError::not_found(format!("{what} not found")).into_anyhow())
    }

    fn matches(query: &ListQuery, key: &str, value: String) -> bool {
        query.filters.get(key).map_or(true, |want| *want == value)
    }
}

#[async_trait]
impl CallClient for Upstream {
    async fn call_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Call> {
        self.record("call_get");
        if self.stall.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if let Some(text) = self.failure.lock().unwrap().clone() {
            return Err(anyhow!(text));
        }
        Self::lookup(&self.calls, id, "call")
    }

    async fn call_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Call>> {
        self.record("call_list");
        let items = self
            .calls
            .lock()
            .unwrap()
            .values()
            .filter(|c| Self::matches(&query, "customer_id", c.customer_id.to_string()))
            .filter(|c| Self::matches(&query, "owner_id", c.owner_id.map(|o| o.to_string()).unwrap_or_default()))
            .cloned()
            .collect();
        self.queries.lock().unwrap().push(query);
        Ok(items)
    }

    async fn call_create(&self, _ctx: &RequestContext, params: call::CreateParams) -> Result<(Vec<Call>, Vec<Groupcall>)> {
        self.record("call_create");
        let calls = params
            .destinations
            .iter()
            .map(|dest| {
                let mut c = call_record(params.customer_id, None);
                c.flow_id = params.flow_id;
                c.source = params.source.clone();
                c.destination = dest.clone();
                c
            })
            .collect();
        self.call_creates.lock().unwrap().push(params);
        Ok((calls, Vec::new()))
    }

    async fn call_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Call> {
        self.record("call_delete");
        let mut c = Self::lookup(&self.calls, id, "call")?;
        c.tm_delete = Some(now());
        Ok(c)
    }

    async fn call_hangup(&self, _ctx: &RequestContext, id: Uuid) -> Result<Call> {
        self.record("call_hangup");
        let mut c = Self::lookup(&self.calls, id, "call")?;
        c.status = call::Status::Hangup;
        Ok(c)
    }

    async fn call_hold_on(&self, _ctx: &RequestContext, _id: Uuid) -> Result<()> {
        self.record("call_hold_on");
        Ok(())
    }

    async fn groupcall_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Groupcall> {
        self.fetch_record("groupcall_get", "groupcall", id)
    }

    async fn groupcall_create(&self, _ctx: &RequestContext, params: groupcall::CreateParams) -> Result<Groupcall> {
        self.send("groupcall_create", &params);
        let fields = json!({ "owner_id": params.owner_id, "flow_id": params.flow_id, "source": params.source });
        let id = self.seed("groupcall", params.customer_id, fields);
        self.fetch_record("groupcall_get", "groupcall", id)
    }

    async fn groupcall_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Groupcall> {
        self.fetch_record("groupcall_delete", "groupcall", id)
    }
}

#[async_trait]
impl FlowClient for Upstream {
    async fn activeflow_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Activeflow> {
        self.fetch_record("activeflow_get", "activeflow", id)
    }

    async fn activeflow_create(&self, _ctx: &RequestContext, params: activeflow::CreateParams) -> Result<Activeflow> {
        self.send("activeflow_create", &params);
        let id = self.seed("activeflow", params.customer_id, json!({ "flow_id": params.flow_id }));
        self.fetch_record("activeflow_get", "activeflow", id)
    }

    async fn activeflow_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Activeflow> {
        self.fetch_record("activeflow_delete", "activeflow", id)
    }

    async fn flow_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Flow> {
        self.record("flow_get");
        Self::lookup(&self.flows, id, "flow")
    }

    async fn flow_create(&self, _ctx: &RequestContext, params: flow::CreateParams) -> Result<Flow> {
        self.record("flow_create");
        let mut f = flow_record(params.customer_id);
        f.name = params.name.clone();
        f.detail = params.detail.clone();
        f.persist = params.persist;
        f.actions = params.actions.clone();
        self.add_flow(f.clone());
        self.flow_creates.lock().unwrap().push(params);
        Ok(f)
    }

    async fn flow_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Flow> {
        self.record("flow_delete");
        Self::lookup(&self.flows, id, "flow")
    }
}

#[async_trait]
impl AgentClient for Upstream {
    async fn agent_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Agent> {
        self.record("agent_get");
        Self::lookup(&self.agents, id, "agent")
    }

    async fn agent_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Agent> {
        self.record("agent_delete");
        Self::lookup(&self.agents, id, "agent")
    }

    async fn agent_update_permission(&self, _ctx: &RequestContext, id: Uuid, permission: Permission) -> Result<Agent> {
        self.record("agent_update_permission");
        let mut agents = self.agents.lock().unwrap();
        let agent = agents
            .get_mut(&id)
            .ok_or_else(|| GateError::not_found("agent not found").into_anyhow())?;
        agent.permission = permission;
        Ok(agent.clone())
    }

    async fn agent_update_password(&self, _ctx: &RequestContext, id: Uuid, _password: String) -> Result<Agent> {
        self.record("agent_update_password");
        Self::lookup(&self.agents, id, "agent")
    }

    async fn agent_login(&self, _ctx: &RequestContext, username: String, password: String) -> Result<Agent> {
        self.record("agent_login");
        let id = match self.passwords.lock().unwrap().get(&username) {
            Some((want, id)) if *want == password => *id,
            _ => return Err(anyhow!("agent-manager: authentication failed")),
        };
        Self::lookup(&self.agents, id, "agent")
    }
}

#[async_trait]
impl ChatClient for Upstream {
    async fn chat_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chat> {
        self.fetch_record("chat_get", "chat", id)
    }

    async fn chat_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chat> {
        self.fetch_record("chat_delete", "chat", id)
    }

    async fn chatmessage_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatmessage> {
        self.fetch_record("chatmessage_get", "chatmessage", id)
    }

    async fn chatmessage_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Chatmessage>> {
        self.list_records("chatmessage_list", "chatmessage", &query, &[])
    }

    async fn chatmessage_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatmessage> {
        self.fetch_record("chatmessage_delete", "chatmessage", id)
    }

    async fn chat_create(&self, _ctx: &RequestContext, params: chat::CreateParams) -> Result<Chat> {
        self.record("chat_create");
        let chat: Chat = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "customer_id": params.customer_id,
            "type": params.kind,
            "room_owner_id": params.room_owner_id,
            "participant_ids": params.participant_ids,
            "name": params.name,
            "detail": params.detail,
        }))?;
        for owner in &params.participant_ids {
            let mut room = chatroom_record(params.customer_id, Some(*owner));
            room.chat_id = chat.id;
            room.kind = params.kind;
            room.room_owner_id = params.room_owner_id;
            room.participant_ids = params.participant_ids.clone();
            self.add_chatroom(room);
        }
        self.chat_creates.lock().unwrap().push(params);
        Ok(chat)
    }

    async fn chatroom_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatroom> {
        self.record("chatroom_get");
        Self::lookup(&self.chatrooms, id, "chatroom")
    }

    async fn chatroom_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Chatroom>> {
        self.record("chatroom_list");
        let items = self
            .chatrooms
            .lock()
            .unwrap()
            .values()
            .filter(|r| Self::matches(&query, "customer_id", r.customer_id.to_string()))
            .filter(|r| Self::matches(&query, "chat_id", r.chat_id.to_string()))
            .filter(|r| Self::matches(&query, "owner_id", r.owner_id.map(|o| o.to_string()).unwrap_or_default()))
            .cloned()
            .collect();
        self.queries.lock().unwrap().push(query);
        Ok(items)
    }

    async fn chatroom_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatroom> {
        self.record("chatroom_delete");
        Self::lookup(&self.chatrooms, id, "chatroom")
    }

    async fn chatroommessage_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatroommessage> {
        self.record("chatroommessage_get");
        Self::lookup(&self.chatroommessages, id, "chatroommessage")
    }

    async fn chatroommessage_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Chatroommessage> {
        self.record("chatroommessage_delete");
        Self::lookup(&self.chatroommessages, id, "chatroommessage")
    }

    async fn chatroommessage_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Chatroommessage>> {
        self.record("chatroommessage_list");
        let items = self
            .chatroommessages
            .lock()
            .unwrap()
            .values()
            .filter(|m| Self::matches(&query, "chatroom_id", m.chatroom_id.to_string()))
            .cloned()
            .collect();
        self.queries.lock().unwrap().push(query);
        Ok(items)
    }

    async fn chatroommessage_create(
        &self,
        _ctx: &RequestContext,
        params: chatroommessage::CreateParams,
    ) -> Result<Chatroommessage> {
        self.record("chatroommessage_create");
        let msg: Chatroommessage = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "customer_id": params.customer_id,
            "chatroom_id": params.chatroom_id,
            "source": params.source,
            "type": params.kind,
            "text": params.text,
        }))?;
        self.chatroommessage_creates.lock().unwrap().push(params);
        Ok(msg)
    }
}

#[async_trait]
impl MessageClient for Upstream {
    async fn message_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Message> {
        self.record("message_get");
        Self::lookup(&self.messages, id, "message")
    }

    async fn message_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Message> {
        self.record("message_delete");
        Self::lookup(&self.messages, id, "message")
    }

    async fn message_send(&self, _ctx: &RequestContext, params: message::SendParams) -> Result<Message> {
        self.record("message_send");
        let msg: Message = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "customer_id": params.customer_id,
            "source": params.source,
            "text": params.text,
        }))?;
        Ok(msg)
    }
}

#[async_trait]
impl RouteClient for Upstream {
    async fn provider_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Provider>> {
        self.record("provider_list");
        self.queries.lock().unwrap().push(query);
        Ok(self.providers.lock().unwrap().clone())
    }

    async fn route_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Route> {
        self.fetch_record("route_get", "route", id)
    }

    async fn route_create(&self, _ctx: &RequestContext, customer_id: CustomerId, params: route::Params) -> Result<Route> {
        self.send("route_create", &json!({ "customer_id": customer_id, "params": &params }));
        let fields = json!({ "provider_id": params.provider_id, "target": params.target, "name": params.name });
        let id = self.seed("route", customer_id, fields);
        self.fetch_record("route_get", "route", id)
    }

    async fn route_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Route> {
        self.fetch_record("route_delete", "route", id)
    }
}

#[async_trait]
impl CustomerClient for Upstream {
    async fn accesskey_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Accesskey> {
        self.fetch_record("accesskey_get", "accesskey", id)
    }

    async fn accesskey_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Accesskey> {
        self.fetch_record("accesskey_delete", "accesskey", id)
    }

    async fn accesskey_create(&self, _ctx: &RequestContext, params: accesskey::CreateParams) -> Result<Accesskey> {
        self.record("accesskey_create");
        let key = Accesskey {
            id: Uuid::new_v4(),
            customer_id: params.customer_id,
            name: params.name.clone(),
            detail: params.detail.clone(),
            token: "generated".to_string(),
            tm_expire: Some(now() + chrono::Duration::seconds(params.expire as i64)),
            tm_create: Some(now()),
            tm_update: None,
            tm_delete: None,
        };
        self.accesskey_creates.lock().unwrap().push(params);
        Ok(key)
    }
}

#[async_trait]
impl CampaignClient for Upstream {
    async fn campaign_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Campaign> {
        self.fetch_record("campaign_get", "campaign", id)
    }

    async fn campaign_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Campaign> {
        self.fetch_record("campaign_delete", "campaign", id)
    }

    async fn campaigncall_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Campaigncall> {
        self.fetch_record("campaigncall_get", "campaigncall", id)
    }

    async fn campaigncall_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Campaigncall>> {
        self.list_records("campaigncall_list", "campaigncall", &query, &[])
    }

    async fn campaigncall_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Campaigncall> {
        self.fetch_record("campaigncall_delete", "campaigncall", id)
    }
}

#[async_trait]
impl NumberClient for Upstream {
    async fn number_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Number> {
        self.fetch_record("number_get", "number", id)
    }

    async fn number_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Number> {
        self.fetch_record("number_delete", "number", id)
    }

    async fn number_renew(&self, _ctx: &RequestContext, tm_renew: DateTime<Utc>) -> Result<Vec<Number>> {
        self.send("number_renew", &tm_renew);
        Ok(Vec::new())
    }
}

#[async_trait]
impl RegistrarClient for Upstream {
    async fn trunk_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Trunk> {
        self.fetch_record("trunk_get", "trunk", id)
    }

    async fn trunk_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Trunk> {
        self.fetch_record("trunk_delete", "trunk", id)
    }
}

#[async_trait]
impl RagClient for Upstream {
    async fn rag_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Rag> {
        self.fetch_record("rag_get", "rag", id)
    }

    async fn rag_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Rag> {
        self.fetch_record("rag_delete", "rag", id)
    }

    async fn rag_query(&self, _ctx: &RequestContext, id: Uuid, text: String, top_k: u32) -> Result<Answer> {
        self.send("rag_query", &json!({ "id": id, "text": text, "top_k": top_k }));
        Ok(Answer {
            rag_id: id,
            text: "forty-two".to_string(),
            sources: Vec::new(),
        })
    }
}

#[async_trait]
impl TimelineClient for Upstream {
    async fn event_list(&self, _ctx: &RequestContext, query: EventQuery) -> Result<Vec<Event>> {
        self.send("event_list", &query);
        Ok(vec![Event {
            timestamp: now(),
            event_type: format!("{}_created", query.resource_type),
            publisher: "test".to_string(),
            data_type: "application/json".to_string(),
            data: json!({ "id": query.resource_id }),
        }])
    }
}

#[async_trait]
impl TransferClient for Upstream {
    async fn transfer_start(&self, _ctx: &RequestContext, params: StartParams) -> Result<Transfer> {
        self.send("transfer_start", &params);
        let call = Self::lookup(&self.calls, params.transferer_call_id, "call")?;
        Ok(Transfer {
            id: Uuid::new_v4(),
            customer_id: call.customer_id,
            kind: params.kind,
            transferer_call_id: params.transferer_call_id,
            transferee_addresses: params.transferee_addresses,
            transferee_call_id: None,
            groupcall_id: None,
            confbridge_id: Uuid::new_v4(),
        })
    }
}

#[async_trait]
impl ContactClient for Upstream {
    async fn contact_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Contact> {
        self.fetch_record("contact_get", "contact", id)
    }

    async fn contact_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Contact>> {
        self.list_records("contact_list", "contact", &query, &[])
    }

    async fn contact_create(&self, _ctx: &RequestContext, params: contact::CreateParams) -> Result<Contact> {
        self.send("contact_create", &params);
        let mut fields = serde_json::to_value(&params)?;
        if let Some(fields) = fields.as_object_mut() {
            fields.remove("customer_id");
        }
        let id = self.seed("contact", params.customer_id, fields);
        self.fetch_record("contact_get", "contact", id)
    }

    async fn contact_update(&self, _ctx: &RequestContext, id: Uuid, params: contact::UpdateParams) -> Result<Contact> {
        self.send("contact_update", &params);
        self.fetch_record("contact_get", "contact", id)
    }

    async fn contact_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Contact> {
        self.fetch_record("contact_delete", "contact", id)
    }

    async fn contact_lookup(
        &self,
        _ctx: &RequestContext,
        customer_id: CustomerId,
        phone_e164: String,
        email: String,
    ) -> Result<Contact> {
        self.send("contact_lookup", &json!({ "customer_id": customer_id, "phone_e164": phone_e164, "email": email }));
        let found = self.records.lock().unwrap().values().find_map(|(family, record)| {
            let numbers = record["phone_numbers"].as_array().cloned().unwrap_or_default();
            let hit = *family == "contact"
                && record["customer_id"] == json!(customer_id)
                && numbers.iter().any(|n| n["number_e164"] == json!(phone_e164));
            hit.then(|| record.clone())
        });
        match found {
            Some(record) => Ok(serde_json::from_value(record)?),
            None => Err(GateError::not_found("contact not found").into_anyhow()),
        }
    }

    async fn contact_phone_number_create(
        &self,
        _ctx: &RequestContext,
        id: Uuid,
        phone_number: PhoneNumber,
    ) -> Result<Contact> {
        self.send("contact_phone_number_create", &phone_number);
        self.fetch_record("contact_get", "contact", id)
    }

    async fn contact_tag_add(&self, _ctx: &RequestContext, id: Uuid, tag_id: Uuid) -> Result<Contact> {
        self.send("contact_tag_add", &tag_id);
        self.fetch_record("contact_get", "contact", id)
    }
}

#[async_trait]
impl TalkClient for Upstream {
    async fn talk_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Talk> {
        self.fetch_record("talk_get", "talk", id)
    }

    /// An `owner_id` filter selects the talks that agent is seated in.
    async fn talk_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Talk>> {
        let talks: Vec<Talk> = self.list_records("talk_list", "talk", &query, &["owner_type", "owner_id"])?;
        let seated = query.filters.get("owner_id").cloned();
        Ok(talks
            .into_iter()
            .filter(|t| seated.as_ref().map_or(true, |id| t.agent_ids().any(|a| a.to_string() == *id)))
            .collect())
    }

    async fn talk_create(&self, _ctx: &RequestContext, params: talk::CreateParams) -> Result<Talk> {
        self.send("talk_create", &params);
        let mut seats = vec![ParticipantInput {
            owner_type: params.creator_type.clone(),
            owner_id: params.creator_id,
        }];
        seats.extend(params.participants.iter().cloned());
        let fields = json!({
            "type": params.kind,
            "name": params.name,
            "detail": params.detail,
            "participants": seats.iter().map(participant_json).collect::<Vec<_>>(),
        });
        let id = self.seed("talk", params.customer_id, fields);
        self.fetch_record("talk_get", "talk", id)
    }

    async fn talk_update(&self, _ctx: &RequestContext, id: Uuid, params: talk::UpdateParams) -> Result<Talk> {
        self.send("talk_update", &params);
        self.fetch_record("talk_get", "talk", id)
    }

    async fn talk_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Talk> {
        self.fetch_record("talk_delete", "talk", id)
    }

    async fn talk_participant_list(&self, _ctx: &RequestContext, talk_id: Uuid) -> Result<Vec<Participant>> {
        let talk: Talk = self.fetch_record("talk_participant_list", "talk", talk_id)?;
        Ok(talk.participants)
    }

    async fn talk_participant_create(
        &self,
        _ctx: &RequestContext,
        talk_id: Uuid,
        participant: ParticipantInput,
    ) -> Result<Participant> {
        self.send("talk_participant_create", &participant);
        let mut seat: Participant = serde_json::from_value(participant_json(&participant))?;
        seat.chat_id = talk_id;
        Ok(seat)
    }

    async fn talkmessage_get(&self, _ctx: &RequestContext, id: Uuid) -> Result<Talkmessage> {
        self.fetch_record("talkmessage_get", "talkmessage", id)
    }

    async fn talkmessage_list(&self, _ctx: &RequestContext, query: ListQuery) -> Result<Vec<Talkmessage>> {
        self.list_records("talkmessage_list", "talkmessage", &query, &[])
    }

    async fn talkmessage_create(&self, _ctx: &RequestContext, params: talkmessage::CreateParams) -> Result<Talkmessage> {
        self.send("talkmessage_create", &params);
        let mut fields = serde_json::to_value(&params)?;
        if let Some(fields) = fields.as_object_mut() {
            fields.remove("customer_id");
        }
        let id = self.seed("talkmessage", params.customer_id, fields);
        self.fetch_record("talkmessage_get", "talkmessage", id)
    }

    async fn talkmessage_delete(&self, _ctx: &RequestContext, id: Uuid) -> Result<Talkmessage> {
        self.fetch_record("talkmessage_delete", "talkmessage", id)
    }

    async fn talkmessage_reaction_create(
        &self,
        _ctx: &RequestContext,
        id: Uuid,
        owner_type: String,
        owner_id: Uuid,
        emoji: String,
    ) -> Result<Talkmessage> {
        self.send(
            "talkmessage_reaction_create",
            &json!({ "owner_type": owner_type, "owner_id": owner_id, "emoji": emoji }),
        );
        self.fetch_record("talkmessage_get", "talkmessage", id)
    }
}

fn participant_json(seat: &ParticipantInput) -> Value {
    json!({ "id": Uuid::new_v4(), "owner_type": seat.owner_type, "owner_id": seat.owner_id })
}

/// Fields a record of `family` needs to deserialize.
fn minimal_record(family: &str) -> Value {
    let tel = json!({"type": "tel", "target": "+821100000001"});
    match family {
        "accesskey" => json!({ "token": "seeded", "name": "key" }),
        "activeflow" => json!({ "flow_id": Uuid::new_v4() }),
        "campaign" => json!({ "name": "campaign" }),
        "campaigncall" => json!({ "campaign_id": Uuid::new_v4(), "source": tel, "destination": tel }),
        "chatmessage" => json!({ "chat_id": Uuid::new_v4(), "source": tel }),
        "groupcall" => json!({ "source": tel }),
        "number" => json!({ "number": "+821100000001" }),
        "route" => json!({ "provider_id": Uuid::new_v4(), "target": "all" }),
        "talkmessage" => json!({ "chat_id": Uuid::new_v4() }),
        "trunk" => json!({ "domain_name": "trunk.example.com" }),
        _ => json!({}),
    }
}

pub fn call_record(customer_id: CustomerId, owner_id: Option<Uuid>) -> Call {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "owner_type": if owner_id.is_some() { "agent" } else { "" },
        "owner_id": owner_id,
        "channel_id": "ch-0001",
        "source": {"type": "tel", "target": "+821100000001"},
        "destination": {"type": "tel", "target": "+821100000002"},
        "tm_create": now(),
    }))
    .unwrap()
}

pub fn flow_record(customer_id: CustomerId) -> Flow {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "name": "main",
        "persist": true,
    }))
    .unwrap()
}

pub fn agent_record(customer_id: CustomerId, permission: Permission) -> Agent {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "username": "agent@example.com",
        "password_hash": "$2b$12$hash",
        "name": "Agent",
        "permission": permission,
    }))
    .unwrap()
}

pub fn message_record(customer_id: CustomerId) -> Message {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "source": {"type": "tel", "target": "+821100000001"},
        "text": "hello",
    }))
    .unwrap()
}

pub fn chatroom_record(customer_id: CustomerId, owner_id: Option<Uuid>) -> Chatroom {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "owner_type": "agent",
        "owner_id": owner_id,
        "chat_id": Uuid::new_v4(),
        "name": "room",
    }))
    .unwrap()
}

pub fn chatroommessage_record(customer_id: CustomerId, chatroom_id: Uuid, owner_id: Option<Uuid>) -> Chatroommessage {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "customer_id": customer_id,
        "owner_id": owner_id,
        "chatroom_id": chatroom_id,
        "source": {"type": "agent", "target": owner_id.unwrap_or_default().to_string()},
        "text": "hello",
    }))
    .unwrap()
}

pub fn principal(customer_id: CustomerId, permission: Permission) -> Principal {
    Principal::new(Uuid::new_v4(), customer_id, permission).with_username("tester@example.com")
}

pub fn admin(customer_id: CustomerId) -> Principal {
    principal(customer_id, Permission::CUSTOMER_ADMIN)
}

pub fn manager(customer_id: CustomerId) -> Principal {
    principal(customer_id, Permission::CUSTOMER_MANAGER)
}

pub fn agent(customer_id: CustomerId) -> Principal {
    principal(customer_id, Permission::CUSTOMER_AGENT)
}

pub fn super_admin() -> Principal {
    principal(CustomerId::new(), Permission::PROJECT_SUPER_ADMIN)
}

pub fn settings() -> Settings {
    let mut config = GateConfig::new();
    config.set("auth.jwt.secret", SECRET);
    config.set("paginate.default", "10");
    config.set("paginate.max", "100");
    Settings::from_config(&config.snapshot()).unwrap()
}

pub struct Harness {
    pub handler: ServiceHandler,
    pub upstream: Arc<Upstream>,
    pub clock: Arc<FixedClock>,
}

pub fn harness() -> Harness {
    let upstream = Arc::new(Upstream::default());
    let clock = Arc::new(FixedClock::new(now()));
    let clients = RpcClients::builder()
        .agent(upstream.clone())
        .call(upstream.clone())
        .campaign(upstream.clone())
        .chat(upstream.clone())
        .contact(upstream.clone())
        .customer(upstream.clone())
        .flow(upstream.clone())
        .message(upstream.clone())
        .number(upstream.clone())
        .rag(upstream.clone())
        .registrar(upstream.clone())
        .route(upstream.clone())
        .talk(upstream.clone())
        .timeline(upstream.clone())
        .transfer(upstream.clone())
        .build();
    let handler = ServiceHandler::new(clients, settings(), clock.clone()).unwrap();
    Harness { handler, upstream, clock }
}
