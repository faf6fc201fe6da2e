//! One client trait per downstream domain.
//!
//! All methods have default implementations that return
//! "Method not implemented", so an implementation (or a test fake) can
//! override only what it actually supports. Every method takes the
//! request context and must honor its cancellation token.

use std::sync::Arc;

use callgate_core::GateError;

mod agent;
mod call;
mod campaign;
mod chat;
mod contact;
mod customer;
mod flow;
mod message;
mod number;
mod rag;
mod registrar;
mod route;
mod talk;
mod timeline;
mod transfer;

pub use agent::AgentClient;
pub use call::CallClient;
pub use campaign::CampaignClient;
pub use chat::ChatClient;
pub use contact::ContactClient;
pub use customer::CustomerClient;
pub use flow::FlowClient;
pub use message::MessageClient;
pub use number::NumberClient;
pub use rag::RagClient;
pub use registrar::RegistrarClient;
pub use route::RouteClient;
pub use talk::TalkClient;
pub use timeline::TimelineClient;
pub use transfer::TransferClient;

pub(crate) fn not_implemented(method: &str) -> anyhow::Error {
    GateError::not_implemented(format!("Method not implemented: {method}")).into_anyhow()
}

/// Stands in for every domain nobody configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl AgentClient for Unconfigured {}
impl CallClient for Unconfigured {}
impl CampaignClient for Unconfigured {}
impl ChatClient for Unconfigured {}
impl ContactClient for Unconfigured {}
impl CustomerClient for Unconfigured {}
impl FlowClient for Unconfigured {}
impl MessageClient for Unconfigured {}
impl NumberClient for Unconfigured {}
impl RagClient for Unconfigured {}
impl RegistrarClient for Unconfigured {}
impl RouteClient for Unconfigured {}
impl TalkClient for Unconfigured {}
impl TimelineClient for Unconfigured {}
impl TransferClient for Unconfigured {}

/// The full set of downstream clients a handler talks to.
#[derive(Clone)]
pub struct RpcClients {
    pub agent: Arc<dyn AgentClient>,
    pub call: Arc<dyn CallClient>,
    pub campaign: Arc<dyn CampaignClient>,
    pub chat: Arc<dyn ChatClient>,
    pub contact: Arc<dyn ContactClient>,
    pub customer: Arc<dyn CustomerClient>,
    pub flow: Arc<dyn FlowClient>,
    pub message: Arc<dyn MessageClient>,
    pub number: Arc<dyn NumberClient>,
    pub rag: Arc<dyn RagClient>,
    pub registrar: Arc<dyn RegistrarClient>,
    pub route: Arc<dyn RouteClient>,
    pub talk: Arc<dyn TalkClient>,
    pub timeline: Arc<dyn TimelineClient>,
    pub transfer: Arc<dyn TransferClient>,
}

impl RpcClients {
    pub fn builder() -> RpcClientsBuilder {
        RpcClientsBuilder::new()
    }
}

impl Default for RpcClients {
    fn default() -> Self {
        RpcClientsBuilder::new().build()
    }
}

/// Builder for [`RpcClients`]; unset domains fall back to [`Unconfigured`].
#[derive(Clone, Default)]
pub struct RpcClientsBuilder {
    agent: Option<Arc<dyn AgentClient>>,
    call: Option<Arc<dyn CallClient>>,
    campaign: Option<Arc<dyn CampaignClient>>,
    chat: Option<Arc<dyn ChatClient>>,
    contact: Option<Arc<dyn ContactClient>>,
    customer: Option<Arc<dyn CustomerClient>>,
    flow: Option<Arc<dyn FlowClient>>,
    message: Option<Arc<dyn MessageClient>>,
    number: Option<Arc<dyn NumberClient>>,
    rag: Option<Arc<dyn RagClient>>,
    registrar: Option<Arc<dyn RegistrarClient>>,
    route: Option<Arc<dyn RouteClient>>,
    talk: Option<Arc<dyn TalkClient>>,
    timeline: Option<Arc<dyn TimelineClient>>,
    transfer: Option<Arc<dyn TransferClient>>,
}

impl RpcClientsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn agent(mut self, client: Arc<dyn AgentClient>) -> Self {
        self.agent = Some(client);
        self
    }

    pub fn call(mut self, client: Arc<dyn CallClient>) -> Self {
        self.call = Some(client);
        self
    }

    pub fn campaign(mut self, client: Arc<dyn CampaignClient>) -> Self {
        self.campaign = Some(client);
        self
    }

    pub fn chat(mut self, client: Arc<dyn ChatClient>) -> Self {
        self.chat = Some(client);
        self
    }

    pub fn contact(mut self, client: Arc<dyn ContactClient>) -> Self {
        self.contact = Some(client);
        self
    }

    pub fn customer(mut self, client: Arc<dyn CustomerClient>) -> Self {
        self.customer = Some(client);
        self
    }

    pub fn flow(mut self, client: Arc<dyn FlowClient>) -> Self {
        self.flow = Some(client);
        self
    }

    pub fn message(mut self, client: Arc<dyn MessageClient>) -> Self {
        self.message = Some(client);
        self
    }

    pub fn number(mut self, client: Arc<dyn NumberClient>) -> Self {
        self.number = Some(client);
        self
    }

    pub fn rag(mut self, client: Arc<dyn RagClient>) -> Self {
        self.rag = Some(client);
        self
    }

    pub fn registrar(mut self, client: Arc<dyn RegistrarClient>) -> Self {
        self.registrar = Some(client);
        self
    }

    pub fn route(mut self, client: Arc<dyn RouteClient>) -> Self {
        self.route = Some(client);
        self
    }

    pub fn talk(mut self, client: Arc<dyn TalkClient>) -> Self {
        self.talk = Some(client);
        self
    }

    pub fn timeline(mut self, client: Arc<dyn TimelineClient>) -> Self {
        self.timeline = Some(client);
        self
    }

    pub fn transfer(mut self, client: Arc<dyn TransferClient>) -> Self {
        self.transfer = Some(client);
        self
    }

    pub fn build(self) -> RpcClients {
        let fallback = Arc::new(Unconfigured);
        RpcClients {
            agent: self.agent.unwrap_or_else(|| fallback.clone()),
            call: self.call.unwrap_or_else(|| fallback.clone()),
            campaign: self.campaign.unwrap_or_else(|| fallback.clone()),
            chat: self.chat.unwrap_or_else(|| fallback.clone()),
            contact: self.contact.unwrap_or_else(|| fallback.clone()),
            customer: self.customer.unwrap_or_else(|| fallback.clone()),
            flow: self.flow.unwrap_or_else(|| fallback.clone()),
            message: self.message.unwrap_or_else(|| fallback.clone()),
            number: self.number.unwrap_or_else(|| fallback.clone()),
            rag: self.rag.unwrap_or_else(|| fallback.clone()),
            registrar: self.registrar.unwrap_or_else(|| fallback.clone()),
            route: self.route.unwrap_or_else(|| fallback.clone()),
            talk: self.talk.unwrap_or_else(|| fallback.clone()),
            timeline: self.timeline.unwrap_or_else(|| fallback.clone()),
            transfer: self.transfer.unwrap_or_else(|| fallback.clone()),
        }
    }
}
