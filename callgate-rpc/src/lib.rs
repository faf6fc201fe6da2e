//! callgate-rpc: the downstream side of callgate.
//!
//! `models` holds what the managers return and how each record projects
//! to its outbound `WebhookMessage`; `clients` holds the async traits the
//! handlers call. Transport is up to the implementor.

pub mod clients;
pub mod models;

pub use clients::{
    AgentClient, CallClient, CampaignClient, ChatClient, ContactClient, CustomerClient, FlowClient,
    MessageClient, NumberClient, RagClient, RegistrarClient, RouteClient, RpcClients, RpcClientsBuilder,
    TalkClient, TimelineClient, TransferClient, Unconfigured,
};
