//! One file per resource family. Every method follows the same shape:
//! ownership fetch where there is a resource, authorize, forward, convert.

pub mod accesskey;
pub mod activeflow;
pub mod agent;
pub mod auth;
pub mod call;
pub mod campaign;
pub mod campaigncall;
pub mod chat;
pub mod chatmessage;
pub mod chatroom;
pub mod chatroommessage;
pub mod contact;
pub mod flow;
pub mod groupcall;
pub mod message;
pub mod number;
pub mod provider;
pub mod rag;
pub mod route;
pub mod service_agent;
pub mod service_agent_contact;
pub mod service_agent_talk;
pub mod timeline;
pub mod transfer;
pub mod trunk;
pub mod websock;

pub use auth::LoginResult;
pub use call::CallCreate;
pub use groupcall::GroupcallCreate;
