//! # Chat Module
//!
//! Connection, presence and broadcast coordination for the chat relay.
//!
//! - [`registry`]: who is online (connection → nickname)
//! - [`peers`]: outbound channels and the unicast/broadcast send primitives
//! - [`state`]: the shared, lock-guarded chat state handed to every connection
//! - [`lifecycle`]: connect, choose-name, relay and disconnect transitions
//! - [`session`]: the per-connection state machine driven by the transport

pub mod registry;
pub mod peers;
pub mod state;
pub mod lifecycle;
pub mod session;

#[cfg(test)]
mod tests;

pub use registry::{ConnectionId, ConnectionRegistry};
pub use peers::{EventReceiver, EventSender, PeerTable};
pub use state::{ChatAppState, ChatState};
pub use session::{ChatSession, ConnectionPhase};
