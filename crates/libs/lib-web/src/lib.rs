//! # Web Library
//!
//! The chat relay core, its WebSocket transport, HTTP handlers, middleware and
//! server setup.

pub mod chat;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use chat::ChatAppState;
pub use server::{create_router, init_tracing, start_server, ServerConfig};
