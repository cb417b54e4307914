//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged between clients and the
//! relay server.
//!
//! ## Module Organization
//!
//! - [`chat`] - WebSocket events for presence, typing and messages
//! - [`health`] - Health check and fun-fact HTTP responses
//!
//! ## Serialization Format
//!
//! - **Chat events**: `{"event": <name>, "data": <payload>}`, event names contain spaces
//! - **HTTP bodies**: plain JSON objects, `camelCase` where the client expects it

pub mod chat;
pub mod health;

pub use chat::*;
pub use health::*;
