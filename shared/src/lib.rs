//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between chat clients and the relay server.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::chat`]**: WebSocket chat events (inbound and outbound)
//!   - **[`dto::health`]**: HTTP responses for health checks and facts
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::render_payload`]**: Render a loosely typed payload as display text
//!
//! ## Wire Format
//!
//! Chat events are adjacently tagged JSON objects. The `event` field carries the
//! event name and the optional `data` field carries its payload:
//!
//! ```text
//! {"event": "choose name", "data": "Alice"}
//! {"event": "update user list", "data": ["Alice", "Bob"]}
//! {"event": "not typing"}
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::chat::{ClientEvent, ServerEvent};
//!
//! let inbound: ClientEvent =
//!     serde_json::from_str(r#"{"event":"chat message","data":"hi"}"#).unwrap();
//! assert!(matches!(inbound, ClientEvent::ChatMessage(_)));
//!
//! let outbound = ServerEvent::ChatMessage("Alice: hi".to_string());
//! let json = serde_json::to_string(&outbound).unwrap();
//! assert_eq!(json, r#"{"event":"chat message","data":"Alice: hi"}"#);
//! ```

pub mod dto;
pub mod utils;
