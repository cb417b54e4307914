//! # Chat Event Data Transfer Objects
//!
//! Defines the events that travel over the chat WebSocket in both directions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text attached to every "new user" notice.
pub const JOINED_TEXT: &str = "has joined the chat";

/// Display name used for chat messages from connections without a nickname.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Event sent by a client over its own connection.
///
/// Payloads are kept as raw JSON values: the relay never rejects a payload,
/// it renders whatever it receives with [`crate::utils::render_payload`].
/// A missing or `null` payload deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientEvent {
    /// Register or replace the nickname of the sending connection.
    #[serde(rename = "choose name")]
    ChooseName(Option<Value>),

    /// Relay a message to every other connection.
    #[serde(rename = "chat message")]
    ChatMessage(Option<Value>),

    /// The sender started typing. Any payload is accepted and ignored.
    #[serde(rename = "typing")]
    Typing(Option<Value>),

    /// The sender stopped typing. Any payload is accepted and ignored.
    #[serde(rename = "stop typing")]
    StopTyping(Option<Value>),
}

/// Event pushed by the server to one or more connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerEvent {
    /// Snapshot of every registered nickname, in no particular order.
    #[serde(rename = "update user list")]
    UpdateUserList(Vec<String>),

    /// A connection chose a nickname.
    #[serde(rename = "new user")]
    NewUser(NewUserNotice),

    /// A relayed message, already rendered as `"<nickname>: <text>"`.
    #[serde(rename = "chat message")]
    ChatMessage(String),

    /// Someone is typing. `None` when the typist has no nickname yet.
    #[serde(rename = "user typing")]
    UserTyping(Option<String>),

    /// Someone stopped typing.
    #[serde(rename = "not typing")]
    NotTyping,

    /// A named connection went away, rendered as `"<nickname> has left the chat"`.
    #[serde(rename = "user left")]
    UserLeft(String),
}

impl ServerEvent {
    /// Wire name of the event, as it appears in the `event` field.
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::UpdateUserList(_) => "update user list",
            ServerEvent::NewUser(_) => "new user",
            ServerEvent::ChatMessage(_) => "chat message",
            ServerEvent::UserTyping(_) => "user typing",
            ServerEvent::NotTyping => "not typing",
            ServerEvent::UserLeft(_) => "user left",
        }
    }

    /// Build a "chat message" event attributed to `sender`.
    pub fn chat_message(sender: &str, text: &str) -> Self {
        ServerEvent::ChatMessage(format!("{}: {}", sender, text))
    }

    /// Build a "user left" event for `nickname`.
    pub fn user_left(nickname: &str) -> Self {
        ServerEvent::UserLeft(format!("{} has left the chat", nickname))
    }
}

/// Payload of the "new user" event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserNotice {
    pub nickname: String,
    pub text: String,
}

impl NewUserNotice {
    pub fn joined(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            text: JOINED_TEXT.to_string(),
        }
    }
}
