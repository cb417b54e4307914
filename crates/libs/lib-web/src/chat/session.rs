//! # Chat Session
//!
//! Per-connection state machine driven by the transport:
//!
//! ```text
//! open ──► Anonymous ──choose name──► Named ──choose name──► Named
//!              │                        │
//!              └──────── close ─────────┴──► (consumed)
//! ```
//!
//! Inbound events for one connection are dispatched sequentially; the session
//! only suspends while waiting for the chat state lock, never between a
//! registry mutation and its broadcasts.

use super::peers::EventSender;
use super::registry::ConnectionId;
use super::state::ChatAppState;
use shared::dto::chat::ClientEvent;
use shared::utils::render_payload;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a connection stands in its lifecycle. `Closed` is represented by the
/// session having been consumed by [`ChatSession::close`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionPhase {
    Anonymous,
    Named(String),
}

pub struct ChatSession {
    id: ConnectionId,
    phase: ConnectionPhase,
    chat: Arc<ChatAppState>,
    events_handled: u64,
}

fn payload_text(payload: Option<&Value>) -> String {
    payload.map(render_payload).unwrap_or_default()
}

impl ChatSession {
    /// Entry action: register the connection's outbound channel and send it
    /// the list of users already online.
    pub async fn open(chat: Arc<ChatAppState>, sender: EventSender) -> Self {
        let id = ConnectionId::new();
        chat.connect(id, sender).await;

        info!(connection = %id, "[CHAT] a user connected");

        Self {
            id,
            phase: ConnectionPhase::Anonymous,
            chat,
            events_handled: 0,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn phase(&self) -> &ConnectionPhase {
        &self.phase
    }

    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }

    /// Handle one inbound event from this connection.
    pub async fn dispatch(&mut self, event: ClientEvent) {
        self.events_handled += 1;

        match event {
            ClientEvent::ChooseName(payload) => {
                let nickname = payload_text(payload.as_ref());
                info!(connection = %self.id, nickname = %nickname, "[CHAT] nickname chosen");

                self.chat.choose_name(self.id, nickname.clone()).await;
                self.phase = ConnectionPhase::Named(nickname);
            }
            ClientEvent::ChatMessage(payload) => {
                let text = payload_text(payload.as_ref());
                debug!(connection = %self.id, size = text.len(), "[CHAT] chat message");

                self.chat.relay_message(self.id, &text).await;
            }
            ClientEvent::Typing(_) => self.chat.typing(self.id).await,
            ClientEvent::StopTyping(_) => self.chat.stop_typing(self.id).await,
        }
    }

    /// Exit action: remove the connection and notify the others.
    /// Consumes the session, so no event can be dispatched after it.
    pub async fn close(self) {
        let nickname = self.chat.disconnect(self.id).await;

        info!(
            connection = %self.id,
            nickname = ?nickname,
            events_handled = self.events_handled,
            "[CHAT] user disconnected"
        );
    }
}
