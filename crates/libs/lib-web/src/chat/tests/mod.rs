//! # Chat Tests
//!
//! Drive [`ChatSession`]s over in-memory channels and inspect what every
//! connection received.

mod presence;

use super::*;
use shared::dto::chat::{ClientEvent, NewUserNotice, ServerEvent};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One simulated client: its session and the receiving end of its socket.
pub struct TestClient {
    pub session: ChatSession,
    pub inbox: EventReceiver,
}

impl TestClient {
    pub async fn connect(chat: &Arc<ChatAppState>) -> Self {
        let (tx, inbox) = mpsc::unbounded_channel();
        let session = ChatSession::open(Arc::clone(chat), tx).await;
        Self { session, inbox }
    }

    pub async fn choose_name(&mut self, nickname: &str) {
        self.session
            .dispatch(ClientEvent::ChooseName(Some(json!(nickname))))
            .await;
    }

    pub async fn say(&mut self, text: &str) {
        self.session
            .dispatch(ClientEvent::ChatMessage(Some(json!(text))))
            .await;
    }

    /// Everything queued for this client so far.
    pub fn drain(&mut self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.inbox.try_recv() {
            events.push(event);
        }
        events
    }
}

pub fn new_chat() -> Arc<ChatAppState> {
    Arc::new(ChatAppState::new())
}

/// User list with order normalised, for unordered comparisons.
pub fn user_list(names: &[&str]) -> ServerEvent {
    let mut names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    names.sort();
    ServerEvent::UpdateUserList(names)
}

/// Sort the payload of every "update user list" event.
pub fn normalise(events: Vec<ServerEvent>) -> Vec<ServerEvent> {
    events
        .into_iter()
        .map(|event| match event {
            ServerEvent::UpdateUserList(mut names) => {
                names.sort();
                ServerEvent::UpdateUserList(names)
            }
            other => other,
        })
        .collect()
}

pub fn joined(nickname: &str) -> ServerEvent {
    ServerEvent::NewUser(NewUserNotice::joined(nickname))
}
