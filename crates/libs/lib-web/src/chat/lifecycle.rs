//! # Connection Lifecycle
//!
//! State transitions of the relay. Each one mutates the registry (if needed)
//! and fans out the resulting events while holding the chat state lock.
//!
//! | Transition     | Registry          | Sent to                                   |
//! |----------------|-------------------|-------------------------------------------|
//! | connect        | -                 | sender: "update user list"                |
//! | choose name    | set               | others: "new user"; all: "update user list" |
//! | chat message   | -                 | others: "chat message"                    |
//! | typing         | -                 | others: "user typing"                     |
//! | stop typing    | -                 | others: "not typing"                      |
//! | disconnect     | remove            | others: "user left"; all: "update user list" |

use super::peers::EventSender;
use super::registry::ConnectionId;
use super::state::ChatAppState;
use shared::dto::chat::{NewUserNotice, ServerEvent, UNKNOWN_SENDER};
use tracing::debug;

/// A nickname only counts as a display name when it is non-empty.
fn display_name(nickname: Option<&str>) -> Option<&str> {
    nickname.filter(|name| !name.is_empty())
}

impl ChatAppState {
    /// Register the outbound channel of a new connection and send it the
    /// current user list. The newcomer is not in the registry yet, so the
    /// list only contains other users.
    pub async fn connect(&self, connection: ConnectionId, sender: EventSender) {
        let mut state = self.write().await;
        state.peers.insert(connection, sender);

        let online = state.registry.values();
        state
            .peers
            .send_to_one(&connection, ServerEvent::UpdateUserList(online));
    }

    /// Set or replace the nickname of `connection` and announce it.
    pub async fn choose_name(&self, connection: ConnectionId, nickname: String) {
        let mut state = self.write().await;
        state.registry.set(connection, nickname.clone());

        let notified = state
            .peers
            .send_to_others(&connection, ServerEvent::NewUser(NewUserNotice::joined(nickname)));

        let online = state.registry.values();
        let updated = state.peers.send_to_all(ServerEvent::UpdateUserList(online));

        debug!(
            connection = %connection,
            notified,
            updated,
            "[CHAT] choose name broadcast"
        );
    }

    /// Relay `text` from `connection` to everyone else as `"<nickname>: <text>"`.
    pub async fn relay_message(&self, connection: ConnectionId, text: &str) {
        let state = self.read().await;
        let sender = display_name(state.registry.get(&connection)).unwrap_or(UNKNOWN_SENDER);

        let reached = state
            .peers
            .send_to_others(&connection, ServerEvent::chat_message(sender, text));

        debug!(connection = %connection, reached, "[CHAT] message relayed");
    }

    /// Tell everyone else that `connection` is typing. The nickname is passed
    /// through as registered, `None` for an anonymous connection.
    pub async fn typing(&self, connection: ConnectionId) {
        let state = self.read().await;
        let nickname = state.registry.get(&connection).map(str::to_string);

        state
            .peers
            .send_to_others(&connection, ServerEvent::UserTyping(nickname));
    }

    pub async fn stop_typing(&self, connection: ConnectionId) {
        let state = self.read().await;
        state.peers.send_to_others(&connection, ServerEvent::NotTyping);
    }

    /// Forget `connection`, announce the departure if it had a nickname and
    /// push the new user list to every remaining connection.
    ///
    /// Returns the nickname the connection held, if any.
    pub async fn disconnect(&self, connection: ConnectionId) -> Option<String> {
        let mut state = self.write().await;

        if let Some(nickname) = display_name(state.registry.get(&connection)) {
            let farewell = ServerEvent::user_left(nickname);
            state.peers.send_to_others(&connection, farewell);
        }

        let nickname = state.registry.remove(&connection);
        state.peers.remove(&connection);

        let online = state.registry.values();
        let updated = state.peers.send_to_all(ServerEvent::UpdateUserList(online));

        debug!(connection = %connection, updated, "[CHAT] disconnect broadcast");
        nickname
    }
}
