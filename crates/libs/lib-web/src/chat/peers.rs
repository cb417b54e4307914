//! # Peer Table
//!
//! Outbound side of every live connection. Each connection owns an unbounded
//! channel; the transport drains the receiving half into its socket.
//!
//! The three send primitives are best-effort: a peer whose receiver is gone is
//! skipped silently, there is no retry and no acknowledgement.

use super::registry::ConnectionId;
use shared::dto::chat::ServerEvent;
use std::collections::HashMap;
use tokio::sync::mpsc;

pub type EventSender = mpsc::UnboundedSender<ServerEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<ServerEvent>;

#[derive(Debug, Default)]
pub struct PeerTable {
    peers: HashMap<ConnectionId, EventSender>,
}

impl PeerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, connection: ConnectionId, sender: EventSender) {
        self.peers.insert(connection, sender);
    }

    pub fn remove(&mut self, connection: &ConnectionId) -> Option<EventSender> {
        self.peers.remove(connection)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Unicast. Returns whether the event was queued.
    pub fn send_to_one(&self, connection: &ConnectionId, event: ServerEvent) -> bool {
        self.peers
            .get(connection)
            .map(|tx| tx.send(event).is_ok())
            .unwrap_or(false)
    }

    /// Broadcast to every peer except `origin`. Returns the number of peers reached.
    pub fn send_to_others(&self, origin: &ConnectionId, event: ServerEvent) -> usize {
        self.peers
            .iter()
            .filter(|(id, _)| *id != origin)
            .filter(|(_, tx)| tx.send(event.clone()).is_ok())
            .count()
    }

    /// Broadcast to every peer. Returns the number of peers reached.
    pub fn send_to_all(&self, event: ServerEvent) -> usize {
        self.peers
            .values()
            .filter(|tx| tx.send(event.clone()).is_ok())
            .count()
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn peer(table: &mut PeerTable) -> (ConnectionId, EventReceiver) {
        let id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        table.insert(id, tx);
        (id, rx)
    }

    #[test]
    fn test_send_to_others_skips_origin() {
        let mut table = PeerTable::new();
        let (a, mut rx_a) = peer(&mut table);
        let (_b, mut rx_b) = peer(&mut table);
        let (_c, mut rx_c) = peer(&mut table);

        let reached = table.send_to_others(&a, ServerEvent::NotTyping);

        assert_eq!(reached, 2);
        assert!(rx_a.try_recv().is_err());
        assert_eq!(rx_b.try_recv().unwrap(), ServerEvent::NotTyping);
        assert_eq!(rx_c.try_recv().unwrap(), ServerEvent::NotTyping);
    }

    #[test]
    fn test_send_to_all_includes_everyone() {
        let mut table = PeerTable::new();
        let (_a, mut rx_a) = peer(&mut table);
        let (_b, mut rx_b) = peer(&mut table);

        let event = ServerEvent::UpdateUserList(vec!["Alice".to_string()]);
        assert_eq!(table.send_to_all(event.clone()), 2);
        assert_eq!(rx_a.try_recv().unwrap(), event);
        assert_eq!(rx_b.try_recv().unwrap(), event);
    }

    #[test]
    fn test_closed_receiver_is_skipped() {
        let mut table = PeerTable::new();
        let (a, rx_a) = peer(&mut table);
        let (_b, mut rx_b) = peer(&mut table);
        drop(rx_a);

        assert!(!table.send_to_one(&a, ServerEvent::NotTyping));
        assert_eq!(table.send_to_all(ServerEvent::NotTyping), 1);
        assert_eq!(rx_b.try_recv().unwrap(), ServerEvent::NotTyping);
    }

    #[test]
    fn test_send_to_one_unknown_connection() {
        let table = PeerTable::new();
        assert!(!table.send_to_one(&ConnectionId::new(), ServerEvent::NotTyping));
    }
}
// endregion: --- Tests
