//! # Chat State Management
//!
//! Owns the connection registry and the peer table behind a single lock.
//! Every lifecycle transition holds the guard for its whole duration, so a
//! registry mutation and the user-list snapshot it broadcasts can never be
//! interleaved with another connection's transition.

use super::peers::PeerTable;
use super::registry::ConnectionRegistry;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything the relay knows about live connections.
#[derive(Debug, Default)]
pub struct ChatState {
    pub registry: ConnectionRegistry,
    pub peers: PeerTable,
}

/// Application state for the chat module, shared as `Arc<ChatAppState>`.
#[derive(Debug, Default)]
pub struct ChatAppState {
    state: RwLock<ChatState>,
}

impl ChatAppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, ChatState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, ChatState> {
        self.state.write().await
    }

    /// Snapshot of every registered nickname.
    pub async fn online_nicknames(&self) -> Vec<String> {
        self.read().await.registry.values()
    }

    /// Number of open connections, named or not.
    pub async fn connection_count(&self) -> usize {
        self.read().await.peers.len()
    }
}
