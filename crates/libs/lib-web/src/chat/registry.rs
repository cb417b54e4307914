//! # Connection Registry
//!
//! Single source of truth for "who is online": maps each live connection to
//! the nickname it chose. A connection without an entry is anonymous.
//!
//! Nicknames are neither validated nor deduplicated; two connections may hold
//! the same nickname and an empty nickname is stored like any other.

use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Process-unique identifier of one transport session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Allocate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mapping from connection to nickname.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    nicknames: HashMap<ConnectionId, String>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the nickname of `connection`.
    pub fn set(&mut self, connection: ConnectionId, nickname: String) {
        self.nicknames.insert(connection, nickname);
    }

    /// Nickname of `connection`, `None` if it is anonymous.
    pub fn get(&self, connection: &ConnectionId) -> Option<&str> {
        self.nicknames.get(connection).map(String::as_str)
    }

    /// Forget `connection`. No-op if it never chose a nickname.
    pub fn remove(&mut self, connection: &ConnectionId) -> Option<String> {
        self.nicknames.remove(connection)
    }

    /// Snapshot of every registered nickname, in unspecified order.
    pub fn values(&self) -> Vec<String> {
        self.nicknames.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.nicknames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nicknames.is_empty()
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<String>) -> Vec<String> {
        values.sort();
        values
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut registry = ConnectionRegistry::new();
        let id = ConnectionId::new();

        registry.set(id, "Alice".to_string());
        registry.set(id, "Alicia".to_string());

        assert_eq!(registry.get(&id), Some("Alicia"));
        assert_eq!(registry.values(), vec!["Alicia".to_string()]);
    }

    #[test]
    fn test_duplicate_nicknames_are_kept() {
        let mut registry = ConnectionRegistry::new();
        registry.set(ConnectionId::new(), "Sam".to_string());
        registry.set(ConnectionId::new(), "Sam".to_string());

        assert_eq!(registry.values(), vec!["Sam".to_string(), "Sam".to_string()]);
    }

    #[test]
    fn test_remove_unknown_connection_is_noop() {
        let mut registry = ConnectionRegistry::new();
        let named = ConnectionId::new();
        registry.set(named, "Alice".to_string());

        assert_eq!(registry.remove(&ConnectionId::new()), None);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.remove(&named), Some("Alice".to_string()));
        assert!(registry.is_empty());
        assert_eq!(registry.get(&named), None);
    }

    #[test]
    fn test_values_is_a_snapshot() {
        let mut registry = ConnectionRegistry::new();
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        registry.set(a, "Alice".to_string());
        registry.set(b, "Bob".to_string());

        let snapshot = registry.values();
        registry.remove(&a);

        assert_eq!(sorted(snapshot), vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(registry.values(), vec!["Bob".to_string()]);
    }

    #[test]
    fn test_connection_ids_are_unique() {
        assert_ne!(ConnectionId::new(), ConnectionId::new());
    }
}
// endregion: --- Tests
