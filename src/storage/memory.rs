//! In-memory store for tests and non-persistent use.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::store::{KeyValueStore, StorageError};

/// Volatile [`KeyValueStore`] backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored entries.
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_written_text() {
        let store = MemoryStore::new();
        store.write("key", "text").unwrap();

        assert_eq!(store.read("key").as_deref(), Some("text"));
    }

    #[test]
    fn read_returns_none_for_missing_key() {
        let store = MemoryStore::new();

        assert_eq!(store.read("missing"), None);
    }

    #[test]
    fn write_overwrites() {
        let store = MemoryStore::new();
        store.write("key", "first").unwrap();
        store.write("key", "second").unwrap();

        assert_eq!(store.read("key").as_deref(), Some("second"));
    }
}
