//! File-backed store persisting a single flat JSON object.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::store::{KeyValueStore, StorageError};

/// Durable [`KeyValueStore`] persisting entries to one JSON object file.
///
/// Every operation reads the file afresh and writes rewrite it whole.
/// Suitable for small settings payloads, not bulk data.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Path of the JSON settings file.
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents as a JSON object.
    ///
    /// A missing or malformed file yields an empty object; the next write
    /// starts over from scratch.
    fn load(&self) -> Map<String, Value> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("Ignoring malformed store file {:?}: {err}", self.path);
                Map::new()
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.load().get(key)? {
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    fn write(&self, key: &str, text: &str) -> Result<(), StorageError> {
        let mut entries = self.load();
        entries.insert(key.to_string(), Value::String(text.to_string()));
        let content = serde_json::to_string_pretty(&Value::Object(entries))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
