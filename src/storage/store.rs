//! Key-value storage trait and the JSON layer on top of it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised when writing to a store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The value could not be represented as JSON.
    #[error("Failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backing store could not be read or written.
    #[error("Failed to access the backing store: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable string-keyed text storage.
///
/// The seam over the platform's persistence; implementations are
/// substitutable in tests. No delete operation is part of the surface.
pub trait KeyValueStore {
    /// Raw text stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `text` under `key`, overwriting any prior value.
    fn write(&self, key: &str, text: &str) -> Result<(), StorageError>;

    /// Whether `key` currently holds a value.
    fn contains(&self, key: &str) -> bool {
        self.read(key).is_some()
    }
}

/// JSON serialization layer over any [`KeyValueStore`].
pub trait JsonStoreExt: KeyValueStore {
    /// Reads and parses the JSON value stored under `key`.
    ///
    /// Returns `None` when the key is absent or the stored text does not
    /// parse as `T`; a parse failure is swallowed, not propagated.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.read(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("Discarding unparseable value at {key:?}: {err}");
                None
            }
        }
    }

    /// Serializes `data` to JSON text and stores it under `key`.
    ///
    /// # Errors
    /// - `data` cannot be represented as JSON
    /// - the backing store rejects the write
    fn set<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(data)?;
        self.write(key, &text)
    }
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {}
