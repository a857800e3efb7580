//! Persisted key-value settings.

pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{JsonStoreExt, KeyValueStore, StorageError};
