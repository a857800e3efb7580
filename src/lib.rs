//! web-util-kit
//!
//! Small, stateless utilities for application front-ends: translation lookup
//! with locale fallback, marker substitution in templates, a persisted
//! key-value settings layer, plain-value comparison, and environment probes.
//!
//! Everything environment-derived (locale lists, storage, viewport width,
//! user-agent strings, permission state) enters through a capability trait
//! or a plain argument, so the core logic runs and tests anywhere.

pub mod env;
pub mod format;
pub mod i18n;
pub mod storage;
pub mod text;
pub mod value;

// Re-export the surface most callers touch.
pub use i18n::{CODE_EMPTY, TextMap, Translator};
pub use storage::{JsonStoreExt, KeyValueStore, MemoryStore};
