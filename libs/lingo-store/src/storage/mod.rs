//! Key-value persistence adapter.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::{Result, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable string storage keyed by name.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    /// Remove every key.
    fn clear(&self) -> Result<()>;
}

/// Persisted key names, shared with data written by earlier app versions.
pub mod keys {
    pub const VOCABULARY: &str = "@vocabulary";
    pub const FAVORITES: &str = "@favorites";
    pub const SEARCH_HISTORY: &str = "@searchHistory";
    pub const LEARNED: &str = "@learned_words";
    pub const KNOWN: &str = "@known_words";
    pub const DARK_MODE: &str = "@darkMode";
    pub const SOUND_ON: &str = "@soundOn";
    pub const AUDIO_VOLUME: &str = "@audioVolume";
    pub const SOURCE_LANGUAGE: &str = "@sourceLanguage";
    pub const TARGET_LANGUAGE: &str = "@targetLanguage";
}

/// Read and parse a JSON value. Missing, unreadable and unparsable values
/// all come back as `None`; the latter two are logged.
pub(crate) fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = load_raw(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "unparsable persisted value, using default");
            None
        }
    }
}

/// Read a raw string value, logging read failures.
pub(crate) fn load_raw(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted value");
            None
        }
    }
}

/// Serialize and write a value. Failures are logged and otherwise ignored.
pub(crate) fn save_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| storage.set(key, &json));
    log_write(key, result);
}

/// Write a raw string value. Failures are logged and otherwise ignored.
pub(crate) fn save_raw(storage: &dyn Storage, key: &str, value: &str) {
    log_write(key, storage.set(key, value));
}

fn log_write(key: &str, result: Result<()>) {
    match result {
        Ok(()) => tracing::debug!(key, "persisted"),
        Err(e) => tracing::warn!(key, error = %e, "failed to persist, keeping in-memory state"),
    }
}
