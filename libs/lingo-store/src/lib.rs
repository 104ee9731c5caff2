//! Stateful layer over `lingo-core`.
//!
//! Holds the vocabulary and settings stores, persists them through a
//! key-value [`Storage`] adapter (SQLite or in-memory) and exposes the
//! `Loading`/`Ready` application lifecycle.

pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod settings;
pub mod state;
pub mod storage;
pub mod vocabulary;

pub use config::StoreConfig;
pub use error::{Result, StorageError};
pub use settings::SettingsStore;
pub use state::AppState;
pub use storage::{keys, MemoryStorage, SqliteStorage, Storage};
pub use vocabulary::VocabularyStore;
