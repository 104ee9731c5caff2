//! Common test utilities for store integration tests.
//!
//! - `TestContext` wires an `AppState` to in-memory storage
//! - `FailingStorage` rejects every write, for best-effort persistence tests

pub mod fixtures;

use std::sync::Arc;

use lingo_store::{AppState, MemoryStorage, Storage, StorageError};

/// A loaded application state over shared in-memory storage.
pub struct TestContext {
    pub storage: Arc<MemoryStorage>,
    pub state: AppState,
}

impl TestContext {
    /// Fresh context with empty storage, already loaded.
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    pub fn with_storage(storage: Arc<MemoryStorage>) -> Self {
        let mut state = AppState::new(storage.clone());
        state.load();
        Self { storage, state }
    }

    /// Build a second state over the same storage, as an app restart would.
    pub fn restart(&self) -> AppState {
        let mut state = AppState::new(self.storage.clone());
        state.load();
        state
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.get(key).unwrap()
    }
}

/// Storage whose writes always fail. Reads return whatever it was seeded with.
#[derive(Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for FailingStorage {
    fn get(&self, key: &str) -> lingo_store::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> lingo_store::Result<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn remove(&self, _key: &str) -> lingo_store::Result<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn clear(&self) -> lingo_store::Result<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

/// Storage that can be neither read nor written.
pub struct UnreadableStorage;

impl Storage for UnreadableStorage {
    fn get(&self, _key: &str) -> lingo_store::Result<Option<String>> {
        Err(StorageError::Poisoned)
    }

    fn set(&self, _key: &str, _value: &str) -> lingo_store::Result<()> {
        Err(StorageError::Poisoned)
    }

    fn remove(&self, _key: &str) -> lingo_store::Result<()> {
        Err(StorageError::Poisoned)
    }

    fn clear(&self) -> lingo_store::Result<()> {
        Err(StorageError::Poisoned)
    }
}
