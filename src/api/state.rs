//! Application state for the import API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::MemoryStore;

/// Shared application state.
///
/// Holds the employee store behind an async mutex so that imports run one
/// at a time, each seeing the managers persisted by the previous one.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<MemoryStore>>,
    snapshot_path: Option<PathBuf>,
}

impl AppState {
    /// Creates a state around an in-memory store.
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            snapshot_path: None,
        }
    }

    /// Writes the store to `path` after every successful import.
    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Returns the shared store.
    pub fn store(&self) -> &Mutex<MemoryStore> {
        &self.store
    }

    /// Returns the snapshot path, if persistence to disk is enabled.
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }
}
