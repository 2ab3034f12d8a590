//! Cart persistence behind a key-value interface.
//!
//! The persisted unit is one JSON payload per cart key. Keeping the
//! interface this small lets tests swap the file store for an in-memory
//! fake and keeps the cart service agnostic about where carts live.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors from a cart store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key-value persistence backend for serialized carts.
pub trait CartStore: Send + Sync {
    /// Load the payload for a cart key, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Persist the payload for a cart key.
    fn save(&self, key: &str, payload: &str) -> Result<(), StoreError>;
}

/// File-backed store: one `<key>.json` file per cart under a directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create the store, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    // Cart keys are UUIDs generated by this process; the file name is the
    // key plus a fixed extension, so no path traversal is possible.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        std::fs::write(self.path_for(key), payload)?;
        Ok(())
    }
}

/// In-memory store: carts last for the process lifetime.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl CartStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
