//! Key-value persistence port

use std::sync::Arc;

use thiserror::Error;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },
}

/// Port for a durable string key-value store.
///
/// Calls are synchronous: a successful `set` means the value is durable.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared stores, so callers can keep a handle to inspect what was written
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.as_ref().set(key, value)
    }
}
