//! Trait abstraction for durable storage to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Failures raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize payload: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("stored payload is malformed: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// String-keyed, string-valued persistent store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value; removing a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
