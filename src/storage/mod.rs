//! Durable key-value storage for the form payload

mod file_store;
mod memory_store;
mod traits;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::{KeyValueStore, StorageError};

#[cfg(test)]
pub use traits::MockKeyValueStore;

/// Storage key holding the last submitted record
pub const FORM_DATA_KEY: &str = "formData";
