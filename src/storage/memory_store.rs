//! In-process storage used when persistence is disabled

use super::traits::{KeyValueStore, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Storage that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_item("formData").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set_item("k", "one").await.unwrap();
        store.set_item("k", "two").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();
        store.set_item("k", "v").await.unwrap();
        store.remove_item("k").await.unwrap();
        store.remove_item("k").await.unwrap();
        assert!(store.get_item("k").await.unwrap().is_none());
    }
}
