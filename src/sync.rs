//! Persistence synchronizer between shared state and durable storage
//!
//! Data only flows one way per call: `hydrate`/`reload` read storage into
//! shared state, `commit` writes shared state then storage. Storage failures
//! are logged and absorbed; they never reach the caller.

use crate::record::FormRecord;
use crate::storage::{KeyValueStore, StorageError, FORM_DATA_KEY};
use crate::store::{FormStore, Writer};
use std::sync::Arc;

pub struct Synchronizer {
    store: Arc<FormStore>,
    storage: Arc<dyn KeyValueStore>,
}

impl Synchronizer {
    pub fn new(store: Arc<FormStore>, storage: Arc<dyn KeyValueStore>) -> Self {
        Self { store, storage }
    }

    pub fn store(&self) -> &Arc<FormStore> {
        &self.store
    }

    /// Seed shared state from storage.
    ///
    /// A missing or unreadable payload leaves shared state untouched.
    pub async fn hydrate(&self) -> FormRecord {
        match self.read_stored().await {
            Ok(Some(record)) => {
                tracing::info!("Hydrated form data from storage");
                self.store.load_form_data(record.clone());
                record
            }
            Ok(None) => {
                tracing::debug!("No stored form data, keeping defaults");
                self.store.form_data()
            }
            Err(err) => {
                tracing::warn!("Ignoring stored form data: {err}");
                self.store.form_data()
            }
        }
    }

    /// Re-read storage and republish the result to subscribers.
    ///
    /// Without a usable stored value the current shared record is republished,
    /// so the edit buffer still snaps back to shared state.
    pub async fn reload(&self) -> FormRecord {
        let record = match self.read_stored().await {
            Ok(Some(record)) => record,
            Ok(None) => self.store.form_data(),
            Err(err) => {
                tracing::warn!("Ignoring stored form data: {err}");
                self.store.form_data()
            }
        };
        self.store.load_form_data(record.clone());
        record
    }

    /// Publish an accepted record to shared state, then persist it
    pub async fn commit(&self, record: FormRecord) {
        self.store.set_form_data(record.clone(), Writer::Form);

        if let Err(err) = self.write_stored(&record).await {
            tracing::warn!("Failed to persist form data: {err}");
            return;
        }
        tracing::info!(
            revision = self.store.snapshot().revision,
            "Committed form data for {:?}",
            record.username
        );
    }

    /// Forget the stored payload and reset shared state to defaults
    pub async fn clear(&self) {
        if let Err(err) = self.storage.remove_item(FORM_DATA_KEY).await {
            tracing::warn!("Failed to remove stored form data: {err}");
        }
        self.store.load_form_data(FormRecord::default());
    }

    async fn read_stored(&self) -> Result<Option<FormRecord>, StorageError> {
        let Some(raw) = self.storage.get_item(FORM_DATA_KEY).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(StorageError::Deserialization)
    }

    async fn write_stored(&self, record: &FormRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record).map_err(StorageError::Serialization)?;
        self.storage.set_item(FORM_DATA_KEY, &payload).await
    }
}
