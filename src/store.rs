//! Shared state container for the current form record
//!
//! One `FormStore` is created at startup and shared by reference (`Arc`) with
//! the synchronizer and the form controller. Every write is a full replacement
//! tagged with who made it, and subscribers see the latest snapshot.

use crate::record::FormRecord;
use tokio::sync::watch;

/// Origin of a shared state update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Writer {
    /// The form surface committing its own submission
    Form,
    /// Records loaded from durable storage
    Hydration,
    /// Any other part of the program
    #[allow(dead_code)] // The binary has no writer besides the form yet
    External,
}

/// A shared state value together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub record: FormRecord,
    pub writer: Writer,
    pub revision: u64,
}

/// Process-wide holder of the current `FormRecord`
#[derive(Debug)]
pub struct FormStore {
    tx: watch::Sender<Snapshot>,
}

impl FormStore {
    /// Store seeded with the compiled-in default record
    pub fn new() -> Self {
        Self::with_record(FormRecord::default())
    }

    pub fn with_record(record: FormRecord) -> Self {
        let (tx, _rx) = watch::channel(Snapshot {
            record,
            writer: Writer::Hydration,
            revision: 0,
        });
        Self { tx }
    }

    /// Current record
    pub fn form_data(&self) -> FormRecord {
        self.tx.borrow().record.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Replace the record wholesale
    pub fn set_form_data(&self, record: FormRecord, writer: Writer) {
        self.tx.send_modify(|snapshot| {
            snapshot.record = record;
            snapshot.writer = writer;
            snapshot.revision += 1;
        });
    }

    /// Replace the record with one read from storage
    pub fn load_form_data(&self, record: FormRecord) {
        self.set_form_data(record, Writer::Hydration);
    }

    /// Subscribe to updates made after this call
    pub fn subscribe(&self) -> FormSubscription {
        FormSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side of a `FormStore`
#[derive(Debug)]
pub struct FormSubscription {
    rx: watch::Receiver<Snapshot>,
}

impl FormSubscription {
    /// Take the latest unseen snapshot, if any.
    ///
    /// Intermediate updates between two polls collapse into the newest one.
    pub fn poll(&mut self) -> Option<Snapshot> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}
