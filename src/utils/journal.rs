//! In-memory event journal for testing and demos

use std::sync::{Arc, RwLock};

use crate::traits::{EventRecord, EventSink};

/// Event sink that appends every record to an in-memory journal.
///
/// Clones share the same underlying journal, so a copy handed to the
/// ledger stays readable from the test or demo that created it.
#[derive(Debug, Clone, Default)]
pub struct MemoryJournal {
    records: Arc<RwLock<Vec<EventRecord>>>,
}

impl MemoryJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records seen so far.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.read().unwrap().clone()
    }

    /// Number of records seen so far.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Whether the journal has seen no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all records (useful for testing)
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }
}

impl EventSink for MemoryJournal {
    fn on_event(&self, record: &EventRecord) {
        self.records.write().unwrap().push(record.clone());
    }
}
