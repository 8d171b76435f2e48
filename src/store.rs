// 🗂️ Record Store - ordered, in-memory collection of student records
//
// - add() appends, duplicates allowed
// - remove_by_identifier() drops EVERY match, keeps the rest in order
// - single owner, no locking

use crate::record::Record;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
        }
    }

    /// Append a record at the end
    pub fn add(&mut self, record: Record) {
        debug!(record = %record, "record added");
        self.records.push(record);
    }

    /// Remove all records with this identifier, returns how many were removed
    pub fn remove_by_identifier(&mut self, identifier: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.identifier() != identifier);
        let removed = before - self.records.len();

        debug!(identifier, removed, "remove by identifier");
        removed
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// First record with this identifier
    pub fn find(&self, identifier: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.identifier() == identifier)
    }

    /// Set the classification on every record with this identifier
    pub fn set_classification(&mut self, identifier: &str, classification: &str) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| r.identifier() == identifier) {
            record.set_classification(classification);
            updated += 1;
        }
        updated
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
