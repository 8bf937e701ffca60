//! The leaderboard: an append-only list of records kept in storage.

use tracing::{debug, info, instrument, warn};

use crate::records::{KeyValueStorage, Record, RecordError, StorageError};

/// Storage key the leaderboard lives under by default.
pub const RECORDS_STORAGE_KEY: &str = "fifteen_puzzle_records";

/// Durable leaderboard of completion times.
///
/// Ranking is insertion order, oldest first. Every mutation re-persists the
/// whole list before it is reflected in memory, so the in-memory view never
/// runs ahead of storage.
#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
    key: String,
    records: Vec<Record>,
}

impl<S: KeyValueStorage> RecordStore<S> {
    /// Opens the store under [`RECORDS_STORAGE_KEY`].
    #[instrument(skip(storage))]
    pub fn open(storage: S) -> Self {
        Self::with_key(storage, RECORDS_STORAGE_KEY)
    }

    /// Opens the store under a custom key and loads what is stored there.
    #[instrument(skip(storage, key), fields(key = %key.as_ref()))]
    pub fn with_key(storage: S, key: impl AsRef<str>) -> Self {
        let key = key.as_ref().to_string();
        let records = read_records(&storage, &key);
        info!(count = records.len(), "Record store opened");
        Self {
            storage,
            key,
            records,
        }
    }

    /// Re-reads the persisted list, replacing the in-memory copy.
    ///
    /// Missing, unreadable or corrupt storage, including entries with blank
    /// names, yields an empty list.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&mut self) -> &[Record] {
        self.records = read_records(&self.storage, &self.key);
        &self.records
    }

    /// Returns the records in ranking order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends a record and persists the full list.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyName`] for a blank name and
    /// [`RecordError::Storage`] if the write fails. Either way the list is
    /// left unchanged.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn append(&mut self, name: &str, time: u64) -> Result<&[Record], RecordError> {
        let record = Record::new(name, time)?;

        let mut next = self.records.clone();
        next.push(record);
        self.persist(&next)?;
        self.records = next;

        info!(count = self.records.len(), "Record appended");
        Ok(&self.records)
    }

    /// Removes every record, in memory and in storage. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Storage`] if the stored list cannot be removed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<(), RecordError> {
        self.storage.remove(&self.key)?;
        self.records.clear();
        info!("Records cleared");
        Ok(())
    }

    /// Leaderboard lines in ranking order, e.g. `NO.1. Alice: 42s`.
    pub fn ranking_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| format!("NO.{}. {}", index + 1, record))
            .collect()
    }

    fn persist(&mut self, records: &[Record]) -> Result<(), RecordError> {
        let encoded = serde_json::to_string(records)
            .map_err(|e| StorageError::new(format!("Failed to encode records: {}", e)))?;
        self.storage.set(&self.key, &encoded)?;
        debug!(bytes = encoded.len(), "Records persisted");
        Ok(())
    }
}

/// Reads and decodes the stored list, degrading to empty on any failure.
fn read_records<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Record> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No stored records");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read records, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Record>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, error = %e, "Stored records are corrupt, starting empty");
            Vec::new()
        }
    }
}
