//! Leaderboard entries.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::records::RecordError;

/// A completed game: who solved it and how many seconds it took.
///
/// Serialized as `{"name": ..., "time": ...}`. Deserialization goes through
/// [`Record::new`], so a stored entry with a blank name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: String,
    time: u64,
}

/// Unvalidated wire shape of a [`Record`].
#[derive(Debug, Deserialize)]
struct StoredRecord {
    name: String,
    time: u64,
}

impl TryFrom<StoredRecord> for Record {
    type Error = RecordError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        Self::new(stored.name, stored.time)
    }
}

impl Record {
    /// Creates a record, rejecting empty or whitespace-only names.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyName`] if `name` is blank.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, time: u64) -> Result<Self, RecordError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        Ok(Self { name, time })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}s", self.name, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = Record::new("Alice", 42).unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(*record.time(), 42);
        assert_eq!(record.to_string(), "Alice: 42s");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(Record::new("", 1), Err(RecordError::EmptyName)));
        assert!(matches!(Record::new("   ", 1), Err(RecordError::EmptyName)));
    }

    #[test]
    fn test_wire_format() {
        let record = Record::new("Bob", 7).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Bob","time":7}"#);
    }

    #[test]
    fn test_blank_stored_name_does_not_parse() {
        assert!(serde_json::from_str::<Record>(r#"{"name":"","time":5}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"name":"   ","time":1}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Record>(r#"{"name":"Bob","time":7}"#).unwrap(),
            Record::new("Bob", 7).unwrap()
        );
    }

    #[test]
    fn test_negative_time_does_not_parse() {
        assert!(serde_json::from_str::<Record>(r#"{"name":"Bob","time":-3}"#).is_err());
    }
}
