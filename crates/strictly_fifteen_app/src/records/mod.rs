//! Persisted leaderboard of completion times.

mod error;
mod models;
#[cfg(feature = "sqlite")]
mod schema; // Diesel generated schema - internal use only
#[cfg(feature = "sqlite")]
mod sqlite;
mod storage;
mod store;

pub use error::{RecordError, StorageError};
pub use models::Record;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{RECORDS_STORAGE_KEY, RecordStore};
