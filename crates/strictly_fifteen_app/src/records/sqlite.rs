//! SQLite-backed key-value storage.

use derive_new::new;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::records::{KeyValueStorage, StorageError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Insertable key-value row.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::kv_entries)]
struct NewEntry {
    entry_key: String,
    entry_value: String,
}

/// Storage in a SQLite database file.
///
/// Each call opens its own connection, so the path must name a file;
/// `":memory:"` would forget every write.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: String,
}

impl SqliteStorage {
    /// Opens the database at `db_path` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StorageError> {
        info!(path = %db_path, "Opening SQLite storage");
        let storage = Self { db_path };
        let mut conn = storage.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StorageError::new(format!("Migrations failed: {}", e)))?;
        Ok(storage)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StorageError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            StorageError::new(format!("Failed to connect to '{}': {}", self.db_path, e))
        })
    }
}

impl KeyValueStorage for SqliteStorage {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.connection()?;
        let value = schema::kv_entries::table
            .filter(schema::kv_entries::entry_key.eq(key))
            .select(schema::kv_entries::entry_value)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(value)
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.connection()?;
        let entry = NewEntry::new(key.to_string(), value.to_string());
        diesel::replace_into(schema::kv_entries::table)
            .values(&entry)
            .execute(&mut conn)?;
        debug!(key, "Stored value");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut conn = self.connection()?;
        let removed = diesel::delete(
            schema::kv_entries::table.filter(schema::kv_entries::entry_key.eq(key)),
        )
        .execute(&mut conn)?;
        debug!(key, removed, "Removed value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::NamedTempFile, SqliteStorage) {
        let db_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let db_path = db_file.path().to_str().expect("Invalid path").to_string();
        let storage = SqliteStorage::open(db_path).expect("Failed to open storage");
        (db_file, storage)
    }

    #[test]
    fn test_sqlite_round_trip() {
        let (_db, mut storage) = open_temp();
        assert_eq!(storage.get("records").unwrap(), None);

        storage.set("records", "[]").unwrap();
        storage.set("records", "[1]").unwrap();
        assert_eq!(storage.get("records").unwrap().as_deref(), Some("[1]"));

        storage.remove("records").unwrap();
        storage.remove("records").unwrap();
        assert_eq!(storage.get("records").unwrap(), None);
    }

    #[test]
    fn test_reopen_keeps_values() {
        let (db, mut storage) = open_temp();
        storage.set("k", "v").unwrap();

        let path = db.path().to_str().unwrap().to_string();
        let reopened = SqliteStorage::open(path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }
}
