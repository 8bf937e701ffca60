//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::records::{
    FileStorage, KeyValueStorage, MemoryStorage, RECORDS_STORAGE_KEY, StorageError,
};
use crate::session::SessionSettings;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "STRICTLY_FIFTEEN_CONFIG";

/// Top-level configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FifteenConfig {
    /// Storage key the leaderboard lives under.
    #[serde(default = "default_records_key")]
    records_key: String,

    /// Where the leaderboard is persisted.
    #[serde(default)]
    storage: StorageConfig,

    /// Boards generated before giving up on a solvable one.
    #[serde(default = "default_max_shuffle_attempts")]
    max_shuffle_attempts: usize,

    /// Timer period in milliseconds.
    #[serde(default = "default_tick_millis")]
    tick_millis: u64,
}

fn default_records_key() -> String {
    RECORDS_STORAGE_KEY.to_string()
}

fn default_max_shuffle_attempts() -> usize {
    strictly_fifteen::DEFAULT_MAX_ATTEMPTS
}

fn default_tick_millis() -> u64 {
    1000
}

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Kept in memory; lost on exit.
    Memory,
    /// One JSON file per key in a directory.
    File {
        /// Directory holding the files.
        path: PathBuf,
    },
    /// SQLite database (requires the `sqlite` feature).
    Sqlite {
        /// Database file.
        path: PathBuf,
    },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            path: PathBuf::from("fifteen_records"),
        }
    }
}

impl Default for FifteenConfig {
    fn default() -> Self {
        Self {
            records_key: default_records_key(),
            storage: StorageConfig::default(),
            max_shuffle_attempts: default_max_shuffle_attempts(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl FifteenConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// value is out of range.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on malformed TOML or out-of-range values.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_shuffle_attempts == 0 {
            return Err(ConfigError::new(
                "max_shuffle_attempts must be at least 1".to_string(),
            ));
        }
        if config.tick_millis == 0 {
            return Err(ConfigError::new("tick_millis must be at least 1".to_string()));
        }
        if config.records_key.trim().is_empty() {
            return Err(ConfigError::new("records_key must not be empty".to_string()));
        }

        info!(storage = ?config.storage, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an explicitly named file is unusable.
    #[instrument]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Session tunables derived from this config.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(
            self.max_shuffle_attempts,
            Duration::from_millis(self.tick_millis),
        )
    }

    /// Opens the configured storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be opened, or if the
    /// SQLite backend is selected in a build without the `sqlite` feature.
    #[instrument(skip(self), fields(storage = ?self.storage))]
    pub fn open_storage(&self) -> Result<Box<dyn KeyValueStorage>, StorageError> {
        match &self.storage {
            StorageConfig::Memory => {
                warn!("Using in-memory storage; records will not survive exit");
                Ok(Box::new(MemoryStorage::new()))
            }
            StorageConfig::File { path } => Ok(Box::new(FileStorage::open(path)?)),
            StorageConfig::Sqlite { path } => open_sqlite(path),
        }
    }
}

#[cfg(feature = "sqlite")]
fn open_sqlite(path: &Path) -> Result<Box<dyn KeyValueStorage>, StorageError> {
    let db_path = path
        .to_str()
        .ok_or_else(|| StorageError::new(format!("Non UTF-8 database path: {}", path.display())))?
        .to_string();
    Ok(Box::new(crate::records::SqliteStorage::open(db_path)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(path: &Path) -> Result<Box<dyn KeyValueStorage>, StorageError> {
    Err(StorageError::new(format!(
        "SQLite storage at {} requested, but this build lacks the `sqlite` feature",
        path.display()
    )))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
