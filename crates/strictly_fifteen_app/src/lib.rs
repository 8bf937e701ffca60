//! Strictly Fifteen - sliding puzzle sessions with a durable leaderboard
//!
//! Builds on the `strictly_fifteen` board engine.
//!
//! # Architecture
//!
//! - **Session**: one player's game: start, click, timer, end
//! - **Records**: the leaderboard and its key-value storage backends
//! - **Config**: TOML configuration selecting storage and tunables
//!
//! # Example
//!
//! ```no_run
//! use strictly_fifteen::RngSource;
//! use strictly_fifteen_app::{GameSession, MemoryStorage, RecordStore, SessionSettings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut records = RecordStore::open(MemoryStorage::new());
//! let mut session = GameSession::new(RngSource::from_os_rng(), SessionSettings::default());
//!
//! session.start_new_game("Alice")?;
//! let click = session.click_tile(14, &mut records);
//! if let Some(notice) = click.notice() {
//!     println!("{}", notice);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod records;
mod session;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, FifteenConfig, StorageConfig};

// Crate-level exports - Records
#[cfg(feature = "sqlite")]
pub use records::SqliteStorage;
pub use records::{
    FileStorage, KeyValueStorage, MemoryStorage, RECORDS_STORAGE_KEY, Record, RecordError,
    RecordStore, StorageError,
};

// Crate-level exports - Session
pub use session::{GameSession, SessionError, SessionPhase, SessionSettings, TickTimer, TileClick};
