//! SQLite storage bootstrap for the marketplace store.
//!
//! # Responsibility
//! - Describe the store endpoint via [`StoreConfig`].
//! - Open and configure connections for the store gateway.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Gateway code must not read/write collection data before migrations
//!   succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub mod migrations;
mod open;

pub use open::open_store;

/// Fixed logical database file name for the marketplace store.
pub const DB_FILE_NAME: &str = "marketplace.db";

/// The single connection value identifying the store endpoint.
///
/// There is no other environment-driven configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Database file on disk.
    File(PathBuf),
    /// Private in-memory database, used by tests and the CLI smoke probe.
    InMemory,
}

impl StoreConfig {
    /// Store endpoint inside the given data directory, using the fixed
    /// [`DB_FILE_NAME`].
    pub fn for_data_dir(dir: impl AsRef<Path>) -> Self {
        Self::File(dir.as_ref().join(DB_FILE_NAME))
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
