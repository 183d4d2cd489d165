//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (duplicate, dangling
//! reference) instead of inspecting opaque SQLite errors.

use rusqlite::ffi;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique or primary key constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Row references a parent that does not exist.
    #[error("dangling reference: {0}")]
    MissingReference(String),

    /// SQL failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// No connection could be taken from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// The blocking task running the query was cancelled or panicked.
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl StorageError {
    /// Whether this error means the referenced parent row does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::MissingReference(_))
    }
}

/// Custom `From<rusqlite::Error>`, not a blanket `#[from]`.
///
/// - unique / primary key violation → `Duplicate`
/// - foreign key violation → `MissingReference`
/// - everything else → `Database`
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, msg) => match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    Self::Duplicate(msg.clone().unwrap_or_else(|| e.to_string()))
                },
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    Self::MissingReference(msg.clone().unwrap_or_else(|| e.to_string()))
                },
                _ => Self::Database(err),
            },
            _ => Self::Database(err),
        }
    }
}
