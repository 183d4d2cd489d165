use async_trait::async_trait;
use zenlog_core::{Entry, EntryAnnotation};

use crate::error::StorageError;

/// Append-only entry operations.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Append an entry.
    async fn append_entry(&self, entry: &Entry) -> Result<(), StorageError>;

    /// Get entry by ID.
    async fn get_entry(&self, id: &str) -> Result<Option<Entry>, StorageError>;

    /// All entries of a thought, oldest first.
    async fn get_session_entries(&self, session_id: &str) -> Result<Vec<Entry>, StorageError>;

    /// Texts of the last `limit` entries of a thought, oldest first.
    async fn recent_entry_texts(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, StorageError>;

    /// One-time annotation. Returns `false` if already annotated or missing.
    async fn annotate_entry(
        &self,
        id: &str,
        annotation: &EntryAnnotation,
    ) -> Result<bool, StorageError>;
}
