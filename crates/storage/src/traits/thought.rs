use async_trait::async_trait;
use chrono::{DateTime, Utc};
use zenlog_core::Thought;

use crate::error::StorageError;

/// Thought (session) lifecycle operations.
#[async_trait]
pub trait ThoughtStore: Send + Sync {
    /// Insert a new thought.
    async fn save_thought(&self, thought: &Thought) -> Result<(), StorageError>;

    /// Get thought by ID.
    async fn get_thought(&self, id: &str) -> Result<Option<Thought>, StorageError>;

    /// Thoughts of one owner, most recently active first.
    async fn list_thoughts(&self, owner_id: &str, limit: usize)
    -> Result<Vec<Thought>, StorageError>;

    /// Bump `updated_at`. Returns `true` if a row was updated.
    async fn touch_thought(&self, id: &str, now: DateTime<Utc>) -> Result<bool, StorageError>;
}
