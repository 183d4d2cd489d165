use async_trait::async_trait;
use zenlog_core::AiOutputVersion;

use crate::error::StorageError;

/// Append-only log of aggregation runs.
#[async_trait]
pub trait AiOutputStore: Send + Sync {
    /// Append one run.
    async fn insert_ai_output(&self, version: &AiOutputVersion) -> Result<(), StorageError>;

    /// Most recent run, if any.
    async fn latest_ai_output(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Option<AiOutputVersion>, StorageError>;

    /// All runs, newest first.
    async fn list_ai_outputs(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Vec<AiOutputVersion>, StorageError>;
}
