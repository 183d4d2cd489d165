use async_trait::async_trait;
use zenlog_core::Insight;

use crate::error::StorageError;

/// Insight operations. Insights are never updated.
#[async_trait]
pub trait InsightStore: Send + Sync {
    async fn save_insight(&self, insight: &Insight) -> Result<(), StorageError>;

    /// All insights of a thought, oldest first.
    async fn get_session_insights(&self, session_id: &str) -> Result<Vec<Insight>, StorageError>;
}
