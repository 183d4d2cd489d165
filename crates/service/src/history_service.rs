use std::sync::Arc;

use zenlog_core::{
    AiOutputVersion, EntryView, OwnerContext, TimelineItem, classify_entries, merge_timeline,
};
use zenlog_storage::{AiOutputStore, EntryStore, InsightStore, JournalStore};

use crate::ServiceError;
use crate::thought_service::owned_thought;

/// Read side of a thought: entries, merged timeline and generated outputs.
pub struct HistoryService {
    store: Arc<dyn JournalStore>,
}

impl HistoryService {
    #[must_use]
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self { store }
    }

    /// Entries oldest first, each with its inferred completion status.
    pub async fn entries(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Vec<EntryView>, ServiceError> {
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
        let entries = self.store.get_session_entries(&thought.id).await?;
        Ok(classify_entries(entries))
    }

    pub async fn timeline(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Vec<TimelineItem>, ServiceError> {
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
        let (entries, insights) = tokio::try_join!(
            self.store.get_session_entries(&thought.id),
            self.store.get_session_insights(&thought.id),
        )?;
        Ok(merge_timeline(entries, insights))
    }

    pub async fn latest_outputs(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<AiOutputVersion, ServiceError> {
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
        self.store
            .latest_ai_output(&thought.id, ctx.owner_id())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("outputs of thought {}", thought.id)))
    }

    /// Every generated version, newest first.
    pub async fn all_outputs(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Vec<AiOutputVersion>, ServiceError> {
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
        Ok(self.store.list_ai_outputs(&thought.id, ctx.owner_id()).await?)
    }
}
