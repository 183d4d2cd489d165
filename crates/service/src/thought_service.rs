use std::sync::Arc;

use zenlog_core::{MAX_QUERY_LIMIT, OwnerContext, Thought, now};
use zenlog_storage::{JournalStore, ThoughtStore};

use crate::ServiceError;

/// Load a thought and check it belongs to `ctx`.
///
/// A thought of another owner is reported exactly like a missing one.
pub(crate) async fn owned_thought(
    store: &dyn JournalStore,
    ctx: &OwnerContext,
    session_id: &str,
) -> Result<Thought, ServiceError> {
    match store.get_thought(session_id).await? {
        Some(thought) if ctx.owns(&thought.owner_id) => Ok(thought),
        _ => Err(ServiceError::NotFound(format!("thought {session_id}"))),
    }
}

pub struct ThoughtService {
    store: Arc<dyn JournalStore>,
}

impl ThoughtService {
    #[must_use]
    pub fn new(store: Arc<dyn JournalStore>) -> Self {
        Self { store }
    }

    /// Start a new thought. A blank title gets the date-based default.
    pub async fn create_thought(
        &self,
        ctx: &OwnerContext,
        title: Option<String>,
    ) -> Result<Thought, ServiceError> {
        let title = title.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        let thought = Thought::new(ctx.owner_id().to_owned(), title, now());
        self.store.save_thought(&thought).await?;
        tracing::info!(thought_id = %thought.id, "Created thought");
        Ok(thought)
    }

    /// Most recently active thoughts of the caller.
    pub async fn list_thoughts(
        &self,
        ctx: &OwnerContext,
        limit: usize,
    ) -> Result<Vec<Thought>, ServiceError> {
        let limit = limit.clamp(1, MAX_QUERY_LIMIT);
        Ok(self.store.list_thoughts(ctx.owner_id(), limit).await?)
    }

    pub async fn get_thought(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Thought, ServiceError> {
        owned_thought(self.store.as_ref(), ctx, session_id).await
    }
}
