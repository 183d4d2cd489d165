use std::sync::Arc;

use zenlog_core::{Insight, LocalEntry, OwnerContext, now};
use zenlog_llm::LlmClient;
use zenlog_storage::{EntryStore, InsightStore, JournalStore};

use crate::ServiceError;
use crate::thought_service::owned_thought;

pub struct InsightService {
    store: Arc<dyn JournalStore>,
    llm: Arc<LlmClient>,
}

impl InsightService {
    #[must_use]
    pub fn new(store: Arc<dyn JournalStore>, llm: Arc<LlmClient>) -> Self {
        Self { store, llm }
    }

    /// Reflect on every entry of a thought and keep the result in its history.
    pub async fn session_insight(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Insight, ServiceError> {
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
        let texts: Vec<String> = self
            .store
            .get_session_entries(&thought.id)
            .await?
            .into_iter()
            .map(|e| e.text)
            .collect();
        if texts.is_empty() {
            return Err(ServiceError::NotFound(format!("entries of thought {}", thought.id)));
        }

        let text = self.llm.generate_insight(&texts).await?;
        let insight = Insight::new(thought.id, ctx.owner_id().to_owned(), text, now());
        self.store.save_insight(&insight).await?;
        tracing::info!(insight_id = %insight.id, "Insight saved");
        Ok(insight)
    }

    /// Reflect on entries held by the client. Nothing is stored.
    pub async fn local_insight(&self, entries: &[LocalEntry]) -> Result<String, ServiceError> {
        if entries.is_empty() {
            return Err(ServiceError::NotFound("local entries".to_owned()));
        }
        let mut ordered: Vec<&LocalEntry> = entries.iter().collect();
        ordered.sort_by_key(|e| e.created_at);
        let texts: Vec<&str> = ordered.iter().map(|e| e.text.as_str()).collect();
        Ok(self.llm.generate_insight(&texts).await?)
    }
}
