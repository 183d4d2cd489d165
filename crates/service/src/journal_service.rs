use std::sync::Arc;

use zenlog_core::{
    AiOutputVersion, AiOutputs, Entry, EntryAnnotation, HISTORY_WINDOW, OwnerContext,
    env_parse_with_default, now,
};
use zenlog_llm::LlmClient;
use zenlog_storage::{AiOutputStore, EntryStore, JournalStore, ThoughtStore};

use crate::ServiceError;
use crate::thought_service::owned_thought;

/// A stored entry together with the outputs generated for its thought.
#[derive(Debug, Clone)]
pub struct SubmittedEntry {
    pub entry: Entry,
    pub outputs: AiOutputs,
}

pub struct JournalService {
    store: Arc<dyn JournalStore>,
    llm: Arc<LlmClient>,
    history_window: usize,
}

fn require_text(text: &str, what: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}

impl JournalService {
    #[must_use]
    pub fn new(store: Arc<dyn JournalStore>, llm: Arc<LlmClient>) -> Self {
        let history_window = env_parse_with_default("ZENLOG_HISTORY_WINDOW", HISTORY_WINDOW).max(1);
        Self { store, llm, history_window }
    }

    #[must_use]
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    /// Append an entry to a thought and regenerate the thought's outputs.
    ///
    /// The entry is persisted first and stays persisted even if generation
    /// fails. The entry's own inner thought is filled in by a detached task.
    pub async fn submit_entry(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
        text: &str,
    ) -> Result<SubmittedEntry, ServiceError> {
        require_text(text, "text")?;
        require_text(session_id, "sessionId")?;
        let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;

        let entry = Entry::new(
            Some(thought.id.clone()),
            Some(ctx.owner_id().to_owned()),
            text.to_owned(),
            now(),
        );
        self.store.append_entry(&entry).await?;
        self.store.touch_thought(&thought.id, entry.created_at).await?;
        tracing::info!(entry_id = %entry.id, thought_id = %thought.id, "Entry saved");

        self.spawn_annotation(entry.clone());

        let texts = self.store.recent_entry_texts(&thought.id, self.history_window).await?;
        let generated = self.llm.generate_outputs(&texts, self.history_window).await?;
        let outputs = AiOutputs::from_generated(generated);

        let version =
            AiOutputVersion::new(thought.id.clone(), ctx.owner_id().to_owned(), outputs, now());
        self.store.insert_ai_output(&version).await?;

        Ok(SubmittedEntry { entry, outputs: version.outputs })
    }

    fn spawn_annotation(&self, entry: Entry) {
        let store = Arc::clone(&self.store);
        let llm = Arc::clone(&self.llm);
        let window = self.history_window;
        tokio::spawn(async move {
            if let Err(e) = annotate(store.as_ref(), &llm, &entry, window).await {
                tracing::warn!(entry_id = %entry.id, error = %e, "Inner thought annotation failed");
            }
        });
    }

    /// Inner thought, summary and tags for a message that is not stored.
    ///
    /// With a session, its latest entries condition the answer.
    pub async fn chat_thought(
        &self,
        message: &str,
        session: Option<(&OwnerContext, &str)>,
    ) -> Result<EntryAnnotation, ServiceError> {
        require_text(message, "message")?;
        let history = match session {
            Some((ctx, session_id)) => {
                let thought = owned_thought(self.store.as_ref(), ctx, session_id).await?;
                self.store.recent_entry_texts(&thought.id, self.history_window).await?
            },
            None => Vec::new(),
        };
        Ok(self.llm.generate_inner_thought(message, &history).await?)
    }

    /// A very short acknowledgement of `message`.
    pub async fn aizuchi(&self, message: &str) -> Result<String, ServiceError> {
        require_text(message, "message")?;
        Ok(self.llm.generate_aizuchi(message).await?)
    }
}

/// Generate and store the inner thought of one entry, conditioned on the
/// entries written before it.
async fn annotate(
    store: &dyn JournalStore,
    llm: &LlmClient,
    entry: &Entry,
    window: usize,
) -> Result<bool, ServiceError> {
    let history: Vec<String> = match entry.session_id.as_deref() {
        Some(session_id) => {
            let earlier: Vec<String> = store
                .get_session_entries(session_id)
                .await?
                .into_iter()
                .filter(|e| e.id != entry.id && e.created_at <= entry.created_at)
                .map(|e| e.text)
                .collect();
            let start = earlier.len().saturating_sub(window);
            earlier.into_iter().skip(start).collect()
        },
        None => Vec::new(),
    };
    let annotation = llm.generate_inner_thought(&entry.text, &history).await?;
    let written = store.annotate_entry(&entry.id, &annotation).await?;
    if !written {
        tracing::debug!(entry_id = %entry.id, "Entry already annotated");
    }
    Ok(written)
}
