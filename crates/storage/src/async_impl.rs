//! Async trait implementations for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use zenlog_core::{AiOutputVersion, Entry, EntryAnnotation, Insight, Thought};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{AiOutputStore, EntryStore, InsightStore, ThoughtStore};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── ThoughtStore ─────────────────────────────────────────────────

#[async_trait]
impl ThoughtStore for Storage {
    async fn save_thought(&self, thought: &Thought) -> Result<(), StorageError> {
        delegate!(self, save_thought, @ref thought)
    }
    async fn get_thought(&self, id: &str) -> Result<Option<Thought>, StorageError> {
        delegate!(self, get_thought, @str id)
    }
    async fn list_thoughts(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<Thought>, StorageError> {
        delegate!(self, list_thoughts, @str owner_id, @val limit)
    }
    async fn touch_thought(&self, id: &str, now: DateTime<Utc>) -> Result<bool, StorageError> {
        delegate!(self, touch_thought, @str id, @val now)
    }
}

// ── EntryStore ───────────────────────────────────────────────────

#[async_trait]
impl EntryStore for Storage {
    async fn append_entry(&self, entry: &Entry) -> Result<(), StorageError> {
        delegate!(self, append_entry, @ref entry)
    }
    async fn get_entry(&self, id: &str) -> Result<Option<Entry>, StorageError> {
        delegate!(self, get_entry, @str id)
    }
    async fn get_session_entries(&self, session_id: &str) -> Result<Vec<Entry>, StorageError> {
        delegate!(self, get_session_entries, @str session_id)
    }
    async fn recent_entry_texts(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, StorageError> {
        delegate!(self, recent_entry_texts, @str session_id, @val limit)
    }
    async fn annotate_entry(
        &self,
        id: &str,
        annotation: &EntryAnnotation,
    ) -> Result<bool, StorageError> {
        delegate!(self, annotate_entry, @str id, @ref annotation)
    }
}

// ── InsightStore ─────────────────────────────────────────────────

#[async_trait]
impl InsightStore for Storage {
    async fn save_insight(&self, insight: &Insight) -> Result<(), StorageError> {
        delegate!(self, save_insight, @ref insight)
    }
    async fn get_session_insights(&self, session_id: &str) -> Result<Vec<Insight>, StorageError> {
        delegate!(self, get_session_insights, @str session_id)
    }
}

// ── AiOutputStore ────────────────────────────────────────────────

#[async_trait]
impl AiOutputStore for Storage {
    async fn insert_ai_output(&self, version: &AiOutputVersion) -> Result<(), StorageError> {
        delegate!(self, insert_ai_output, @ref version)
    }
    async fn latest_ai_output(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Option<AiOutputVersion>, StorageError> {
        delegate!(self, latest_ai_output, @str session_id, @str owner_id)
    }
    async fn list_ai_outputs(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Vec<AiOutputVersion>, StorageError> {
        delegate!(self, list_ai_outputs, @str session_id, @str owner_id)
    }
}
