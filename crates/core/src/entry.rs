use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user-submitted text record, optionally paired with generated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub session_id: Option<String>,
    pub author_id: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub inner_thought: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<String>,
}

impl Entry {
    /// New un-annotated entry with a fresh id.
    #[must_use]
    pub fn new(
        session_id: Option<String>,
        author_id: Option<String>,
        text: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id,
            author_id,
            text,
            created_at: now,
            inner_thought: None,
            summary: None,
            tags: None,
        }
    }

    /// Whether the generated inner thought is present and non-blank.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.inner_thought.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Generated fields attached to an entry after the model has seen it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAnnotation {
    pub inner_thought: String,
    pub summary: String,
    pub tags: String,
}

/// Client-observed generation state of an entry.
///
/// Failure is never stored; it is inferred from an entry being incomplete
/// while a newer entry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Complete,
    Failed,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
            Self::Failed => "failed",
        }
    }
}

/// An entry together with its inferred status, as served for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: Entry,
    pub status: EntryStatus,
}

/// Classify entries of one thought, given in ascending `created_at` order.
///
/// Only the most recent incomplete entry is still pending; any earlier
/// incomplete entry is considered failed.
#[must_use]
pub fn classify_entries(entries: Vec<Entry>) -> Vec<EntryView> {
    let last = entries.len().checked_sub(1);
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let status = if entry.is_annotated() {
                EntryStatus::Complete
            } else if Some(idx) == last {
                EntryStatus::Pending
            } else {
                EntryStatus::Failed
            };
            EntryView { entry, status }
        })
        .collect()
}

/// Whether the client should keep polling: the newest entry is not yet annotated.
#[must_use]
pub fn awaiting_annotation(entries: &[Entry]) -> bool {
    entries.last().is_some_and(|e| !e.is_annotated())
}
