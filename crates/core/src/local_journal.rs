//! Bounded journal kept on the client when no account is used.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EntryAnnotation, LOCAL_JOURNAL_CAPACITY, Result};

/// An entry without any backend identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEntry {
    pub text: String,
    #[serde(default)]
    pub inner_thought: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LocalEntry {
    #[must_use]
    pub fn new(text: String, annotation: Option<EntryAnnotation>, now: DateTime<Utc>) -> Self {
        let (inner_thought, summary, tags) = match annotation {
            Some(a) => (Some(a.inner_thought), Some(a.summary), Some(a.tags)),
            None => (None, None, None),
        };
        Self { text, inner_thought, summary, tags, created_at: now }
    }
}

/// Newest-first list capped at [`LOCAL_JOURNAL_CAPACITY`] items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalJournal {
    items: VecDeque<LocalEntry>,
}

impl LocalJournal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored journal, dropping anything past capacity.
    ///
    /// # Errors
    /// Returns `CoreError::Serialization` if `json` is not a list of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut journal: Self = serde_json::from_str(json)?;
        journal.items.truncate(LOCAL_JOURNAL_CAPACITY);
        Ok(journal)
    }

    /// # Errors
    /// Returns `CoreError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Record a new entry at the front, evicting the oldest beyond capacity.
    pub fn push(&mut self, entry: LocalEntry) {
        self.items.push_front(entry);
        self.items.truncate(LOCAL_JOURNAL_CAPACITY);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LocalEntry> {
        self.items.iter()
    }
}
