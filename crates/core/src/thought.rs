use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named grouping of entries: one continuous journaling conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub id: String,
    pub title: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Thought {
    /// New thought with a fresh id; falls back to the date-derived title.
    #[must_use]
    pub fn new(owner_id: String, title: Option<String>, now: DateTime<Utc>) -> Self {
        let title = title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title(now));
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Title given to a thought created without one, e.g. `Reflections of 2024-03-09`.
#[must_use]
pub fn default_title(now: DateTime<Utc>) -> String {
    format!("Reflections of {}", now.format("%Y-%m-%d"))
}
