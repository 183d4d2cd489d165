//! Merged chat/insight history of a thought.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entry, Insight};

/// One row of the displayed history, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimelineItem {
    Chat(Entry),
    Insight(Insight),
}

impl TimelineItem {
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Chat(entry) => entry.created_at,
            Self::Insight(insight) => insight.created_at,
        }
    }
}

/// Merge entries and insights, each already ascending by `created_at`,
/// into one ascending list. On equal timestamps the entry comes first.
#[must_use]
pub fn merge_timeline(entries: Vec<Entry>, insights: Vec<Insight>) -> Vec<TimelineItem> {
    let mut merged = Vec::with_capacity(entries.len().saturating_add(insights.len()));
    let mut entries = entries.into_iter().peekable();
    let mut insights = insights.into_iter().peekable();

    loop {
        let take_entry = match (entries.peek(), insights.peek()) {
            (Some(e), Some(i)) => e.created_at <= i.created_at,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let item = if take_entry {
            entries.next().map(TimelineItem::Chat)
        } else {
            insights.next().map(TimelineItem::Insight)
        };
        merged.extend(item);
    }

    merged
}
