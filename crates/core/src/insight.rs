use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-requested synthesis across all entries of a thought. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: String,
    pub session_id: String,
    pub owner_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Insight {
    #[must_use]
    pub fn new(session_id: String, owner_id: String, text: String, now: DateTime<Utc>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), session_id, owner_id, text, created_at: now }
    }
}
