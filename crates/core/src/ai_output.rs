use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four outputs produced for a thought on every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Summary,
    Analysis,
    Tags,
    Suggestion,
}

impl OutputKind {
    /// Every kind, in the order prompts are issued.
    pub const ALL: [Self; 4] = [Self::Summary, Self::Analysis, Self::Tags, Self::Suggestion];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Analysis => "analysis",
            Self::Tags => "tags",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One model completion, labelled with the prompt kind it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOutput {
    #[serde(rename = "type")]
    pub kind: OutputKind,
    pub content: String,
}

/// The four generated fields of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOutputs {
    pub summary: String,
    pub tags: String,
    pub analysis: String,
    pub suggestion: String,
}

impl AiOutputs {
    /// Map labelled completions onto named fields. A kind that is absent stays empty.
    #[must_use]
    pub fn from_generated(outputs: Vec<GeneratedOutput>) -> Self {
        let mut result = Self::default();
        for GeneratedOutput { kind, content } in outputs {
            let slot = match kind {
                OutputKind::Summary => &mut result.summary,
                OutputKind::Analysis => &mut result.analysis,
                OutputKind::Tags => &mut result.tags,
                OutputKind::Suggestion => &mut result.suggestion,
            };
            *slot = content;
        }
        result
    }

    #[must_use]
    pub fn get(&self, kind: OutputKind) -> &str {
        match kind {
            OutputKind::Summary => &self.summary,
            OutputKind::Analysis => &self.analysis,
            OutputKind::Tags => &self.tags,
            OutputKind::Suggestion => &self.suggestion,
        }
    }

    /// Whether every field carries text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        OutputKind::ALL.iter().all(|k| !self.get(*k).trim().is_empty())
    }
}

/// One persisted aggregation run for a thought. Rows are only ever inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOutputVersion {
    pub id: String,
    pub session_id: String,
    pub owner_id: String,
    #[serde(flatten)]
    pub outputs: AiOutputs,
    pub created_at: DateTime<Utc>,
}

impl AiOutputVersion {
    #[must_use]
    pub fn new(
        session_id: String,
        owner_id: String,
        outputs: AiOutputs,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_id,
            owner_id,
            outputs,
            created_at: now,
        }
    }
}

/// Split a comma separated tag string into trimmed, non-empty tags.
#[must_use]
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split([',', '、'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
