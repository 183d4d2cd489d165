//! Response types (Serialize)

use serde::{Deserialize, Serialize};
use zenlog_core::{AiOutputs, Entry};
use zenlog_service::SubmittedEntry;

/// The stored entry plus the four outputs generated for its thought.
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub entry: Entry,
    #[serde(flatten)]
    pub outputs: AiOutputs,
}

impl From<SubmittedEntry> for EntryResponse {
    fn from(submitted: SubmittedEntry) -> Self {
        Self { entry: submitted.entry, outputs: submitted.outputs }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightResponse {
    pub insight: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AizuchiResponse {
    pub aizuchi: String,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
