//! Request/query types (Deserialize)
//!
//! Required fields are `Option` so a missing one is reported as 400 by the
//! handler instead of a body rejection.

use serde::Deserialize;
use zenlog_core::{DEFAULT_QUERY_LIMIT, LocalEntry, MAX_QUERY_LIMIT, OwnerContext};

use crate::api_error::ApiError;

const fn default_limit() -> usize {
    DEFAULT_QUERY_LIMIT
}

/// Caller identity from a request field.
pub(crate) fn owner_context(owner_id: Option<&str>) -> Result<OwnerContext, ApiError> {
    OwnerContext::new(owner_id.unwrap_or_default())
        .map_err(|_| ApiError::BadRequest("ownerId is required".to_owned()))
}

pub(crate) fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub session_id: Option<String>,
    pub owner_id: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThoughtRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub session_id: Option<String>,
    pub owner_id: Option<String>,
    pub local_entries: Option<Vec<LocalEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AizuchiRequest {
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThoughtRequest {
    pub owner_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub owner_id: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl OwnerQuery {
    /// Cap limit to prevent unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_QUERY_LIMIT)
    }
}
