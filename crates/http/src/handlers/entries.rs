use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CreateEntryRequest, owner_context, required};
use crate::response_types::EntryResponse;

pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<Json<EntryResponse>, ApiError> {
    let session_id = required(req.session_id.as_deref(), "sessionId")?;
    let text = required(req.text.as_deref(), "text")?;
    let ctx = owner_context(req.owner_id.as_deref())?;

    let submitted = state.journal_service.submit_entry(&ctx, session_id, text).await?;
    Ok(Json(submitted.into()))
}
