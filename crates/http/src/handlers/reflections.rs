use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use zenlog_core::EntryAnnotation;
use zenlog_llm::AIZUCHI_ON_ERROR;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{
    AizuchiRequest, ChatThoughtRequest, InsightRequest, owner_context, required,
};
use crate::response_types::{AizuchiResponse, InsightResponse};

/// Inner thought of one message. Generation failures answer with empty fields.
pub async fn chat_thought(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatThoughtRequest>,
) -> Result<Json<EntryAnnotation>, ApiError> {
    let message = required(req.message.as_deref(), "message")?;
    // Without both a session and an owner the thought is generated unconditioned.
    let session = req
        .session_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .and_then(|session_id| {
            owner_context(req.owner_id.as_deref()).ok().map(|ctx| (ctx, session_id))
        });

    let result = state
        .journal_service
        .chat_thought(message, session.as_ref().map(|(ctx, id)| (ctx, *id)))
        .await;
    match result {
        Ok(annotation) => Ok(Json(annotation)),
        Err(e) if e.is_invalid_input() => Err(e.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Chat thought failed, answering with empty fields");
            Ok(Json(EntryAnnotation::default()))
        },
    }
}

/// Session-scoped insights are stored; local ones are not.
pub async fn insight(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InsightRequest>,
) -> Result<Json<InsightResponse>, ApiError> {
    let text = match req.session_id.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(session_id) => {
            let ctx = owner_context(req.owner_id.as_deref())?;
            state.insight_service.session_insight(&ctx, session_id).await?.text
        },
        None => {
            let entries = req.local_entries.unwrap_or_default();
            state.insight_service.local_insight(&entries).await?
        },
    };
    Ok(Json(InsightResponse { insight: text }))
}

pub async fn aizuchi(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AizuchiRequest>,
) -> Result<(StatusCode, Json<AizuchiResponse>), ApiError> {
    let message = required(req.message.as_deref(), "message")?;
    match state.journal_service.aizuchi(message).await {
        Ok(aizuchi) => Ok((StatusCode::OK, Json(AizuchiResponse { aizuchi }))),
        Err(e) => {
            tracing::warn!(error = %e, "Aizuchi generation failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AizuchiResponse { aizuchi: AIZUCHI_ON_ERROR.to_owned() }),
            ))
        },
    }
}
