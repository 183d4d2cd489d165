use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use zenlog_core::{AiOutputVersion, EntryView, Thought, TimelineItem};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CreateThoughtRequest, OwnerQuery, owner_context};

pub async fn create_thought(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThoughtRequest>,
) -> Result<Json<Thought>, ApiError> {
    let ctx = owner_context(req.owner_id.as_deref())?;
    let thought = state.thought_service.create_thought(&ctx, req.title).await?;
    Ok(Json(thought))
}

pub async fn list_thoughts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<Thought>>, ApiError> {
    let ctx = owner_context(query.owner_id.as_deref())?;
    let thoughts = state.thought_service.list_thoughts(&ctx, query.capped_limit()).await?;
    Ok(Json(thoughts))
}

pub async fn thought_entries(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    let ctx = owner_context(query.owner_id.as_deref())?;
    Ok(Json(state.history_service.entries(&ctx, &id).await?))
}

pub async fn thought_timeline(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<TimelineItem>>, ApiError> {
    let ctx = owner_context(query.owner_id.as_deref())?;
    Ok(Json(state.history_service.timeline(&ctx, &id).await?))
}

pub async fn thought_outputs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<AiOutputVersion>>, ApiError> {
    let ctx = owner_context(query.owner_id.as_deref())?;
    Ok(Json(state.history_service.all_outputs(&ctx, &id).await?))
}

pub async fn latest_outputs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<AiOutputVersion>, ApiError> {
    let ctx = owner_context(query.owner_id.as_deref())?;
    Ok(Json(state.history_service.latest_outputs(&ctx, &id).await?))
}
