//! HTTP API server for zenlog.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use zenlog_llm::LlmClient;
use zenlog_service::{HistoryService, InsightService, JournalService, ThoughtService};
use zenlog_storage::JournalStore;

pub use query_types::{
    AizuchiRequest, ChatThoughtRequest, CreateEntryRequest, CreateThoughtRequest, InsightRequest,
    OwnerQuery,
};
pub use response_types::{AizuchiResponse, EntryResponse, InsightResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Thought creation and listing
    pub thought_service: Arc<ThoughtService>,
    /// Entry submission, inner thoughts and acknowledgements
    pub journal_service: Arc<JournalService>,
    /// Session and local insights
    pub insight_service: Arc<InsightService>,
    /// Entries with status, timeline and generated outputs
    pub history_service: Arc<HistoryService>,
}

impl AppState {
    /// Wire every service to one store and one model client.
    #[must_use]
    pub fn new(store: Arc<dyn JournalStore>, llm: Arc<LlmClient>) -> Self {
        Self {
            thought_service: Arc::new(ThoughtService::new(Arc::clone(&store))),
            journal_service: Arc::new(JournalService::new(Arc::clone(&store), Arc::clone(&llm))),
            insight_service: Arc::new(InsightService::new(Arc::clone(&store), llm)),
            history_service: Arc::new(HistoryService::new(store)),
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/entries", post(handlers::entries::create_entry))
        .route("/chat-thought", post(handlers::reflections::chat_thought))
        .route("/insight", post(handlers::reflections::insight))
        .route("/aizuchi", post(handlers::reflections::aizuchi))
        .route(
            "/thoughts",
            get(handlers::thoughts::list_thoughts).post(handlers::thoughts::create_thought),
        )
        .route("/thoughts/{id}/entries", get(handlers::thoughts::thought_entries))
        .route("/thoughts/{id}/timeline", get(handlers::thoughts::thought_timeline))
        .route("/thoughts/{id}/ai-outputs", get(handlers::thoughts::thought_outputs))
        .route("/thoughts/{id}/ai-outputs/latest", get(handlers::thoughts::latest_outputs))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
