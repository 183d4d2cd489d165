use anyhow::Result;
use std::sync::Arc;
use zenlog_http::{AppState, create_router};
use zenlog_llm::LlmClient;
use zenlog_storage::{JournalStore, Storage};

use crate::{ensure_db_dir, get_api_key, get_base_url, get_db_path, get_model};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    let store: Arc<dyn JournalStore> = Arc::new(Storage::new(&db_path)?);

    let llm = LlmClient::new(get_api_key()?, get_base_url())?.with_model(get_model());
    tracing::info!(model = %llm.model(), base_url = %llm.base_url(), "LLM client configured");

    let state = Arc::new(AppState::new(store, Arc::new(llm)));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
