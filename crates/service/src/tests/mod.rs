//! Shared fixtures for service tests: a throwaway database and a mock model API.

mod history_tests;
mod journal_tests;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zenlog_core::OwnerContext;
use zenlog_llm::LlmClient;
use zenlog_storage::{JournalStore, Storage};

use crate::{HistoryService, InsightService, JournalService, ThoughtService};

pub struct Harness {
    pub store: Arc<dyn JournalStore>,
    pub thoughts: ThoughtService,
    pub journal: JournalService,
    pub insights: InsightService,
    pub history: HistoryService,
    pub server: MockServer,
    _dir: TempDir,
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(&dir.path().join("test.db")).unwrap();
    let store: Arc<dyn JournalStore> = Arc::new(storage);
    let server = MockServer::start().await;
    let llm = Arc::new(LlmClient::new("test-key".to_owned(), server.uri()).unwrap());
    Harness {
        thoughts: ThoughtService::new(Arc::clone(&store)),
        journal: JournalService::new(Arc::clone(&store), Arc::clone(&llm)).with_history_window(20),
        insights: InsightService::new(Arc::clone(&store), Arc::clone(&llm)),
        history: HistoryService::new(Arc::clone(&store)),
        store,
        server,
        _dir: dir,
    }
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn owner(id: &str) -> OwnerContext {
    OwnerContext::new(id).unwrap()
}

pub fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"message": {"content": content, "role": "assistant"}}]
    }))
}

pub async fn mount(server: &MockServer, marker: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains(marker))
        .respond_with(response)
        .mount(server)
        .await;
}

pub async fn mount_inner_thought(server: &MockServer) {
    mount(
        server,
        "quiet listener",
        completion("Inner thought: You are stretched thin.\nSummary: Overwhelmed.\nTags: stress"),
    )
    .await;
}

/// Every output prompt answered, plus the inner thought annotation.
pub async fn mount_all_ok(server: &MockServer) {
    mount(server, "Summarize", completion("A heavy day.")).await;
    mount(server, "emotions", completion("Pressure from many directions.")).await;
    mount(server, "short tags", completion("stress, fatigue")).await;
    mount(server, "Zen monk", completion("Put one thing down today.")).await;
    mount_inner_thought(server).await;
}

pub async fn requests_containing(server: &MockServer, marker: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| String::from_utf8_lossy(&r.body).contains(marker))
        .count()
}

/// Wait for the detached annotation task to land.
pub async fn wait_until<F, Fut>(mut check: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..100 {
        if check().await {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}
