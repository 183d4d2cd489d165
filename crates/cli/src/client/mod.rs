//! HTTP client side of zenlog: API calls, the current-conversation
//! selection, annotation polling and the local journal file.

mod local_store;
mod poller;
mod session;

pub(crate) use local_store::LocalJournalFile;
pub(crate) use poller::{PollOutcome, poll_until_annotated};
pub(crate) use session::SessionSelector;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use zenlog_core::{EntryAnnotation, EntryView, LocalEntry, OwnerContext, Thought, TimelineItem};
use zenlog_http::{AizuchiResponse, EntryResponse, InsightResponse};

const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Thin typed wrapper over the zenlog HTTP API.
#[derive(Debug, Clone)]
pub(crate) struct JournalClient {
    http: reqwest::Client,
    base_url: String,
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or(body);
    format!("server returned {status}: {detail}")
}

impl JournalClient {
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("building HTTP client")?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {path}"))?;
        if !response.status().is_success() {
            bail!(error_message(response).await);
        }
        response.json().await.with_context(|| format!("decoding response of {path}"))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {path}"))?;
        if !response.status().is_success() {
            bail!(error_message(response).await);
        }
        response.json().await.with_context(|| format!("decoding response of {path}"))
    }

    pub(crate) async fn create_thought(
        &self,
        ctx: &OwnerContext,
        title: Option<&str>,
    ) -> Result<Thought> {
        self.post("/thoughts", &json!({"ownerId": ctx.owner_id(), "title": title})).await
    }

    pub(crate) async fn list_thoughts(
        &self,
        ctx: &OwnerContext,
        limit: usize,
    ) -> Result<Vec<Thought>> {
        let limit = limit.to_string();
        self.get("/thoughts", &[("ownerId", ctx.owner_id()), ("limit", &limit)]).await
    }

    pub(crate) async fn submit_entry(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
        text: &str,
    ) -> Result<EntryResponse> {
        self.post(
            "/entries",
            &json!({"sessionId": session_id, "ownerId": ctx.owner_id(), "text": text}),
        )
        .await
    }

    pub(crate) async fn entries(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Vec<EntryView>> {
        self.get(&format!("/thoughts/{session_id}/entries"), &[("ownerId", ctx.owner_id())]).await
    }

    pub(crate) async fn timeline(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<Vec<TimelineItem>> {
        self.get(&format!("/thoughts/{session_id}/timeline"), &[("ownerId", ctx.owner_id())]).await
    }

    pub(crate) async fn chat_thought(&self, message: &str) -> Result<EntryAnnotation> {
        self.post("/chat-thought", &json!({"message": message})).await
    }

    pub(crate) async fn session_insight(
        &self,
        ctx: &OwnerContext,
        session_id: &str,
    ) -> Result<String> {
        let response: InsightResponse = self
            .post("/insight", &json!({"sessionId": session_id, "ownerId": ctx.owner_id()}))
            .await?;
        Ok(response.insight)
    }

    pub(crate) async fn local_insight(&self, entries: &[LocalEntry]) -> Result<String> {
        let response: InsightResponse =
            self.post("/insight", &json!({"localEntries": entries})).await?;
        Ok(response.insight)
    }

    /// The server answers failures with a 500 that still carries a usable reply.
    pub(crate) async fn aizuchi(&self, message: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/aizuchi", self.base_url))
            .json(&json!({"message": message}))
            .send()
            .await
            .context("POST /aizuchi")?;
        let body: AizuchiResponse = response.json().await.context("decoding aizuchi")?;
        Ok(body.aizuchi)
    }
}
