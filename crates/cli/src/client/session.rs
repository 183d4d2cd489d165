//! Which thought new entries go to.
//!
//! The selection is a small JSON file under the data directory. A thought is
//! created lazily on the first write, and `start_new` begins a fresh one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zenlog_core::{OwnerContext, Thought};

use super::JournalClient;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Selection {
    owner_id: String,
    thought_id: String,
}

#[derive(Debug, Clone)]
pub(crate) struct SessionSelector {
    path: PathBuf,
}

impl SessionSelector {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Current thought of `ctx`, if one was selected for that owner.
    pub(crate) fn current(&self, ctx: &OwnerContext) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Selection>(&raw) {
            Ok(selection) if ctx.owns(&selection.owner_id) => Some(selection.thought_id),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable selection"
                );
                None
            },
        }
    }

    pub(crate) fn select(&self, ctx: &OwnerContext, thought_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let selection =
            Selection { owner_id: ctx.owner_id().to_owned(), thought_id: thought_id.to_owned() };
        std::fs::write(&self.path, serde_json::to_string(&selection)?)
            .with_context(|| format!("writing {}", self.path.display()))
    }

    /// The current thought, creating and selecting one if there is none.
    pub(crate) async fn current_or_create(
        &self,
        client: &JournalClient,
        ctx: &OwnerContext,
    ) -> Result<String> {
        if let Some(id) = self.current(ctx) {
            return Ok(id);
        }
        Ok(self.start_new(client, ctx, None).await?.id)
    }

    pub(crate) async fn start_new(
        &self,
        client: &JournalClient,
        ctx: &OwnerContext,
        title: Option<&str>,
    ) -> Result<Thought> {
        let thought = client.create_thought(ctx, title).await?;
        self.select(ctx, &thought.id)?;
        tracing::debug!(thought_id = %thought.id, "Selected new thought");
        Ok(thought)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn thought_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Reflections of 2024-05-01",
            "ownerId": "alice",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_creates_once_then_reuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/thoughts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(thought_json("t-1")))
            .expect(1)
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();
        let selector = SessionSelector::new(dir.path().join("current.json"));
        let client = JournalClient::new(&server.uri()).unwrap();
        let ctx = OwnerContext::new("alice").unwrap();

        assert_eq!(selector.current_or_create(&client, &ctx).await.unwrap(), "t-1");
        assert_eq!(selector.current_or_create(&client, &ctx).await.unwrap(), "t-1");
    }

    #[tokio::test]
    async fn test_selection_is_per_owner() {
        let dir = TempDir::new().unwrap();
        let selector = SessionSelector::new(dir.path().join("nested").join("current.json"));
        let alice = OwnerContext::new("alice").unwrap();
        let bob = OwnerContext::new("bob").unwrap();

        selector.select(&alice, "t-9").unwrap();
        assert_eq!(selector.current(&alice).as_deref(), Some("t-9"));
        assert_eq!(selector.current(&bob), None);
    }

    #[test]
    fn test_corrupt_selection_is_ignored() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("current.json");
        std::fs::write(&file, "not json").unwrap();
        let selector = SessionSelector::new(file);
        assert_eq!(selector.current(&OwnerContext::new("alice").unwrap()), None);
    }
}
