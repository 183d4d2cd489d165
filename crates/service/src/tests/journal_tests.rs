use super::*;
use zenlog_core::{EntryStatus, now};
use zenlog_storage::EntryStore;

#[tokio::test]
async fn test_submit_generates_and_persists_outputs() {
    let h = harness().await;
    mount_all_ok(&h.server).await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();

    let submitted = h.journal.submit_entry(&ctx, &thought.id, "I feel overwhelmed").await.unwrap();
    let finished = now();

    assert_eq!(submitted.entry.text, "I feel overwhelmed");
    assert!(submitted.entry.created_at <= finished);
    assert!(submitted.outputs.is_complete());
    assert_eq!(submitted.outputs.tags, "stress, fatigue");

    let entries = h.store.get_session_entries(&thought.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "I feel overwhelmed");

    let latest = h.history.latest_outputs(&ctx, &thought.id).await.unwrap();
    assert_eq!(latest.outputs, submitted.outputs);
}

#[tokio::test]
async fn test_background_annotation_completes_entry() {
    let h = harness().await;
    mount_all_ok(&h.server).await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();
    let submitted = h.journal.submit_entry(&ctx, &thought.id, "long day").await.unwrap();

    let done = wait_until(|| async {
        let stored = h.store.get_entry(&submitted.entry.id).await.ok().flatten();
        stored.is_some_and(|e| e.is_annotated())
    })
    .await;
    assert!(done);

    let views = h.history.entries(&ctx, &thought.id).await.unwrap();
    assert_eq!(views[0].status, EntryStatus::Complete);
    assert_eq!(views[0].entry.inner_thought.as_deref(), Some("You are stretched thin."));
    assert_eq!(views[0].entry.tags.as_deref(), Some("stress"));
}

#[tokio::test]
async fn test_rate_limit_on_one_prompt_persists_no_outputs() {
    let h = harness().await;
    mount(&h.server, "Summarize", completion("A heavy day.")).await;
    mount(&h.server, "emotions", completion("Pressure.")).await;
    mount(&h.server, "short tags", ResponseTemplate::new(429).set_body_string("slow down")).await;
    mount(&h.server, "Zen monk", completion("Rest.")).await;
    mount_inner_thought(&h.server).await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();

    let err = h.journal.submit_entry(&ctx, &thought.id, "too much").await.unwrap_err();
    assert!(err.is_rate_limited());

    assert_eq!(h.store.get_session_entries(&thought.id).await.unwrap().len(), 1);
    assert!(h.history.all_outputs(&ctx, &thought.id).await.unwrap().is_empty());
    assert!(h.history.latest_outputs(&ctx, &thought.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_each_submission_appends_a_version() {
    let h = harness().await;
    mount_all_ok(&h.server).await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();

    h.journal.submit_entry(&ctx, &thought.id, "first").await.unwrap();
    let first = h.history.latest_outputs(&ctx, &thought.id).await.unwrap();
    h.journal.submit_entry(&ctx, &thought.id, "second").await.unwrap();

    let versions = h.history.all_outputs(&ctx, &thought.id).await.unwrap();
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[1], first);
    assert_ne!(versions[0].id, first.id);
}

#[tokio::test]
async fn test_blank_text_is_rejected_before_any_call() {
    let h = harness().await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();

    let err = h.journal.submit_entry(&ctx, &thought.id, "   ").await.unwrap_err();
    assert!(err.is_invalid_input());
    assert!(h.store.get_session_entries(&thought.id).await.unwrap().is_empty());
    assert!(h.server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_other_owners_thought_is_not_found() {
    let h = harness().await;
    let thought = h.thoughts.create_thought(&owner("alice"), None).await.unwrap();

    let err = h.journal.submit_entry(&owner("bob"), &thought.id, "hello").await.unwrap_err();
    assert!(err.is_not_found());
    let err = h.journal.submit_entry(&owner("bob"), "missing", "hello").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(h.store.get_session_entries(&thought.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_thought_uses_session_history() {
    let h = harness().await;
    mount_all_ok(&h.server).await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();
    h.journal.submit_entry(&ctx, &thought.id, "slept badly").await.unwrap();

    let annotation =
        h.journal.chat_thought("still tired", Some((&ctx, &thought.id))).await.unwrap();
    assert_eq!(annotation.inner_thought, "You are stretched thin.");
    assert!(requests_containing(&h.server, "[1] slept badly").await >= 1);
}

#[tokio::test]
async fn test_chat_thought_without_session() {
    let h = harness().await;
    mount_inner_thought(&h.server).await;

    let annotation = h.journal.chat_thought("hello", None).await.unwrap();
    assert_eq!(annotation.summary, "Overwhelmed.");
    assert!(h.journal.chat_thought("", None).await.unwrap_err().is_invalid_input());
}

#[tokio::test]
async fn test_aizuchi() {
    let h = harness().await;
    mount(&h.server, "gentle listener", completion("I see.")).await;

    assert_eq!(h.journal.aizuchi("rough day").await.unwrap(), "I see.");
}

#[tokio::test]
async fn test_thoughts_listed_by_activity() {
    let h = harness().await;
    mount_all_ok(&h.server).await;
    let ctx = owner("alice");
    let older = h.thoughts.create_thought(&ctx, Some("older".to_owned())).await.unwrap();
    let newer = h.thoughts.create_thought(&ctx, Some("  ".to_owned())).await.unwrap();
    assert!(newer.title.starts_with("Reflections of "));

    h.journal.submit_entry(&ctx, &older.id, "bump").await.unwrap();
    let listed = h.thoughts.list_thoughts(&ctx, 10).await.unwrap();
    let ids: Vec<&str> = listed.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![older.id.as_str(), newer.id.as_str()]);
    assert!(h.thoughts.list_thoughts(&owner("bob"), 10).await.unwrap().is_empty());
}
