use super::*;
use chrono::Duration;
use zenlog_core::{Entry, EntryAnnotation, EntryStatus, Insight, TimelineItem};
use zenlog_storage::{EntryStore, InsightStore};

async fn seed_entry(
    h: &Harness,
    session_id: &str,
    text: &str,
    at: chrono::DateTime<chrono::Utc>,
) -> Entry {
    let entry =
        Entry::new(Some(session_id.to_owned()), Some("alice".to_owned()), text.to_owned(), at);
    h.store.append_entry(&entry).await.unwrap();
    entry
}

#[tokio::test]
async fn test_only_newest_incomplete_entry_is_pending() {
    let h = harness().await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();
    let base = thought.created_at;
    let done = seed_entry(&h, &thought.id, "done", base + Duration::seconds(1)).await;
    seed_entry(&h, &thought.id, "dropped", base + Duration::seconds(2)).await;
    seed_entry(&h, &thought.id, "waiting", base + Duration::seconds(3)).await;
    let annotation = EntryAnnotation {
        inner_thought: "settled".to_owned(),
        summary: "ok".to_owned(),
        tags: "calm".to_owned(),
    };
    assert!(h.store.annotate_entry(&done.id, &annotation).await.unwrap());

    let statuses: Vec<EntryStatus> =
        h.history.entries(&ctx, &thought.id).await.unwrap().iter().map(|v| v.status).collect();
    assert_eq!(statuses, vec![EntryStatus::Complete, EntryStatus::Failed, EntryStatus::Pending]);
}

#[tokio::test]
async fn test_timeline_interleaves_insights() {
    let h = harness().await;
    let ctx = owner("alice");
    let thought = h.thoughts.create_thought(&ctx, None).await.unwrap();
    let base = thought.created_at;
    seed_entry(&h, &thought.id, "one", base + Duration::seconds(1)).await;
    seed_entry(&h, &thought.id, "two", base + Duration::seconds(3)).await;
    let insight = Insight::new(
        thought.id.clone(),
        "alice".to_owned(),
        "between".to_owned(),
        base + Duration::seconds(2),
    );
    h.store.save_insight(&insight).await.unwrap();

    let timeline = h.history.timeline(&ctx, &thought.id).await.unwrap();
    let kinds: Vec<&str> = timeline
        .iter()
        .map(|item| match item {
            TimelineItem::Chat(_) => "chat",
            TimelineItem::Insight(_) => "insight",
        })
        .collect();
    assert_eq!(kinds, vec!["chat", "insight", "chat"]);
}

#[tokio::test]
async fn test_history_is_owner_scoped() {
    let h = harness().await;
    let thought = h.thoughts.create_thought(&owner("alice"), None).await.unwrap();
    let bob = owner("bob");

    assert!(h.history.entries(&bob, &thought.id).await.unwrap_err().is_not_found());
    assert!(h.history.timeline(&bob, &thought.id).await.unwrap_err().is_not_found());
    assert!(h.history.all_outputs(&bob, &thought.id).await.unwrap_err().is_not_found());
    assert!(h.thoughts.get_thought(&bob, &thought.id).await.unwrap_err().is_not_found());
}
