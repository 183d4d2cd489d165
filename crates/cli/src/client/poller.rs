//! Re-fetch a thought's entries until its newest entry has an inner thought.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use zenlog_core::{Entry, EntryView, awaiting_annotation};

#[derive(Debug)]
pub(crate) enum PollOutcome {
    /// The newest entry is annotated (or there are no entries).
    Settled(Vec<EntryView>),
    Cancelled,
    TimedOut,
}

/// Poll `fetch` every `every` until the newest entry is annotated, `cancel`
/// resolves, or `max_wait` elapses. Fetch errors are logged and retried on
/// the next tick.
pub(crate) async fn poll_until_annotated<F, Fut, C>(
    mut fetch: F,
    every: Duration,
    max_wait: Duration,
    cancel: C,
) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Vec<EntryView>>>,
    C: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let deadline = tokio::time::sleep(max_wait);
    tokio::pin!(deadline);
    tokio::pin!(cancel);

    loop {
        tokio::select! {
            () = &mut cancel => return PollOutcome::Cancelled,
            () = &mut deadline => return PollOutcome::TimedOut,
            _ = interval.tick() => {
                match fetch().await {
                    Ok(views) => {
                        let entries: Vec<Entry> = views.iter().map(|v| v.entry.clone()).collect();
                        if !awaiting_annotation(&entries) {
                            return PollOutcome::Settled(views);
                        }
                    },
                    Err(e) => tracing::warn!(error = %e, "Polling entries failed"),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use zenlog_core::{EntryStatus, classify_entries, now};

    fn views(annotated: bool) -> Vec<EntryView> {
        let mut entry =
            Entry::new(Some("t".to_owned()), Some("o".to_owned()), "hi".to_owned(), now());
        if annotated {
            entry.inner_thought = Some("calm".to_owned());
        }
        classify_entries(vec![entry])
    }

    #[tokio::test]
    async fn test_stops_once_annotated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let outcome = poll_until_annotated(
            move || {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                async move { Ok(views(n >= 2)) }
            },
            Duration::from_millis(5),
            Duration::from_secs(5),
            std::future::pending(),
        )
        .await;

        match outcome {
            PollOutcome::Settled(v) => assert_eq!(v[0].status, EntryStatus::Complete),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cancellation_stops_polling() {
        let outcome = poll_until_annotated(
            || async { Ok(views(false)) },
            Duration::from_millis(5),
            Duration::from_secs(5),
            tokio::time::sleep(Duration::from_millis(30)),
        )
        .await;
        assert!(matches!(outcome, PollOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_gives_up_after_max_wait() {
        let outcome = poll_until_annotated(
            || async { Err::<Vec<EntryView>, _>(anyhow::anyhow!("server down")) },
            Duration::from_millis(5),
            Duration::from_millis(30),
            std::future::pending(),
        )
        .await;
        assert!(matches!(outcome, PollOutcome::TimedOut));
    }
}
