use anyhow::Result;
use std::time::Duration;
use zenlog_core::{
    EntryAnnotation, EntryStatus, LocalEntry, OwnerContext, POLL_INTERVAL_SECS, now, split_tags,
};
use zenlog_http::EntryResponse;

use super::{journal_client, local_journal_file, owner, session_selector};
use crate::client::{JournalClient, PollOutcome, poll_until_annotated};

pub(crate) async fn run(
    text: String,
    owner_id: Option<String>,
    wait: bool,
    max_wait: u64,
) -> Result<()> {
    let client = journal_client()?;
    match client.aizuchi(&text).await {
        Ok(ack) => println!("{ack}"),
        Err(e) => tracing::debug!(error = %e, "No acknowledgement"),
    }

    match owner_id {
        Some(owner_id) => {
            let ctx = owner(&owner_id)?;
            write_to_thought(&client, &ctx, &text, wait, Duration::from_secs(max_wait)).await
        },
        None => write_locally(&client, &text).await,
    }
}

pub(crate) fn format_tags(tags: &str) -> String {
    split_tags(tags).iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ")
}

fn print_outputs(response: &EntryResponse) {
    let outputs = &response.outputs;
    println!();
    println!("Summary:    {}", outputs.summary);
    println!("Analysis:   {}", outputs.analysis);
    println!("Tags:       {}", format_tags(&outputs.tags));
    println!("Suggestion: {}", outputs.suggestion);
}

fn print_annotation(annotation: &EntryAnnotation) {
    if !annotation.inner_thought.is_empty() {
        println!("Inner thought: {}", annotation.inner_thought);
    }
    if !annotation.tags.is_empty() {
        println!("Tags: {}", format_tags(&annotation.tags));
    }
}

async fn write_to_thought(
    client: &JournalClient,
    ctx: &OwnerContext,
    text: &str,
    wait: bool,
    max_wait: Duration,
) -> Result<()> {
    let selector = session_selector();
    let session_id = selector.current_or_create(client, ctx).await?;
    let response = client.submit_entry(ctx, &session_id, text).await?;
    print_outputs(&response);

    if !wait {
        return Ok(());
    }

    let interrupted = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let outcome = poll_until_annotated(
        || client.entries(ctx, &session_id),
        Duration::from_secs(POLL_INTERVAL_SECS),
        max_wait,
        interrupted,
    )
    .await;

    println!();
    match outcome {
        PollOutcome::Settled(views) => match views.last() {
            Some(view) if view.status == EntryStatus::Complete => {
                if let Some(thought) = &view.entry.inner_thought {
                    println!("Inner thought: {thought}");
                }
            },
            _ => println!("No inner thought for this entry."),
        },
        PollOutcome::Cancelled => println!("Stopped waiting. Run `zenlog history` to check later."),
        PollOutcome::TimedOut => println!("Still reflecting. Run `zenlog history` to check later."),
    }
    Ok(())
}

async fn write_locally(client: &JournalClient, text: &str) -> Result<()> {
    let annotation = match client.chat_thought(text).await {
        Ok(annotation) => Some(annotation),
        Err(e) => {
            tracing::warn!(error = %e, "Could not reach the server, saving without reflection");
            None
        },
    };
    if let Some(annotation) = &annotation {
        println!();
        print_annotation(annotation);
    }

    let journal = local_journal_file().append(LocalEntry::new(text.to_owned(), annotation, now()))?;
    tracing::debug!(entries = journal.len(), "Local journal updated");
    Ok(())
}
