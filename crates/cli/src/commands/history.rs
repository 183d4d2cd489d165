use anyhow::{Result, bail};
use zenlog_core::TimelineItem;

use super::write::format_tags;
use super::{journal_client, local_journal_file, owner, session_selector};

pub(crate) async fn run(owner_id: Option<String>, session: Option<String>) -> Result<()> {
    let Some(owner_id) = owner_id else {
        show_local();
        return Ok(());
    };
    let ctx = owner(&owner_id)?;
    let Some(session_id) = session.or_else(|| session_selector().current(&ctx)) else {
        bail!("no current conversation; write something first or pass --session");
    };

    let timeline = journal_client()?.timeline(&ctx, &session_id).await?;
    if timeline.is_empty() {
        println!("Nothing written yet.");
    }
    for item in &timeline {
        let at = item.created_at().format("%Y-%m-%d %H:%M");
        match item {
            TimelineItem::Chat(entry) => {
                println!("[{at}] {}", entry.text);
                if let Some(thought) = entry.inner_thought.as_deref().filter(|t| !t.is_empty()) {
                    println!("    ~ {thought}");
                }
            },
            TimelineItem::Insight(insight) => println!("[{at}] * {}", insight.text),
        }
    }
    Ok(())
}

fn show_local() {
    let journal = local_journal_file().load();
    if journal.is_empty() {
        println!("Local journal is empty.");
        return;
    }
    let mut entries: Vec<_> = journal.iter().collect();
    entries.reverse();
    for entry in entries {
        println!("[{}] {}", entry.created_at.format("%Y-%m-%d %H:%M"), entry.text);
        if let Some(thought) = entry.inner_thought.as_deref().filter(|t| !t.is_empty()) {
            println!("    ~ {thought}");
        }
        if let Some(tags) = entry.tags.as_deref().filter(|t| !t.is_empty()) {
            println!("    {}", format_tags(tags));
        }
    }
}
