use anyhow::Result;

use super::{journal_client, owner, session_selector};

pub(crate) async fn run_list(owner_id: String, limit: usize) -> Result<()> {
    let ctx = owner(&owner_id)?;
    let current = session_selector().current(&ctx);
    let thoughts = journal_client()?.list_thoughts(&ctx, limit).await?;
    if thoughts.is_empty() {
        println!("No conversations yet.");
    }
    for thought in thoughts {
        let marker = if current.as_deref() == Some(thought.id.as_str()) { "*" } else { " " };
        println!(
            "{marker} {}  {}  (updated {})",
            thought.id,
            thought.title,
            thought.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

pub(crate) async fn run_new(owner_id: String, title: Option<String>) -> Result<()> {
    let ctx = owner(&owner_id)?;
    let thought =
        session_selector().start_new(&journal_client()?, &ctx, title.as_deref()).await?;
    println!("Started \"{}\" ({})", thought.title, thought.id);
    Ok(())
}
