use anyhow::{Result, bail};

use super::{journal_client, local_journal_file, owner, session_selector};

pub(crate) async fn run(owner_id: Option<String>) -> Result<()> {
    let client = journal_client()?;
    let insight = match owner_id {
        Some(owner_id) => {
            let ctx = owner(&owner_id)?;
            let Some(session_id) = session_selector().current(&ctx) else {
                bail!("no current conversation; write something first");
            };
            client.session_insight(&ctx, &session_id).await?
        },
        None => {
            let entries: Vec<_> = local_journal_file().load().iter().cloned().collect();
            client.local_insight(&entries).await?
        },
    };
    println!("{insight}");
    Ok(())
}
