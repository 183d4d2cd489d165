pub(crate) mod history;
pub(crate) mod insight;
pub(crate) mod serve;
pub(crate) mod thoughts;
pub(crate) mod write;

use anyhow::Result;
use zenlog_core::OwnerContext;

use crate::client::{JournalClient, LocalJournalFile, SessionSelector};
use crate::{data_dir, get_server_url};

pub(crate) fn journal_client() -> Result<JournalClient> {
    JournalClient::new(&get_server_url())
}

pub(crate) fn session_selector() -> SessionSelector {
    SessionSelector::new(data_dir().join("current_thought.json"))
}

pub(crate) fn local_journal_file() -> LocalJournalFile {
    LocalJournalFile::new(data_dir().join("local_journal.json"))
}

pub(crate) fn owner(owner_id: &str) -> Result<OwnerContext> {
    Ok(OwnerContext::new(owner_id)?)
}
