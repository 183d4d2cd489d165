//! The local journal persisted as JSON, for writing without an account.

use anyhow::{Context, Result};
use std::path::PathBuf;
use zenlog_core::{LocalEntry, LocalJournal};

#[derive(Debug, Clone)]
pub(crate) struct LocalJournalFile {
    path: PathBuf,
}

impl LocalJournalFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// A missing or unreadable file yields an empty journal.
    pub(crate) fn load(&self) -> LocalJournal {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return LocalJournal::new();
        };
        LocalJournal::from_json(&raw).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Local journal unreadable, starting fresh"
            );
            LocalJournal::new()
        })
    }

    pub(crate) fn save(&self, journal: &LocalJournal) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, journal.to_json()?)
            .with_context(|| format!("writing {}", self.path.display()))
    }

    pub(crate) fn append(&self, entry: LocalEntry) -> Result<LocalJournal> {
        let mut journal = self.load();
        journal.push(entry);
        self.save(&journal)?;
        Ok(journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use zenlog_core::{LOCAL_JOURNAL_CAPACITY, now};

    #[test]
    fn test_append_persists_newest_first() {
        let dir = TempDir::new().unwrap();
        let file = LocalJournalFile::new(dir.path().join("journal.json"));
        file.append(LocalEntry::new("first".to_owned(), None, now())).unwrap();
        file.append(LocalEntry::new("second".to_owned(), None, now())).unwrap();

        let texts: Vec<String> = file.load().iter().map(|e| e.text.clone()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_capacity_survives_reload() {
        let dir = TempDir::new().unwrap();
        let file = LocalJournalFile::new(dir.path().join("journal.json"));
        for i in 0..25 {
            file.append(LocalEntry::new(format!("e{i}"), None, now())).unwrap();
        }
        assert_eq!(file.load().len(), LOCAL_JOURNAL_CAPACITY);
    }

    #[test]
    fn test_missing_and_corrupt_files_are_empty() {
        let dir = TempDir::new().unwrap();
        let file = LocalJournalFile::new(dir.path().join("journal.json"));
        assert!(file.load().is_empty());
        std::fs::write(dir.path().join("journal.json"), "{oops").unwrap();
        assert!(file.load().is_empty());
    }
}
