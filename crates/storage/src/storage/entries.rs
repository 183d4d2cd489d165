use rusqlite::{OptionalExtension as _, params};
use zenlog_core::{Entry, EntryAnnotation};

use super::{Storage, format_ts, get_conn, log_row_error, parse_ts};
use crate::error::StorageError;

const ENTRY_COLUMNS: &str =
    "id, session_id, author_id, text, created_at, inner_thought, summary, tags";

impl Storage {
    /// Append an entry. Entries are never rewritten apart from their one-time annotation.
    ///
    /// # Errors
    /// Returns `StorageError::MissingReference` if the entry names an unknown thought.
    pub fn append_entry(&self, entry: &Entry) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO entries
               (id, session_id, author_id, text, created_at, inner_thought, summary, tags)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.id,
                entry.session_id,
                entry.author_id,
                entry.text,
                format_ts(&entry.created_at),
                entry.inner_thought,
                entry.summary,
                entry.tags,
            ],
        )?;
        Ok(())
    }

    /// Get entry by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_entry(&self, id: &str) -> Result<Option<Entry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM entries WHERE id = ?1");
        Ok(conn.query_row(&sql, params![id], Self::row_to_entry).optional()?)
    }

    /// All entries of a thought, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_session_entries(&self, session_id: &str) -> Result<Vec<Entry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM entries WHERE session_id = ?1
               ORDER BY created_at ASC, rowid ASC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![session_id], Self::row_to_entry)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// Texts of the last `limit` entries of a thought, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn recent_entry_texts(
        &self,
        session_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT text FROM (
                 SELECT text, created_at, rowid AS rid FROM entries WHERE session_id = ?1
                 ORDER BY created_at DESC, rowid DESC LIMIT ?2
             ) ORDER BY created_at ASC, rid ASC",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![session_id, limit], |row| row.get::<_, String>(0))?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// Attach generated fields to an entry.
    ///
    /// Applies only while the entry has no inner thought yet; returns `false`
    /// if the entry is missing or was already annotated.
    ///
    /// # Errors
    /// Returns error if database update fails.
    pub fn annotate_entry(
        &self,
        id: &str,
        annotation: &EntryAnnotation,
    ) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute(
            "UPDATE entries SET inner_thought = ?1, summary = ?2, tags = ?3
               WHERE id = ?4 AND inner_thought IS NULL",
            params![annotation.inner_thought, annotation.summary, annotation.tags, id],
        )?;
        Ok(affected > 0)
    }

    fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
        Ok(Entry {
            id: row.get(0)?,
            session_id: row.get(1)?,
            author_id: row.get(2)?,
            text: row.get(3)?,
            created_at: parse_ts(&row.get::<_, String>(4)?)?,
            inner_thought: row.get(5)?,
            summary: row.get(6)?,
            tags: row.get(7)?,
        })
    }
}
