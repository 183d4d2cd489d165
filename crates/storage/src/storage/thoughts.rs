use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension as _, params};
use zenlog_core::Thought;

use super::{Storage, format_ts, get_conn, log_row_error, parse_ts};
use crate::error::StorageError;

const THOUGHT_COLUMNS: &str = "id, title, owner_id, created_at, updated_at";

impl Storage {
    /// Insert a new thought.
    ///
    /// # Errors
    /// Returns `StorageError::Duplicate` if the id is taken.
    pub fn save_thought(&self, thought: &Thought) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO thoughts (id, title, owner_id, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                thought.id,
                thought.title,
                thought.owner_id,
                format_ts(&thought.created_at),
                format_ts(&thought.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Get thought by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_thought(&self, id: &str) -> Result<Option<Thought>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE id = ?1");
        Ok(conn.query_row(&sql, params![id], Self::row_to_thought).optional()?)
    }

    /// Thoughts of one owner, most recently active first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_thoughts(
        &self,
        owner_id: &str,
        limit: usize,
    ) -> Result<Vec<Thought>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT {THOUGHT_COLUMNS} FROM thoughts WHERE owner_id = ?1
               ORDER BY updated_at DESC, rowid DESC LIMIT ?2"
        );
        let mut stmt = conn.prepare(&sql)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![owner_id, limit], Self::row_to_thought)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    /// Bump the last-activity timestamp. Returns `false` if no such thought.
    ///
    /// # Errors
    /// Returns error if database update fails.
    pub fn touch_thought(&self, id: &str, now: DateTime<Utc>) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute(
            "UPDATE thoughts SET updated_at = ?1 WHERE id = ?2",
            params![format_ts(&now), id],
        )?;
        Ok(affected > 0)
    }

    fn row_to_thought(row: &rusqlite::Row<'_>) -> rusqlite::Result<Thought> {
        Ok(Thought {
            id: row.get(0)?,
            title: row.get(1)?,
            owner_id: row.get(2)?,
            created_at: parse_ts(&row.get::<_, String>(3)?)?,
            updated_at: parse_ts(&row.get::<_, String>(4)?)?,
        })
    }
}
