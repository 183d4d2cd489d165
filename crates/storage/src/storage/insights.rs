use rusqlite::params;
use zenlog_core::Insight;

use super::{Storage, format_ts, get_conn, log_row_error, parse_ts};
use crate::error::StorageError;

impl Storage {
    /// Insert an insight.
    ///
    /// # Errors
    /// Returns `StorageError::MissingReference` if the thought does not exist.
    pub fn save_insight(&self, insight: &Insight) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO insights (id, session_id, owner_id, text, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                insight.id,
                insight.session_id,
                insight.owner_id,
                insight.text,
                format_ts(&insight.created_at),
            ],
        )?;
        Ok(())
    }

    /// All insights of a thought, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_session_insights(&self, session_id: &str) -> Result<Vec<Insight>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, session_id, owner_id, text, created_at FROM insights
               WHERE session_id = ?1 ORDER BY created_at ASC, rowid ASC",
        )?;
        let rows = stmt.query_map(params![session_id], |row| {
            Ok(Insight {
                id: row.get(0)?,
                session_id: row.get(1)?,
                owner_id: row.get(2)?,
                text: row.get(3)?,
                created_at: parse_ts(&row.get::<_, String>(4)?)?,
            })
        })?;
        Ok(rows.filter_map(log_row_error).collect())
    }
}
