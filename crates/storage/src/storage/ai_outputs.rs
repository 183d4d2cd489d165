use rusqlite::{OptionalExtension as _, params};
use zenlog_core::{AiOutputVersion, AiOutputs};

use super::{Storage, format_ts, get_conn, log_row_error, parse_ts};
use crate::error::StorageError;

const VERSION_COLUMNS: &str =
    "id, session_id, owner_id, summary, tags, analysis, suggestion, created_at";

impl Storage {
    /// Append one aggregation run. Existing rows are never updated.
    ///
    /// # Errors
    /// Returns `StorageError::MissingReference` if the thought does not exist.
    pub fn insert_ai_output(&self, version: &AiOutputVersion) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO ai_outputs
               (id, session_id, owner_id, summary, tags, analysis, suggestion, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                version.id,
                version.session_id,
                version.owner_id,
                version.outputs.summary,
                version.outputs.tags,
                version.outputs.analysis,
                version.outputs.suggestion,
                format_ts(&version.created_at),
            ],
        )?;
        Ok(())
    }

    /// Most recent run for a thought.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn latest_ai_output(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Option<AiOutputVersion>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT {VERSION_COLUMNS} FROM ai_outputs WHERE session_id = ?1 AND owner_id = ?2
               ORDER BY created_at DESC, rowid DESC LIMIT 1"
        );
        Ok(conn.query_row(&sql, params![session_id, owner_id], Self::row_to_version).optional()?)
    }

    /// Every run for a thought, newest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_ai_outputs(
        &self,
        session_id: &str,
        owner_id: &str,
    ) -> Result<Vec<AiOutputVersion>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!(
            "SELECT {VERSION_COLUMNS} FROM ai_outputs WHERE session_id = ?1 AND owner_id = ?2
               ORDER BY created_at DESC, rowid DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![session_id, owner_id], Self::row_to_version)?;
        Ok(rows.filter_map(log_row_error).collect())
    }

    fn row_to_version(row: &rusqlite::Row<'_>) -> rusqlite::Result<AiOutputVersion> {
        Ok(AiOutputVersion {
            id: row.get(0)?,
            session_id: row.get(1)?,
            owner_id: row.get(2)?,
            outputs: AiOutputs {
                summary: row.get(3)?,
                tags: row.get(4)?,
                analysis: row.get(5)?,
                suggestion: row.get(6)?,
            },
            created_at: parse_ts(&row.get::<_, String>(7)?)?,
        })
    }
}
