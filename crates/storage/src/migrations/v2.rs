//! Migration v2: insights and the append-only ai_outputs log

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS insights (
    id TEXT PRIMARY KEY,
    session_id TEXT NOT NULL REFERENCES thoughts(id) ON DELETE CASCADE,
    owner_id TEXT NOT NULL,
    text TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ai_outputs (
    id TEXT PRIMARY KEY,
    session_id TEXT NOT NULL REFERENCES thoughts(id) ON DELETE CASCADE,
    owner_id TEXT NOT NULL,
    summary TEXT NOT NULL,
    tags TEXT NOT NULL,
    analysis TEXT NOT NULL,
    suggestion TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_insights_session_created ON insights(session_id, created_at);
CREATE INDEX IF NOT EXISTS idx_ai_outputs_session_created ON ai_outputs(session_id, owner_id, created_at);
";
