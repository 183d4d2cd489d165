//! Migration v1: thoughts and entries

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS thoughts (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    owner_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS entries (
    id TEXT PRIMARY KEY,
    session_id TEXT REFERENCES thoughts(id) ON DELETE CASCADE,
    author_id TEXT,
    text TEXT NOT NULL,
    created_at TEXT NOT NULL,
    inner_thought TEXT,
    summary TEXT,
    tags TEXT
);

CREATE INDEX IF NOT EXISTS idx_thoughts_owner_updated ON thoughts(owner_id, updated_at);
CREATE INDEX IF NOT EXISTS idx_entries_session_created ON entries(session_id, created_at);
CREATE INDEX IF NOT EXISTS idx_entries_author ON entries(author_id);
";
