//! Shared constants for zenlog.

/// Number of most recent entries fed into prompts (token budget bound).
pub const HISTORY_WINDOW: usize = 20;

/// Output budget for each of the four aggregated output kinds.
pub const OUTPUT_MAX_TOKENS: u32 = 500;

/// Output budget for the per-entry inner thought.
pub const INNER_THOUGHT_MAX_TOKENS: u32 = 400;

/// Output budget for a session insight.
pub const INSIGHT_MAX_TOKENS: u32 = 100;

/// Output budget for a short acknowledgement.
pub const AIZUCHI_MAX_TOKENS: u32 = 20;

/// Maximum number of items kept in the account-less local journal.
pub const LOCAL_JOURNAL_CAPACITY: usize = 20;

/// Interval between completion polls on the client.
pub const POLL_INTERVAL_SECS: u64 = 3;

/// Maximum number of thoughts returned by a listing.
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of thoughts returned when the caller does not say.
pub const DEFAULT_QUERY_LIMIT: usize = 50;
