//! Storage layer for zenlog
//!
//! SQLite-backed persistence behind a connection pool. Synchronous methods
//! live on [`Storage`]; the async store traits run them on the blocking pool.

mod async_impl;
mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::{AiOutputStore, EntryStore, InsightStore, JournalStore, ThoughtStore};
