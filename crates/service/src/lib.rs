//! Service layer for zenlog
//!
//! Centralizes business logic between HTTP handlers and storage/llm. Every
//! call that touches account data takes an explicit [`OwnerContext`].
//!
//! [`OwnerContext`]: zenlog_core::OwnerContext

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod error;
mod history_service;
mod insight_service;
mod journal_service;
mod thought_service;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use history_service::HistoryService;
pub use insight_service::InsightService;
pub use journal_service::{JournalService, SubmittedEntry};
pub use thought_service::ThoughtService;
