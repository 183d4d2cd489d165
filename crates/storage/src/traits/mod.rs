//! Async store traits.
//!
//! Implemented for [`crate::Storage`] by running its synchronous methods on
//! the blocking pool.

pub mod ai_output;
pub mod entry;
pub mod insight;
pub mod thought;

pub use ai_output::AiOutputStore;
pub use entry::EntryStore;
pub use insight::InsightStore;
pub use thought::ThoughtStore;

/// Everything the service layer needs from persistence.
///
/// Services hold `Arc<dyn JournalStore>` so only the async trait methods are
/// visible to them.
pub trait JournalStore: ThoughtStore + EntryStore + InsightStore + AiOutputStore {}

impl<T> JournalStore for T where T: ThoughtStore + EntryStore + InsightStore + AiOutputStore {}
