//! Core types for zenlog
//!
//! Domain types and pure logic shared across all other crates.

mod ai_output;
mod clock;
mod constants;
mod context;
mod entry;
mod env_config;
mod error;
mod insight;
mod local_journal;
mod thought;
mod timeline;

pub use ai_output::*;
pub use clock::now;
pub use constants::*;
pub use context::*;
pub use entry::*;
pub use env_config::*;
pub use error::*;
pub use insight::*;
pub use local_journal::*;
pub use thought::*;
pub use timeline::*;
