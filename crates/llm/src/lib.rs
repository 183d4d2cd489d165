//! LLM client for zenlog
//!
//! Talks to an OpenAI-compatible chat completions endpoint. No request is
//! ever retried: failures surface to the caller, rate limits included.

mod ai_types;
mod aizuchi;
mod client;
mod error;
mod inner_thought;
mod insight;
mod outputs;
mod prompts;


pub use aizuchi::{AIZUCHI_FALLBACK, AIZUCHI_ON_ERROR};
pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, LlmClient, truncate};
pub use error::LlmError;
pub use inner_thought::parse_inner_thought;
pub use insight::parse_insight;
pub use prompts::{OutputPrompt, build_output_prompts, number_entries};
