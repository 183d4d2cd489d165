//! Typed error enum for the service layer.
//!
//! Unifies storage, LLM and domain failures into a single error type, so HTTP
//! handlers can map failure modes to status codes without downcasting.

use thiserror::Error;
use zenlog_core::CoreError;
use zenlog_llm::LlmError;
use zenlog_storage::StorageError;

/// Service-layer error unifying storage, LLM and domain failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, dangling reference, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// LLM API call failed.
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Domain value could not be built or decoded.
    #[error("core: {0}")]
    Core(#[from] CoreError),

    /// Caller provided invalid input (blank text, blank owner).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Addressed thought does not exist for this owner, or there is nothing to read.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Whether the model API refused the call for rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Llm(e) if e.is_rate_limited())
    }

    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Storage(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Whether this error was caused by the caller's input.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Core(CoreError::InvalidInput(_)))
    }
}
