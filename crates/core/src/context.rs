//! Explicit caller identity passed into every service call.

use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// The account on whose behalf an operation runs.
///
/// Authentication is delegated elsewhere; handlers build this from the
/// request and hand it down instead of reading ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerContext {
    owner_id: String,
}

impl OwnerContext {
    /// Build a context from a raw owner id.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` if the id is blank.
    pub fn new(owner_id: impl Into<String>) -> Result<Self> {
        let owner_id = owner_id.into().trim().to_owned();
        if owner_id.is_empty() {
            return Err(CoreError::InvalidInput("ownerId must not be empty".to_owned()));
        }
        Ok(Self { owner_id })
    }

    #[must_use]
    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    /// Whether `owner_id` names this caller.
    #[must_use]
    pub fn owns(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }
}
