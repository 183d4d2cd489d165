//! Very short acknowledgement of a message.

use zenlog_core::AIZUCHI_MAX_TOKENS;

use crate::ai_types::Message;
use crate::client::LlmClient;
use crate::error::LlmError;

/// Used when the model returns nothing.
pub const AIZUCHI_FALLBACK: &str = "Hmm…";
/// Shown to the user when the call fails.
pub const AIZUCHI_ON_ERROR: &str = "……";

const MAX_CHARS: usize = 15;

const SYSTEM_PROMPT: &str = "You are a gentle listener. Reply to the user's message with a single \
    very short acknowledgement of at most 15 characters, such as \"I see.\" or \"That's hard.\" \
    Never ask questions or give advice.";

impl LlmClient {
    /// Produce a short acknowledgement, at most 15 characters.
    ///
    /// # Errors
    /// Returns an error if the completion call fails.
    pub async fn generate_aizuchi(&self, message: &str) -> Result<String, LlmError> {
        let content = self
            .complete(
                vec![Message::system(SYSTEM_PROMPT), Message::user(message)],
                AIZUCHI_MAX_TOKENS,
            )
            .await?;
        if content.is_empty() {
            return Ok(AIZUCHI_FALLBACK.to_owned());
        }
        Ok(content.chars().take(MAX_CHARS).collect())
    }
}
