//! Concurrent generation of the four journal outputs.

use zenlog_core::{GeneratedOutput, OUTPUT_MAX_TOKENS};

use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompts::{OutputPrompt, build_output_prompts};

impl LlmClient {
    async fn generate_one(&self, prompt: &OutputPrompt) -> Result<GeneratedOutput, LlmError> {
        let content = self.invoke(&prompt.prompt, OUTPUT_MAX_TOKENS).await?;
        Ok(GeneratedOutput { kind: prompt.kind, content })
    }

    /// Run the summary, analysis, tags and suggestion prompts concurrently.
    ///
    /// The first failure aborts the rest; nothing partial is returned.
    ///
    /// # Errors
    /// Returns `LlmError::NoEntries` for empty input, or the first invocation error.
    pub async fn generate_outputs<S: AsRef<str>>(
        &self,
        texts: &[S],
        window: usize,
    ) -> Result<Vec<GeneratedOutput>, LlmError> {
        let prompts = build_output_prompts(texts, window).ok_or(LlmError::NoEntries)?;
        let [summary, analysis, tags, suggestion] = prompts.as_slice() else {
            return Err(LlmError::NoEntries);
        };
        let (summary, analysis, tags, suggestion) = tokio::try_join!(
            self.generate_one(summary),
            self.generate_one(analysis),
            self.generate_one(tags),
            self.generate_one(suggestion),
        )?;
        tracing::debug!(model = %self.model, "Generated journal outputs");
        Ok(vec![summary, analysis, tags, suggestion])
    }
}
