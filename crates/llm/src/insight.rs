//! One-sentence insight over a whole session.

use std::sync::LazyLock;

use regex::Regex;
use zenlog_core::INSIGHT_MAX_TOKENS;

use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompts::number_entries;

static INSIGHT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)insight\s*[:：]\s*(.*)").unwrap());

/// Text after the `Insight:` label, or the whole trimmed content without one.
#[must_use]
pub fn parse_insight(content: &str) -> String {
    INSIGHT_LABEL
        .captures(content)
        .and_then(|c| c.get(1))
        .map_or_else(|| content.trim().to_owned(), |m| m.as_str().trim().to_owned())
}

impl LlmClient {
    /// Reflect on every entry of a session in one short poetic sentence.
    ///
    /// # Errors
    /// Returns `LlmError::NoEntries` for empty input, or the completion error.
    pub async fn generate_insight<S: AsRef<str>>(&self, texts: &[S]) -> Result<String, LlmError> {
        if texts.is_empty() {
            return Err(LlmError::NoEntries);
        }
        let prompt = format!(
            "Read these journal entries and express one gentle realization about the writer \
             as a single poetic sentence of at most 200 characters. \
             Begin your reply with \"Insight:\".\n\n{}",
            number_entries(texts)
        );
        let content = self.invoke(&prompt, INSIGHT_MAX_TOKENS).await?;
        Ok(parse_insight(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_after_label() {
        assert_eq!(parse_insight("Insight: The river finds its way."), "The river finds its way.");
        assert_eq!(parse_insight("Here it is.\ninsight：stillness"), "stillness");
    }

    #[test]
    fn test_only_the_labelled_line_is_taken() {
        let content = "Insight: Rain feeds the roots.\n\nI hope this helps you today!";
        assert_eq!(parse_insight(content), "Rain feeds the roots.");
        let spaced = "Insight:\n  Slow is also a pace.\nMore.";
        assert_eq!(parse_insight(spaced), "Slow is also a pace.");
    }

    #[test]
    fn test_unlabelled_content_is_kept() {
        assert_eq!(parse_insight("  Quiet mornings help.  "), "Quiet mornings help.");
    }
}
