//! Inner-thought annotation of a single message.

use std::sync::LazyLock;

use regex::Regex;
use zenlog_core::{EntryAnnotation, INNER_THOUGHT_MAX_TOKENS};

use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompts::number_entries;

static INNER_THOUGHT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*inner thought[ \t]*[:：][ \t]*(.*)$").unwrap());
static SUMMARY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*summary[ \t]*[:：][ \t]*(.*)$").unwrap());
static TAGS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^\s*tags[ \t]*[:：][ \t]*(.*)$").unwrap());

fn labelled(re: &Regex, content: &str) -> String {
    re.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default()
}

/// Extract the three labelled lines. A missing label leaves its field empty.
#[must_use]
pub fn parse_inner_thought(content: &str) -> EntryAnnotation {
    EntryAnnotation {
        inner_thought: labelled(&INNER_THOUGHT_LINE, content),
        summary: labelled(&SUMMARY_LINE, content),
        tags: labelled(&TAGS_LINE, content),
    }
}

fn build_prompt<S: AsRef<str>>(message: &str, history: &[S]) -> String {
    let mut prompt = String::from(
        "You are a quiet listener reading someone's journal. For the message below, reply with \
         exactly three lines:\n\
         Inner thought: what the writer may be feeling underneath, in one or two sentences\n\
         Summary: the message in one short sentence\n\
         Tags: up to 3 tags, separated by commas\n",
    );
    if !history.is_empty() {
        prompt.push_str("\nEarlier entries, for context:\n");
        prompt.push_str(&number_entries(history));
        prompt.push('\n');
    }
    prompt.push_str("\nMessage:\n");
    prompt.push_str(message);
    prompt
}

impl LlmClient {
    /// Ask for the inner thought, summary and tags of `message`.
    ///
    /// `history` holds earlier texts of the same session, oldest first.
    ///
    /// # Errors
    /// Returns an error if the completion call fails.
    pub async fn generate_inner_thought<S: AsRef<str>>(
        &self,
        message: &str,
        history: &[S],
    ) -> Result<EntryAnnotation, LlmError> {
        let content = self.invoke(&build_prompt(message, history), INNER_THOUGHT_MAX_TOKENS).await?;
        Ok(parse_inner_thought(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_labels() {
        let parsed = parse_inner_thought(
            "Inner thought: You are carrying a lot.\nSummary: Feeling overwhelmed.\nTags: stress, work",
        );
        assert_eq!(parsed.inner_thought, "You are carrying a lot.");
        assert_eq!(parsed.summary, "Feeling overwhelmed.");
        assert_eq!(parsed.tags, "stress, work");
    }

    #[test]
    fn test_missing_label_is_empty() {
        let parsed = parse_inner_thought("Summary: only this");
        assert_eq!(parsed.inner_thought, "");
        assert_eq!(parsed.summary, "only this");
        assert_eq!(parsed.tags, "");
    }

    #[test]
    fn test_labels_are_case_insensitive_and_indented() {
        let parsed = parse_inner_thought("  inner THOUGHT： quiet\n  TAGS: calm");
        assert_eq!(parsed.inner_thought, "quiet");
        assert_eq!(parsed.tags, "calm");
    }

    #[test]
    fn test_prompt_includes_history() {
        let prompt = build_prompt("now", &["before"]);
        assert!(prompt.contains("[1] before"));
        assert!(prompt.ends_with("Message:\nnow"));
        let bare = build_prompt::<&str>("now", &[]);
        assert!(!bare.contains("Earlier entries"));
    }
}
