//! Prompt templates for the four journal outputs.

use zenlog_core::OutputKind;

/// A prompt ready to send, labelled with the output it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPrompt {
    pub kind: OutputKind,
    pub prompt: String,
}

/// Number texts as `[1] first`, `[2] second`, one per line.
#[must_use]
pub fn number_entries<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("[{}] {}", i.saturating_add(1), text.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn instruction(kind: OutputKind) -> &'static str {
    match kind {
        OutputKind::Summary => {
            "Summarize the following journal entries in two or three calm sentences. \
             Keep the writer's own words where you can."
        },
        OutputKind::Analysis => {
            "Read the following journal entries and describe, gently and without judgement, \
             the emotions and recurring patterns you notice."
        },
        OutputKind::Tags => {
            "Give at most 3 short tags for the following journal entries. \
             Reply with the tags only, separated by commas."
        },
        OutputKind::Suggestion => {
            "Speaking as a quiet Zen monk, offer one small, kind suggestion to the writer \
             of the following journal entries. Keep it brief."
        },
    }
}

/// Build one prompt per output kind over the last `window` texts.
///
/// `texts` are oldest first. Returns `None` when there is nothing to reflect on.
#[must_use]
pub fn build_output_prompts<S: AsRef<str>>(
    texts: &[S],
    window: usize,
) -> Option<Vec<OutputPrompt>> {
    let start = texts.len().saturating_sub(window.max(1));
    let recent = texts.get(start..).unwrap_or_default();
    if recent.is_empty() {
        return None;
    }
    let numbered = number_entries(recent);
    Some(
        OutputKind::ALL
            .iter()
            .map(|kind| OutputPrompt {
                kind: *kind,
                prompt: format!("{}\n\nEntries:\n{numbered}", instruction(*kind)),
            })
            .collect(),
    )
}
