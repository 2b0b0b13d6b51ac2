//! Prompt builder — selects a template, fills note placeholders, and embeds
//! the (possibly truncated) paper text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use paperdeck_core::types::{DocumentMetadata, Language, PromptStyle, PromptTask};
use paperdeck_core::utils::truncate_chars;
use tracing::debug;

use crate::templates::{default_note_template, note_instruction, slide_template};

/// Maximum number of source characters sent to the model.
pub const MAX_SOURCE_CHARS: usize = 15_000;

/// Appended after a hard cut so the model (and the reader) knows text is missing.
pub const TRUNCATION_MARKER: &str = "\n\n[... text truncated ...]";

/// Separates the instructions from the paper text.
pub const SOURCE_SEPARATOR: &str = "\n\n---\n\nPaper text:\n\n";

/// Cut `text` to `max_chars` characters plus [`TRUNCATION_MARKER`].
///
/// No word-boundary handling: the cut is exact.
pub fn truncate_source(text: &str, max_chars: usize) -> Cow<'_, str> {
    match truncate_chars(text, max_chars) {
        Some(head) => Cow::Owned(format!("{head}{TRUNCATION_MARKER}")),
        None => Cow::Borrowed(text),
    }
}

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(title|authors|journal|year)\}\}").expect("placeholder pattern is valid")
});

/// Substitute `{{title}}`, `{{authors}}`, `{{journal}}`, `{{year}}` in a note template.
///
/// Single pass over the template: placeholders inside substituted values stay
/// literal. Empty metadata fields leave their placeholder in place so the
/// model can fill the gap from the paper text.
pub fn fill_note_template(template: &str, metadata: &DocumentMetadata) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let value = match &caps[1] {
                "title" => &metadata.title,
                "authors" => &metadata.authors,
                "journal" => &metadata.journal,
                _ => &metadata.year,
            };
            match value.trim() {
                "" => caps[0].to_string(),
                v => v.to_string(),
            }
        })
        .into_owned()
}

/// Builds the single user prompt sent to the provider.
#[derive(Clone, Debug)]
pub struct PromptBuilder {
    max_source_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            max_source_chars: MAX_SOURCE_CHARS,
        }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the truncation limit (builder pattern).
    pub fn with_max_source_chars(mut self, max_source_chars: usize) -> Self {
        self.max_source_chars = max_source_chars;
        self
    }

    /// Build the full prompt for `task`.
    ///
    /// For notes, `metadata` is substituted into the task's template (or the
    /// language default when it is blank); the instruction text itself is
    /// never templated.
    pub fn build(
        &self,
        task: &PromptTask,
        style: PromptStyle,
        language: Language,
        source_text: &str,
        metadata: Option<&DocumentMetadata>,
    ) -> String {
        let instructions = match task {
            PromptTask::Slides => slide_template(style, language).to_string(),
            PromptTask::Notes { template } => {
                let template = if template.trim().is_empty() {
                    default_note_template(language)
                } else {
                    template.as_str()
                };
                let filled = match metadata {
                    Some(meta) => fill_note_template(template, meta),
                    None => template.to_string(),
                };
                format!("{}\n\n{}", note_instruction(language), filled.trim_end())
            }
        };

        let text = truncate_source(source_text, self.max_source_chars);
        if matches!(text, Cow::Owned(_)) {
            debug!(
                original_chars = source_text.chars().count(),
                kept_chars = self.max_source_chars,
                "Truncated source text"
            );
        }

        format!("{instructions}{SOURCE_SEPARATOR}{text}")
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
