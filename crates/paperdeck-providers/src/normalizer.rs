//! Response normalizer — unwraps the provider envelope and cleans up the
//! generated text.
//!
//! Models routinely wrap their answer in Markdown code fences or ignore the
//! slide markup contract; the output of [`normalize`] is what downstream
//! HTML/Markdown assembly can rely on.

use std::sync::LazyLock;

use regex::Regex;

use paperdeck_core::error::{GenerationError, Result};
use paperdeck_core::types::{
    ChatCompletionResponse, GeminiResponse, LlmResponse, PromptTask, ProviderFamily,
};

/// Opening or closing fence: ```` ```html ````, ```` ```markdown ````, ```` ```md ```` or bare ```` ``` ````.
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```(?:html|markdown|md)?[ \t]*(?:\r?\n)?").expect("code fence pattern is valid")
});

/// Pull the generated text out of a raw response body.
///
/// - OpenAI-compatible: `choices[0].message.content`
/// - Gemini: `candidates[0].content.parts[0].text`
pub fn extract_text(raw: &str, family: ProviderFamily) -> Result<String> {
    let malformed = |e: serde_json::Error| GenerationError::MalformedResponse {
        family: family.label(),
        reason: e.to_string(),
    };

    let text = match family {
        ProviderFamily::OpenAiCompatible => serde_json::from_str::<ChatCompletionResponse>(raw)
            .map_err(malformed)?
            .into_text(),
        ProviderFamily::Gemini => serde_json::from_str::<GeminiResponse>(raw)
            .map_err(malformed)?
            .into_text(),
    };

    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GenerationError::EmptyContent(family.label())),
    }
}

/// Strip code-fence delimiters and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Wrap text in a single slide section.
pub fn wrap_in_slide(content: &str) -> String {
    format!(r#"<section class="slide"><div class="content">{content}</div></section>"#)
}

/// Clean model output for `task`.
///
/// Slides without any `<section` tag are wrapped in one slide so downstream
/// assembly always receives slide sections. Idempotent.
pub fn normalize(text: &str, task: &PromptTask) -> String {
    let cleaned = strip_code_fences(text);
    if task.is_slides() && !cleaned.contains("<section") {
        wrap_in_slide(&cleaned)
    } else {
        cleaned
    }
}

/// Extract and normalize in one step.
///
/// Fails with `EmptyContent` when nothing is left after stripping fences.
pub fn extract(raw: &str, family: ProviderFamily, task: &PromptTask) -> Result<LlmResponse> {
    let text = extract_text(raw, family)?;
    if strip_code_fences(&text).is_empty() {
        return Err(GenerationError::EmptyContent(family.label()));
    }
    Ok(LlmResponse {
        raw_envelope: raw.to_string(),
        extracted_text: normalize(&text, task),
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notes() -> PromptTask {
        PromptTask::Notes {
            template: String::new(),
        }
    }

    #[test]
    fn test_extract_openai_content() {
        let raw = json!({"choices": [{"message": {"content": "hello"}}]}).to_string();
        assert_eq!(extract_text(&raw, ProviderFamily::OpenAiCompatible).unwrap(), "hello");
    }

    #[test]
    fn test_extract_gemini_content() {
        let raw = json!({"candidates": [{"content": {"parts": [{"text": "hallo"}]}}]}).to_string();
        assert_eq!(extract_text(&raw, ProviderFamily::Gemini).unwrap(), "hallo");
    }

    #[test]
    fn test_extract_wrong_family_is_empty() {
        let raw = json!({"choices": [{"message": {"content": "hello"}}]}).to_string();
        let err = extract_text(&raw, ProviderFamily::Gemini).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyContent("Gemini")));
    }

    #[test]
    fn test_extract_null_content_is_empty() {
        let raw = json!({"choices": [{"message": {"content": null}}]}).to_string();
        let err = extract_text(&raw, ProviderFamily::OpenAiCompatible).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyContent(_)));
    }

    #[test]
    fn test_extract_blank_content_is_empty() {
        let raw = json!({"choices": [{"message": {"content": "  \n"}}]}).to_string();
        assert!(extract_text(&raw, ProviderFamily::OpenAiCompatible).is_err());
    }

    #[test]
    fn test_extract_invalid_json_is_malformed() {
        let err = extract_text("<html>502 Bad Gateway</html>", ProviderFamily::OpenAiCompatible)
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse { .. }));
    }

    #[test]
    fn test_strip_html_fence() {
        assert_eq!(
            normalize("```html\n<section>A</section>\n```", &PromptTask::Slides),
            "<section>A</section>"
        );
    }

    #[test]
    fn test_strip_markdown_fences() {
        assert_eq!(normalize("```markdown\n# Notes\n```", &notes()), "# Notes");
        assert_eq!(normalize("```md\n- a\n```", &notes()), "- a");
        assert_eq!(normalize("```MD\n- a\n```", &notes()), "- a");
    }

    #[test]
    fn test_strip_bare_fence_case_insensitive_html() {
        assert_eq!(
            normalize("```HTML\n<section>x</section>```", &PromptTask::Slides),
            "<section>x</section>"
        );
    }

    #[test]
    fn test_wrap_plain_text_slides() {
        assert_eq!(
            normalize("just some text", &PromptTask::Slides),
            r#"<section class="slide"><div class="content">just some text</div></section>"#
        );
    }

    #[test]
    fn test_notes_are_never_wrapped() {
        assert_eq!(normalize("just some text", &notes()), "just some text");
    }

    #[test]
    fn test_normalize_is_idempotent_on_clean_input() {
        let inputs = [
            "just some text",
            "<section class=\"slide\"><h2>T</h2></section>",
            "  padded  ",
        ];
        for input in inputs {
            for task in [PromptTask::Slides, notes()] {
                let once = normalize(input, &task);
                assert_eq!(normalize(&once, &task), once, "input {input:?}");
            }
        }
    }

    #[test]
    fn test_extract_full_pipeline() {
        let raw = json!({
            "candidates": [{"content": {"parts": [{"text": "```html\n<section class=\"slide\">A</section>\n```"}]}}]
        })
        .to_string();
        let resp = extract(&raw, ProviderFamily::Gemini, &PromptTask::Slides).unwrap();
        assert_eq!(resp.extracted_text, "<section class=\"slide\">A</section>");
        assert_eq!(resp.raw_envelope, raw);
    }

    #[test]
    fn test_extract_fence_only_is_empty() {
        let raw = json!({"choices": [{"message": {"content": "```html\n```"}}]}).to_string();
        let err = extract(&raw, ProviderFamily::OpenAiCompatible, &PromptTask::Slides).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyContent(_)));
    }
}
