//! Prompt templates, kept as data.
//!
//! The slide templates carry the output contract that the normalizer and the
//! HTML assembly rely on: `<section class="slide">` markup, a 16:9 1280×720
//! page, and an author line cut to 3–5 names. Editing a template changes that
//! contract.

use paperdeck_core::types::{Language, PromptStyle};

// ─────────────────────────────────────────────
// Slides
// ─────────────────────────────────────────────

const SLIDES_ACADEMIC_EN: &str = r#"You are an expert at creating academic presentation slides.
Given the following academic paper text, create a well-structured HTML presentation with 6-10 slides.

Requirements:
- First slide: Title and authors (keep only 3-5 authors on ONE line, use "et al." for additional authors)
- Include: Background/Motivation, Methods, Key Results, Discussion, Conclusion
- Use bullet points for clarity, keep each point concise
- Keep each slide focused on one main idea
- Use clear, academic language

Formatting:
- Author line example: John Smith, Jane Doe, Bob Wilson et al.
- Each bullet point should be no more than 2 lines
- Each slide must fit a 16:9 page (1280x720 pixels)

Output ONLY valid HTML code for the slides, no markdown, no explanations.
Use this exact structure for each slide:
<section class="slide">
  <h2>Slide Title</h2>
  <div class="content">
    <ul>
      <li>Point 1</li>
      <li>Point 2</li>
    </ul>
  </div>
</section>"#;

const SLIDES_ACADEMIC_ZH: &str = r#"你是一个学术演示文稿专家。请根据以下论文内容创建一个结构清晰的HTML演示文稿，包含6-10张幻灯片。

要求：
- 第一张：标题和作者（作者只保留3-5人，超出用"等"代替，作者名必须在同一行）
- 包含：背景/动机、方法、主要结果、讨论、结论
- 使用要点列表，每个要点简洁明了
- 每张幻灯片聚焦一个主题
- 使用清晰的中文

格式要求：
- 标题页作者格式示例：张三, 李四, 王五 等
- 每个要点不超过两行
- 每张幻灯片必须适配16:9页面（1280x720像素）

只输出有效的HTML代码，不要markdown，不要解释。
使用以下结构：
<section class="slide">
  <h2>幻灯片标题</h2>
  <div class="content">
    <ul>
      <li>要点1</li>
      <li>要点2</li>
    </ul>
  </div>
</section>"#;

const SLIDES_SIMPLE_EN: &str = r#"Create a simple presentation with 5-6 slides summarizing the key points.
Use bullet points. Keep it brief and clear.
First slide: title and at most 3-5 authors on one line, then "et al.".
Each slide must fit a 16:9 page (1280x720 pixels).
Output ONLY valid HTML using <section class="slide"> tags."#;

const SLIDES_SIMPLE_ZH: &str = r#"创建一个简洁的演示文稿，包含5-6张幻灯片，总结关键要点。
使用要点列表。保持简短清晰。使用中文。
第一张：标题和作者（最多3-5人，同一行，超出用"等"代替）。
每张幻灯片必须适配16:9页面（1280x720像素）。
只输出有效的HTML，使用 <section class="slide"> 标签。"#;

const SLIDES_DETAILED_EN: &str = r#"Create a comprehensive presentation with 8-12 slides.
Include detailed explanations, examples, and supporting data.
First slide: title and at most 3-5 authors on one line, then "et al.".
Each slide must fit a 16:9 page (1280x720 pixels).
Output ONLY valid HTML using <section class="slide"> tags."#;

const SLIDES_DETAILED_ZH: &str = r#"创建一个详细的演示文稿，包含8-12张幻灯片。
包含详细解释、示例和支持数据。使用中文。
第一张：标题和作者（最多3-5人，同一行，超出用"等"代替）。
每张幻灯片必须适配16:9页面（1280x720像素）。
只输出有效的HTML，使用 <section class="slide"> 标签。"#;

/// Slide templates keyed by (style, language).
pub static SLIDE_TEMPLATES: &[(PromptStyle, Language, &str)] = &[
    (PromptStyle::Academic, Language::English, SLIDES_ACADEMIC_EN),
    (PromptStyle::Academic, Language::Chinese, SLIDES_ACADEMIC_ZH),
    (PromptStyle::Simple, Language::English, SLIDES_SIMPLE_EN),
    (PromptStyle::Simple, Language::Chinese, SLIDES_SIMPLE_ZH),
    (PromptStyle::Detailed, Language::English, SLIDES_DETAILED_EN),
    (PromptStyle::Detailed, Language::Chinese, SLIDES_DETAILED_ZH),
];

/// Slide instruction text for `style` in `language`.
pub fn slide_template(style: PromptStyle, language: Language) -> &'static str {
    SLIDE_TEMPLATES
        .iter()
        .find(|(s, l, _)| *s == style && *l == language)
        .map(|(_, _, text)| *text)
        .unwrap_or(SLIDES_ACADEMIC_ZH)
}

// ─────────────────────────────────────────────
// Notes
// ─────────────────────────────────────────────

const NOTES_INSTRUCTION_EN: &str = r#"You are an expert research assistant. Read the following academic paper and write structured reading notes in Markdown.

Requirements:
- Follow the note template below; keep its headings and their order
- Any {{placeholder}} still present in the template must be filled with information inferred from the paper text
- Be concise and factual, prefer bullet points
- Use clear English

Output ONLY the Markdown notes, no code fences, no explanations.

Note template:"#;

const NOTES_INSTRUCTION_ZH: &str = r#"你是一名专业的科研助理。请阅读以下学术论文，并用Markdown撰写结构化的阅读笔记。

要求：
- 按照下面的笔记模板撰写，保留模板中的标题及其顺序
- 模板中仍然存在的 {{占位符}} 请根据论文内容推断并填写
- 简洁、客观，优先使用要点列表
- 使用清晰的中文

只输出Markdown笔记，不要代码块，不要解释。

笔记模板："#;

const DEFAULT_NOTE_TEMPLATE_EN: &str = r#"# {{title}}

- **Authors**: {{authors}}
- **Journal**: {{journal}}
- **Year**: {{year}}

## Research Question

## Methods

## Key Findings

## Limitations

## Takeaways
"#;

const DEFAULT_NOTE_TEMPLATE_ZH: &str = r#"# {{title}}

- **作者**：{{authors}}
- **期刊**：{{journal}}
- **年份**：{{year}}

## 研究问题

## 研究方法

## 主要发现

## 局限性

## 启发与思考
"#;

/// Instruction text placed before the user's note template.
pub fn note_instruction(language: Language) -> &'static str {
    match language {
        Language::English => NOTES_INSTRUCTION_EN,
        Language::Chinese => NOTES_INSTRUCTION_ZH,
    }
}

/// Note template used when the user has not configured one.
pub fn default_note_template(language: Language) -> &'static str {
    match language {
        Language::English => DEFAULT_NOTE_TEMPLATE_EN,
        Language::Chinese => DEFAULT_NOTE_TEMPLATE_ZH,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 2] = [Language::English, Language::Chinese];

    #[test]
    fn test_six_distinct_slide_templates() {
        assert_eq!(SLIDE_TEMPLATES.len(), 6);
        let mut texts: Vec<&str> = SLIDE_TEMPLATES.iter().map(|(_, _, t)| *t).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 6);
    }

    #[test]
    fn test_every_style_language_pair_has_a_template() {
        for style in PromptStyle::ALL {
            for language in LANGUAGES {
                assert!(
                    SLIDE_TEMPLATES
                        .iter()
                        .any(|(s, l, _)| *s == style && *l == language),
                    "{style:?}/{language:?}"
                );
            }
        }
    }

    #[test]
    fn test_slide_templates_carry_markup_contract() {
        for (_, _, text) in SLIDE_TEMPLATES {
            assert!(text.contains(r#"<section class="slide">"#));
            assert!(text.contains("16:9"));
            assert!(text.contains("1280x720"));
            assert!(text.contains("3-5"));
        }
    }

    #[test]
    fn test_author_suffix_per_language() {
        assert!(slide_template(PromptStyle::Academic, Language::English).contains("et al."));
        assert!(slide_template(PromptStyle::Academic, Language::Chinese).contains("等"));
    }

    #[test]
    fn test_academic_english_lookup() {
        let text = slide_template(PromptStyle::Academic, Language::English);
        assert!(text.starts_with("You are an expert at creating academic presentation slides."));
        assert!(text.contains("6-10 slides"));
    }

    #[test]
    fn test_default_note_templates_have_all_placeholders() {
        for language in LANGUAGES {
            let template = default_note_template(language);
            for placeholder in ["{{title}}", "{{authors}}", "{{journal}}", "{{year}}"] {
                assert!(template.contains(placeholder), "{language:?} {placeholder}");
            }
        }
    }

    #[test]
    fn test_note_instruction_languages() {
        assert!(note_instruction(Language::English).contains("Markdown"));
        assert!(note_instruction(Language::Chinese).contains("笔记模板"));
    }
}
