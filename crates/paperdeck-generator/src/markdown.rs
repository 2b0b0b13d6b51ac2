//! Minimal Markdown → HTML converter for generated notes.
//!
//! Used when notes have to be shown as HTML and no real Markdown renderer
//! is available. Deliberately small, not CommonMark.
//!
//! Supported:
//! - Headers (`#` … `######`) → `<h1>` … `<h6>`
//! - Bold (`**text**`) → `<strong>`
//! - Italic (`*text*`, `_text_`) → `<em>`
//! - Unordered lists (`-` / `*` items) → `<ul><li>`
//! - Everything else → `<p>`, blank lines separate paragraphs
//!
//! All text is HTML-escaped first.

use std::sync::LazyLock;

use regex::Regex;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").expect("header pattern is valid"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.+)$").expect("list pattern is valid"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s][^*]*?)\*").expect("italic pattern is valid"));
// No lookbehind in `regex`: capture the surrounding character instead, so snake_case survives.
// A match consumes its trailing boundary, so adjacent spans need another pass.
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^a-zA-Z0-9_])_([^_]+?)_($|[^a-zA-Z0-9_])").expect("italic pattern is valid")
});

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let text = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let text = ITALIC_STAR.replace_all(&text, "<em>$1</em>");
    italicize_underscores(text.into_owned())
}

fn italicize_underscores(mut text: String) -> String {
    // Each pass removes two underscores, so this terminates.
    loop {
        let next = ITALIC_UNDERSCORE.replace_all(&text, "$1<em>$2</em>$3");
        if next == text {
            return text;
        }
        text = next.into_owned();
    }
}

#[derive(Default)]
struct Blocks {
    html: Vec<String>,
    paragraph: Vec<String>,
    list: Vec<String>,
}

impl Blocks {
    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let body = self.paragraph.join(" ");
            self.html.push(format!("<p>{body}</p>"));
            self.paragraph.clear();
        }
    }

    fn flush_list(&mut self) {
        if !self.list.is_empty() {
            let items: String = self.list.iter().map(|i| format!("<li>{i}</li>")).collect();
            self.html.push(format!("<ul>{items}</ul>"));
            self.list.clear();
        }
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }
}

/// Convert the supported Markdown subset to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut blocks = Blocks::default();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            blocks.flush();
        } else if let Some(caps) = HEADER.captures(line) {
            blocks.flush();
            let level = caps[1].len();
            blocks
                .html
                .push(format!("<h{level}>{}</h{level}>", render_inline(&caps[2])));
        } else if let Some(caps) = LIST_ITEM.captures(line) {
            blocks.flush_paragraph();
            blocks.list.push(render_inline(&caps[1]));
        } else {
            blocks.flush_list();
            blocks.paragraph.push(render_inline(line.trim()));
        }
    }
    blocks.flush();

    blocks.html.join("\n")
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
