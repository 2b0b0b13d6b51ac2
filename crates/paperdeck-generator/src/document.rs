//! Standalone HTML pages around generated slides or notes.

use crate::markdown::{escape_html, markdown_to_html};

const SLIDES_CSS: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Segoe UI', -apple-system, BlinkMacSystemFont, 'PingFang SC', sans-serif;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }
        .slide {
            background: #ffffff;
            width: min(1280px, 95vw);
            aspect-ratio: 16/9;
            margin: 30px auto;
            padding: 60px;
            border-radius: 16px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            display: flex;
            flex-direction: column;
            justify-content: center;
            overflow: hidden;
        }
        h2 {
            color: #2d3748;
            font-size: 2.2em;
            margin-bottom: 30px;
            padding-bottom: 15px;
            border-bottom: 3px solid #667eea;
        }
        .content { font-size: 1.3em; line-height: 1.8; color: #4a5568; }
        @page { size: 1280px 720px; margin: 0; }
        @media print {
            body { background: white; padding: 0; }
            .slide {
                width: 1280px;
                height: 720px;
                box-shadow: none;
                page-break-after: always;
                margin: 0;
                border-radius: 0;
            }
        }"#;

const NOTES_CSS: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', sans-serif;
            max-width: 820px;
            margin: 40px auto;
            padding: 0 20px;
            line-height: 1.7;
            color: #2d3748;
        }
        h1, h2, h3 { margin: 1.2em 0 0.5em; }
        ul { padding-left: 1.5em; }"#;

fn page(title: &str, css: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Wrap a slide-section fragment into a printable 16:9 HTML page.
pub fn wrap_slides_html(fragment: &str, title: &str) -> String {
    page(&format!("{title} - Slides"), SLIDES_CSS, fragment)
}

/// Render Markdown notes as a standalone HTML page.
pub fn wrap_notes_html(markdown: &str, title: &str) -> String {
    page(&format!("{title} - Notes"), NOTES_CSS, &markdown_to_html(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slides_page_embeds_fragment_verbatim() {
        let fragment = r#"<section class="slide"><h2>Intro</h2></section>"#;
        let html = wrap_slides_html(fragment, "My Paper");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(fragment));
        assert!(html.contains("<title>My Paper - Slides</title>"));
        assert!(html.contains("aspect-ratio: 16/9"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = wrap_slides_html("", "<b>A & B</b>");
        assert!(html.contains("<title>&lt;b&gt;A &amp; B&lt;/b&gt; - Slides</title>"));
    }

    #[test]
    fn test_notes_page_renders_markdown() {
        let html = wrap_notes_html("# Heading\n\n- point", "Paper");
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<ul><li>point</li></ul>"));
        assert!(html.contains("<title>Paper - Notes</title>"));
    }
}
