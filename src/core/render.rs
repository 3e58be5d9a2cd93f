use pulldown_cmark::{html, Options, Parser};

/// A sanitized completion together with its HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    /// Sanitized markdown as returned by the model.
    pub markdown: String,
    /// CommonMark rendering of `markdown`.
    pub html: String,
}

impl RenderedText {
    pub fn from_markdown(markdown: String) -> Self {
        let html = render_markdown(&markdown);
        Self { markdown, html }
    }
}

pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_emphasis_become_html() {
        let html = render_markdown("# StarLink\n\nA **bold** and *calm* idea.");
        assert!(html.contains("<h1>StarLink</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>calm</em>"));
    }

    #[test]
    fn tables_are_rendered() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn rendered_text_keeps_source() {
        let rendered = RenderedText::from_markdown("- one\n- two".to_string());
        assert_eq!(rendered.markdown, "- one\n- two");
        assert!(rendered.html.contains("<li>one</li>"));
    }
}
