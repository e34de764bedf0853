//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Markdown renderer for project bodies
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Plain-text summary: the first paragraph of the body, markup stripped
    pub fn first_paragraph(markdown: &str) -> Option<String> {
        let mut text = String::new();
        let mut in_paragraph = false;

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Paragraph) => in_paragraph = true,
                Event::End(TagEnd::Paragraph) if in_paragraph => break,
                Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
                _ => {}
            }
        }

        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("## Overview\n\nThis is a test.");
        assert!(html.contains("<h2>Overview</h2>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_first_paragraph() {
        let md = "## Heading\n\nFirst *paragraph*\nwrapped.\n\nSecond.";
        assert_eq!(
            MarkdownRenderer::first_paragraph(md).as_deref(),
            Some("First paragraph wrapped.")
        );
        assert_eq!(MarkdownRenderer::first_paragraph("## Only a heading"), None);
    }
}
