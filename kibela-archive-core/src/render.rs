//! CommonMark rendering with title capture.
//!
//! The index page labels every link with the note's title, which is the
//! first heading of the body. Instead of re-deriving it from the rendered
//! page, the renderer pulls the heading's inline events out of the same
//! event stream and renders only those.

use crate::contract::{MarkdownRenderer, RenderedMarkdown};
use pulldown_cmark::{html, Event, Options, Parser, Tag};

/// [`MarkdownRenderer`] backed by `pulldown-cmark`, with the GFM extensions
/// Kibela exports rely on (tables, strikethrough, task lists).
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> RenderedMarkdown {
        let events: Vec<Event<'_>> = Parser::new_ext(markdown, self.options).collect();
        let title = first_heading_html(&events);

        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, events.into_iter());
        RenderedMarkdown { html: out, title }
    }
}

/// Inner HTML of the first heading. Headings never nest, so the first
/// heading end after the start closes it.
fn first_heading_html(events: &[Event<'_>]) -> Option<String> {
    let start = events
        .iter()
        .position(|e| matches!(e, Event::Start(Tag::Heading(..))))?;
    let len = events[start + 1..]
        .iter()
        .position(|e| matches!(e, Event::End(Tag::Heading(..))))?;

    let mut title = String::new();
    html::push_html(
        &mut title,
        events[start + 1..start + 1 + len].iter().cloned(),
    );
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(md: &str) -> RenderedMarkdown {
        CommonMarkRenderer::default().render(md)
    }

    #[test]
    fn captures_first_atx_heading() {
        let out = render("# Weekly meeting\n\nnotes here\n\n## Later\n");
        assert_eq!(out.title.as_deref(), Some("Weekly meeting"));
        assert!(out.html.starts_with("<h1>Weekly meeting</h1>\n"));
    }

    #[test]
    fn title_keeps_inline_markup_and_escapes_text() {
        let out = render("## Using `Vec<T>` *well*\n");
        assert_eq!(
            out.title.as_deref(),
            Some("Using <code>Vec&lt;T&gt;</code> <em>well</em>")
        );
    }

    #[test]
    fn setext_heading_counts() {
        let out = render("intro\n\nTitle\n=====\n");
        assert_eq!(out.title.as_deref(), Some("Title"));
    }

    #[test]
    fn no_heading_no_title() {
        let out = render("just a paragraph\n");
        assert_eq!(out.title, None);
        assert_eq!(out.html, "<p>just a paragraph</p>\n");
    }

    #[test]
    fn empty_heading_no_title() {
        assert_eq!(render("#\n\ntext\n").title, None);
    }

    #[test]
    fn gfm_tables_and_strikethrough_render() {
        let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n");
        assert!(out.html.contains("<table>"));
        assert!(out.html.contains("<del>gone</del>"));
    }
}
