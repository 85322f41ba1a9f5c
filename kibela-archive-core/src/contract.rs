//! # contract: the two external capabilities the pipeline consumes
//!
//! The loader never parses YAML or markdown itself. It goes through:
//! - [`FrontMatterParser`]: `parse(text) -> (metadata, body)`
//! - [`MarkdownRenderer`]: `render(markdown) -> html` (plus the first heading)
//!
//! Concrete implementations live in [`crate::frontmatter`] and [`crate::render`].
//! Both traits carry `automock` so tests can drive the loader with
//! deterministic mocks (`MockFrontMatterParser`, `MockMarkdownRenderer`).

#[cfg(any(test, feature = "test-export-mocks"))]
use mockall::automock;
use thiserror::Error;

/// Front-matter mapping as produced by the parser, before validation.
pub type RawMetadata = serde_yaml::Mapping;

/// A note source split into its metadata block and markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub metadata: RawMetadata,
    pub body: String,
}

/// Output of the markdown renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// The full HTML fragment for the body.
    pub html: String,
    /// Inner HTML of the first heading, if the body has one.
    pub title: Option<String>,
}

/// Why a front-matter block could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FrontMatterError(pub String);

/// Splits a note source into metadata and body.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait FrontMatterParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, FrontMatterError>;
}

/// Renders a markdown body to an HTML fragment.
///
/// Rendering is infallible: any markdown input has some HTML rendering.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> RenderedMarkdown;
}
