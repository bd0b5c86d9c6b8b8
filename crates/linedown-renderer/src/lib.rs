//! Line-oriented markdown-dialect to HTML conversion.
//!
//! Recognizes a fixed set of leading markers (headers, horizontal rule,
//! emphasis, strong, link, underscore) and renders each input line as a
//! single HTML element wrapping the text left after the marker is stripped.
//! Lines starting with no known marker become paragraphs, so conversion is
//! total: every input string produces output, with no error path.
//!
//! The dialect is deliberately restricted: one element per line, first
//! matching marker wins, no nested inline parsing, no multi-line constructs,
//! and no escaping of HTML-special characters.
//!
//! # Example
//!
//! ```
//! use linedown_renderer::MarkdownConverter;
//!
//! let converter = MarkdownConverter::new();
//! assert_eq!(converter.convert("# Title"), "<h1>Title</h1>");
//! assert_eq!(converter.convert("## A\n### B"), "<h2>A</h2><h3>B</h3>");
//! assert_eq!(converter.convert("plain text"), "<p>plain text</p>");
//! ```

mod chain;
mod converter;
mod document;
mod element;
mod matcher;
mod rules;

pub use chain::{MatchChain, render_element};
pub use converter::MarkdownConverter;
pub use document::DocumentBuilder;
pub use element::{ElementKind, TagCatalog};
pub use matcher::try_strip;
pub use rules::{MatchRule, RULES};

/// Convert `text` using a fresh converter.
///
/// Convenience wrapper around [`MarkdownConverter::convert`] for one-shot
/// callers.
#[must_use]
pub fn convert(text: &str) -> String {
    MarkdownConverter::new().convert(text)
}
