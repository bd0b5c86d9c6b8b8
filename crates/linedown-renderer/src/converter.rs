//! The top-level conversion driver.

use crate::chain::MatchChain;
use crate::document::DocumentBuilder;

/// Single-pass converter from the linedown dialect to HTML.
///
/// Holds only the read-only rule chain, so one instance can be shared
/// freely; [`convert`](Self::convert) is reentrant and keeps no state
/// across calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownConverter {
    chain: MatchChain,
}

impl MarkdownConverter {
    /// Converter over the built-in rule chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert raw text into one HTML string, one fragment per line.
    ///
    /// Lines are split on `\n` only; a carriage return stays inside the
    /// line content of its fragment. The function is total: the empty
    /// string splits into a single empty line and still yields `<p></p>`,
    /// and a trailing newline contributes a final empty paragraph.
    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        let mut doc = DocumentBuilder::new();
        for line in text.split('\n') {
            doc.append(&self.chain.render_line(line));
        }
        doc.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_paragraph() {
        assert_eq!(MarkdownConverter::new().convert(""), "<p></p>");
    }

    #[test]
    fn test_one_fragment_per_line() {
        let converter = MarkdownConverter::new();
        let html = converter.convert("# A\nplain\n---");
        assert_eq!(html, "<h1>A</h1><p>plain</p><hr></hr>");
    }

    #[test]
    fn test_trailing_newline_adds_empty_paragraph() {
        assert_eq!(MarkdownConverter::new().convert("# A\n"), "<h1>A</h1><p></p>");
    }

    #[test]
    fn test_carriage_return_stays_in_line_content() {
        assert_eq!(
            MarkdownConverter::new().convert("a\r\nb"),
            "<p>a\r</p><p>b</p>"
        );
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let converter = MarkdownConverter::new();
        let input = "# T\n** b\n~~ u\n\nend";
        assert_eq!(converter.convert(input), converter.convert(input));
    }

    #[test]
    fn test_fragment_count_matches_line_count() {
        let converter = MarkdownConverter::new();
        let input = "a\nb\n\nc\n";
        let lines = input.split('\n').count();
        let html = converter.convert(input);
        assert_eq!(html.matches("</").count(), lines);
    }
}
