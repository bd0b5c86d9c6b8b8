//! First-match-wins rendering of a single line.

use crate::element::{ElementKind, TagCatalog};
use crate::matcher::try_strip;
use crate::rules::{MatchRule, RULES};

/// Ordered rule chain turning one line into one HTML fragment.
///
/// Rules are tried in table order; the first marker that matches is stripped
/// and the remainder rendered as that rule's kind. A line matching no rule
/// (including the empty line) falls through to a paragraph wrapping the line
/// unchanged, so every line yields exactly one fragment.
#[derive(Clone, Copy, Debug)]
pub struct MatchChain {
    rules: &'static [MatchRule],
}

impl MatchChain {
    /// Chain over the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Render `line` as a single HTML fragment.
    #[must_use]
    pub fn render_line(&self, line: &str) -> String {
        for rule in self.rules {
            if let Some(rest) = try_strip(line, rule.marker) {
                return render_element(rule.kind, rest);
            }
        }
        render_element(ElementKind::Paragraph, line)
    }
}

impl Default for MatchChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap residual line text in the opening and closing tags for `kind`.
///
/// The text goes through verbatim: no escaping, no trimming.
#[must_use]
pub fn render_element(kind: ElementKind, text: &str) -> String {
    let mut fragment = String::with_capacity(text.len() + 16);
    fragment.push_str(&TagCatalog::opening_tag(kind));
    fragment.push_str(text);
    fragment.push_str(&TagCatalog::closing_tag(kind));
    fragment
}
