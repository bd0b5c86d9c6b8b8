//! The prioritized marker-to-kind rule table.

use crate::element::ElementKind;

/// A literal leading marker paired with the element kind it selects.
#[derive(Clone, Copy, Debug)]
pub struct MatchRule {
    /// Leading marker, never empty.
    pub marker: &'static str,
    /// Kind rendered when the marker matches.
    pub kind: ElementKind,
}

/// Match rules in priority order; the first matching marker wins.
///
/// Ordering only matters where markers overlap as literal prefixes. Header
/// markers all require a trailing space, so `# ` cannot shadow `## `.
/// `* ` sits ahead of `** ` (and `! ` ahead of `~~ `) but the single-star
/// marker demands a space in position two, which keeps `** ` reachable.
/// The paragraph fallback is not in this table: it applies unconditionally
/// after every rule has failed.
pub const RULES: &[MatchRule] = &[
    MatchRule {
        marker: "# ",
        kind: ElementKind::Header1,
    },
    MatchRule {
        marker: "## ",
        kind: ElementKind::Header2,
    },
    MatchRule {
        marker: "### ",
        kind: ElementKind::Header3,
    },
    MatchRule {
        marker: "#### ",
        kind: ElementKind::Header4,
    },
    MatchRule {
        marker: "##### ",
        kind: ElementKind::Header5,
    },
    MatchRule {
        marker: "###### ",
        kind: ElementKind::Header6,
    },
    MatchRule {
        marker: "---",
        kind: ElementKind::HorizontalRule,
    },
    MatchRule {
        marker: "* ",
        kind: ElementKind::Emphasize,
    },
    MatchRule {
        marker: "** ",
        kind: ElementKind::Strong,
    },
    MatchRule {
        marker: "! ",
        kind: ElementKind::Link,
    },
    MatchRule {
        marker: "~~ ",
        kind: ElementKind::Underscore,
    },
];
