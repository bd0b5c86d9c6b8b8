//! Element kinds and their HTML tag mapping.

/// Semantic kind of a rendered line.
///
/// The set is closed: every line the converter emits is wrapped in the tags
/// of exactly one of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Paragraph,
    Header1,
    Header2,
    Header3,
    Header4,
    Header5,
    Header6,
    Underscore,
    Emphasize,
    Strong,
    Link,
    HorizontalRule,
}

impl ElementKind {
    /// All kinds, for exhaustive table checks.
    pub const ALL: [Self; 12] = [
        Self::Paragraph,
        Self::Header1,
        Self::Header2,
        Self::Header3,
        Self::Header4,
        Self::Header5,
        Self::Header6,
        Self::Underscore,
        Self::Emphasize,
        Self::Strong,
        Self::Link,
        Self::HorizontalRule,
    ];
}

/// Tag emitted when a kind is missing from the catalog table.
const FALLBACK_TAG: &str = "p";

/// Kind to tag name table. Read-only after process start.
const TAG_TABLE: &[(ElementKind, &str)] = &[
    (ElementKind::Paragraph, "p"),
    (ElementKind::Header1, "h1"),
    (ElementKind::Header2, "h2"),
    (ElementKind::Header3, "h3"),
    (ElementKind::Header4, "h4"),
    (ElementKind::Header5, "h5"),
    (ElementKind::Header6, "h6"),
    (ElementKind::Underscore, "u"),
    (ElementKind::Emphasize, "em"),
    (ElementKind::Strong, "strong"),
    (ElementKind::Link, "a"),
    (ElementKind::HorizontalRule, "hr"),
];

/// Lookup from [`ElementKind`] to HTML tag strings.
///
/// A kind absent from the table falls back to the paragraph tag instead of
/// failing. The closing tag is always the `</tag>` pairing of the opening
/// tag, even for void elements: a horizontal rule renders as `<hr></hr>`,
/// not `<hr/>`.
pub struct TagCatalog;

impl TagCatalog {
    /// Bare tag name for `kind`.
    #[must_use]
    pub fn tag_name(kind: ElementKind) -> &'static str {
        TAG_TABLE
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(FALLBACK_TAG, |(_, tag)| *tag)
    }

    /// Opening tag for `kind`, e.g. `<h1>`.
    #[must_use]
    pub fn opening_tag(kind: ElementKind) -> String {
        format!("<{}>", Self::tag_name(kind))
    }

    /// Closing tag for `kind`, e.g. `</h1>`.
    #[must_use]
    pub fn closing_tag(kind: ElementKind) -> String {
        format!("</{}>", Self::tag_name(kind))
    }
}
