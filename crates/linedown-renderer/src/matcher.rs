//! Literal line-prefix matching.
//!
//! The single primitive every match rule composes from: a case-sensitive,
//! byte-exact prefix test that strips the marker on success.

/// Strip the literal `marker` from the front of `line`.
///
/// Returns the remainder with exactly `marker.len()` bytes removed, with no
/// trimming or normalization, or `None` when the line does not start with
/// the marker. An empty line never matches, regardless of the marker.
#[must_use]
pub fn try_strip<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if line.is_empty() {
        return None;
    }
    line.strip_prefix(marker)
}
