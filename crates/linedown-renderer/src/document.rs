//! Fragment accumulation.

/// Accumulates rendered fragments in append order.
///
/// Fragments are concatenated verbatim: no separators, no trimming. All
/// document structure comes from the tags inside the fragments themselves.
/// One builder serves one conversion call and is consumed by
/// [`collect`](Self::collect).
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    buf: String,
}

impl DocumentBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment to the document.
    pub fn append(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }

    /// The accumulated document, verbatim.
    #[must_use]
    pub fn collect(self) -> String {
        self.buf
    }
}
