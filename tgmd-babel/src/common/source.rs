//! Access to the original markup source.
//!
//! Tables are exported by copying their source text verbatim, so the
//! exporter needs a way to look up a byte range of the original document.

/// Returns the exact source text between two byte offsets.
pub trait SourceAccessor: Send + Sync {
    /// `None` when the range is out of bounds, inverted, or splits a character.
    fn slice(&self, begin: usize, end: usize) -> Option<&str>;
}

impl SourceAccessor for str {
    fn slice(&self, begin: usize, end: usize) -> Option<&str> {
        self.get(begin..end)
    }
}

impl SourceAccessor for String {
    fn slice(&self, begin: usize, end: usize) -> Option<&str> {
        self.as_str().slice(begin, end)
    }
}
