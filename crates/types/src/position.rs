//! Position and location types for spans of GraphQL source text.

use std::sync::Arc;

use crate::source::Source;

/// Half-open byte range `[start, end)` within a [`Source`].
///
/// Created once per syntax node during parsing and read-only afterwards. The
/// source is shared, never owned, by every location derived from the same
/// parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The source text this location points into
    pub source: Arc<Source>,
}

impl Location {
    /// Create a new location.
    ///
    /// An `end` before `start` is raised to `start`, producing an empty span.
    #[must_use]
    pub fn new(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self {
            start,
            end: end.max(start),
            source,
        }
    }

    /// Returns the length of this location in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this is a zero-width location.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The source text covered by this location.
    ///
    /// Returns `None` when the range is out of bounds or splits a character.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.source.body().get(self.start..self.end)
    }

    /// 1-based line/column of the start of this location.
    #[must_use]
    pub fn start_position(&self) -> SourcePosition {
        self.source.position_at(self.start)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.start_position();
        write!(f, "{}:{}", self.source.name(), position)
    }
}

/// Line and column of a point in a source, both 1-based.
///
/// This is the convention GraphQL responses use for error `locations`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line index for converting byte offsets to lines.
///
/// Recognizes `\n`, `\r\n` and a lone `\r` as line terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the start of each line
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new line index from source text
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = text.as_bytes();

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position (0-based, column in bytes)
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i.saturating_sub(1));

        let col = offset - self.line_starts[line];
        (line, col)
    }

    /// Get the byte offset of the start of a line (0-based)
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get the number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str) -> Arc<Source> {
        Arc::new(Source::new(text))
    }

    #[test]
    fn test_location_creation() {
        let loc = Location::new(2, 7, source("{ hello }"));
        assert_eq!(loc.start, 2);
        assert_eq!(loc.end, 7);
        assert_eq!(loc.len(), 5);
        assert!(!loc.is_empty());
        assert_eq!(loc.text(), Some("hello"));
    }

    #[test]
    fn test_location_end_before_start_is_empty() {
        let loc = Location::new(5, 3, source("abcdefg"));
        assert_eq!(loc.end, 5);
        assert!(loc.is_empty());
        assert_eq!(loc.text(), Some(""));
    }

    #[test]
    fn test_location_out_of_bounds_text() {
        let loc = Location::new(3, 40, source("abc"));
        assert_eq!(loc.text(), None);
    }

    #[test]
    fn test_locations_share_source() {
        let src = source("{ a b }");
        let a = Location::new(2, 3, Arc::clone(&src));
        let b = Location::new(4, 5, Arc::clone(&src));
        assert!(Arc::ptr_eq(&a.source, &b.source));
        assert_eq!(Arc::strong_count(&src), 3);
    }

    #[test]
    fn test_location_display() {
        let src = Arc::new(Source::with_name("schema.graphql", "type A {\n  b: Int\n}"));
        let loc = Location::new(11, 12, src);
        assert_eq!(loc.to_string(), "schema.graphql:2:3");
    }

    #[test]
    fn test_source_position_ordering() {
        assert!(SourcePosition::new(1, 9) < SourcePosition::new(2, 1));
        assert!(SourcePosition::new(2, 1) < SourcePosition::new(2, 4));
    }

    #[test]
    fn test_line_index_new() {
        let text = "line 1\nline 2\nline 3";
        let index = LineIndex::new(text);

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(7));
        assert_eq!(index.line_start(2), Some(14));
    }

    #[test]
    fn test_line_index_carriage_returns() {
        let index = LineIndex::new("a\r\nb\rc");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(1), Some(3));
        assert_eq!(index.line_start(2), Some(5));
    }

    #[test]
    fn test_line_index_line_col() {
        let index = LineIndex::new("line 1\nline 2\nline 3");

        assert_eq!(index.line_col(0), (0, 0));
        assert_eq!(index.line_col(5), (0, 5));
        assert_eq!(index.line_col(7), (1, 0));
        assert_eq!(index.line_col(10), (1, 3));
        assert_eq!(index.line_col(14), (2, 0));
    }

    #[test]
    fn test_line_index_empty() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), (0, 0));
    }
}
