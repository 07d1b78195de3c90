//! Source text that locations point into.

use std::sync::Arc;

use crate::position::{LineIndex, SourcePosition};

/// Name given to sources that were not loaded from a named file.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// A named GraphQL source text.
///
/// Sources are created once per parse and shared (as `Arc<Source>`) by every
/// [`Location`](crate::Location) derived from that parse.
#[derive(Debug, PartialEq, Eq)]
pub struct Source {
    name: Arc<str>,
    body: Arc<str>,
    line_index: LineIndex,
}

impl Source {
    /// Create a source with the default request name.
    #[must_use]
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self::with_name(DEFAULT_SOURCE_NAME, body)
    }

    /// Create a source with an explicit name (usually a file path or URI).
    #[must_use]
    pub fn with_name(name: impl Into<Arc<str>>, body: impl Into<Arc<str>>) -> Self {
        let body = body.into();
        let line_index = LineIndex::new(&body);
        Self {
            name: name.into(),
            body,
            line_index,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub const fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Convert a byte offset into a 1-based line/column position.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the body
    /// are clamped to the end.
    #[must_use]
    pub fn position_at(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.body.len());
        let (line, byte_column) = self.line_index.line_col(offset);
        let line_start = offset - byte_column;
        let column = self
            .body
            .get(line_start..offset)
            .map_or(byte_column, |prefix| prefix.chars().count());

        SourcePosition::new(line + 1, column + 1)
    }

    /// The text of a 1-based line, without its terminator.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = self.line_index.line_start(line.checked_sub(1)?)?;
        let end = self
            .line_index
            .line_start(line)
            .unwrap_or(self.body.len());
        self.body
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}
