//! Foundation types for GraphQL source positions.
//!
//! This crate provides the location types shared by the syntax, scalar and
//! error crates. It has zero external dependencies, making it suitable as a
//! foundation layer.
//!
//! - [`Source`]: a named source text, shared as `Arc<Source>`
//! - [`Location`]: a half-open byte span `[start, end)` within a source
//! - [`SourcePosition`]: a 1-based line/column, as reported in responses
//! - [`LineIndex`]: byte offset to line lookups

mod position;
mod source;

pub use position::{LineIndex, Location, SourcePosition};
pub use source::{Source, DEFAULT_SOURCE_NAME};
