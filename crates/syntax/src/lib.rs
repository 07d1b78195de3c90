//! # GraphQL Literal Syntax
//!
//! Literal value nodes for scalar coercion, and lowering from the
//! `apollo-parser` CST into them.
//!
//! Scalars never parse query text themselves. They receive [`ast::Value`]
//! nodes carrying the literal's raw text and the [`Location`] it came from:
//!
//! ```
//! use std::sync::Arc;
//! use graphql_syntax::{ast, parse_value};
//! use graphql_types::Source;
//!
//! let value = parse_value(Arc::new(Source::new("42"))).unwrap();
//! assert_eq!(value.kind(), ast::ValueKind::Int);
//! assert_eq!(value.location().and_then(|l| l.text()), Some("42"));
//! ```

pub mod ast;
mod lower;

pub use graphql_types::{Location, Source};
pub use lower::{parse_field, parse_value, SyntaxError};
