//! Errors annotated with the syntax nodes that caused them.

use std::error::Error;
use std::fmt::{self, Write as _};
use std::sync::Arc;

use graphql_syntax::ast::Node;
use graphql_types::SourcePosition;
use serde::{Deserialize, Serialize};

use crate::failure::{Failure, MessageError};

const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// A failure together with the source nodes implicated in it.
///
/// `nodes` may be empty (the error is unrelated to a position) or hold
/// several nodes, such as every offending element of a list literal.
#[derive(Debug, Clone)]
pub struct LocatedError {
    pub message: String,
    pub nodes: Vec<Node>,
    /// Diagnostic stack string. Equal to the message; capturing a real trace
    /// is up to the caller.
    pub stack: String,
    pub original_error: Option<Arc<dyn Error + Send + Sync>>,
}

impl LocatedError {
    /// Build a located error from a failure and the nodes responsible for it.
    ///
    /// ```
    /// use graphql_errors::{Failure, LocatedError};
    /// use graphql_syntax::ast::{Node, Value};
    ///
    /// let err = LocatedError::new("boom", [Node::from(Value::int("1"))]);
    /// assert_eq!(err.message, "boom");
    /// assert!(err.original_error.is_some());
    ///
    /// let err = LocatedError::new(Failure::Other, []);
    /// assert_eq!(err.message, "An unknown error occurred.");
    /// assert!(err.original_error.is_none());
    /// ```
    pub fn new(failure: impl Into<Failure>, nodes: impl IntoIterator<Item = Node>) -> Self {
        let (message, original_error) = match failure.into() {
            Failure::Error(error) => (error.to_string(), Some(error)),
            Failure::Message(message) => {
                let error: Arc<dyn Error + Send + Sync> =
                    Arc::new(MessageError(message.clone()));
                (message, Some(error))
            }
            Failure::Other => (UNKNOWN_ERROR.to_string(), None),
        };
        let nodes: Vec<Node> = nodes.into_iter().collect();

        tracing::debug!(message = %message, nodes = nodes.len(), "Located error");

        Self {
            stack: message.clone(),
            message,
            nodes,
            original_error,
        }
    }

    /// 1-based positions of every node that has a location, in node order.
    #[must_use]
    pub fn locations(&self) -> Vec<SourcePosition> {
        self.nodes
            .iter()
            .filter_map(Node::location)
            .map(graphql_types::Location::start_position)
            .collect()
    }

    /// The response-format representation of this error.
    #[must_use]
    pub fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError {
            message: self.message.clone(),
            locations: self
                .locations()
                .into_iter()
                .map(ErrorLocation::from)
                .collect(),
        }
    }

    /// Render the message followed by an excerpt of the source at each
    /// location.
    #[must_use]
    pub fn print(&self) -> String {
        let mut out = self.message.clone();

        for location in self.nodes.iter().filter_map(Node::location) {
            let position = location.start_position();
            let source = &location.source;
            let _ = write!(out, "\n\n{}:{position}", source.name());

            if let Some(line) = source.line_text(position.line) {
                let gutter = position.line.to_string();
                let pad = " ".repeat(gutter.len());
                let _ = write!(
                    out,
                    "\n{gutter} | {line}\n{pad} | {}^",
                    " ".repeat(position.column - 1)
                );
            }
        }

        out
    }
}

impl fmt::Display for LocatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for LocatedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.original_error
            .as_deref()
            .map(|error| error as &(dyn Error + 'static))
    }
}

/// A location as it appears in a GraphQL response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

impl From<SourcePosition> for ErrorLocation {
    fn from(position: SourcePosition) -> Self {
        Self {
            line: position.line,
            column: position.column,
        }
    }
}

/// A serializable error, as found in the `errors` list of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
}

impl From<&LocatedError> for GraphQLError {
    fn from(error: &LocatedError) -> Self {
        error.to_graphql_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_syntax::ast::{Name, Value};
    use graphql_types::{Location, Source};

    fn located_value(source: &Arc<Source>, start: usize, end: usize) -> Node {
        Node::from(Value::int("1").with_location(Location::new(start, end, Arc::clone(source))))
    }

    #[test]
    fn test_plain_message() {
        let a = Node::from(Value::int("1"));
        let b = Node::from(Name::new("field"));
        let err = LocatedError::new("boom", [a.clone(), b.clone()]);

        assert_eq!(err.message, "boom");
        assert_eq!(err.stack, "boom");
        assert_eq!(err.nodes, vec![a, b]);
        let cause = err.original_error.as_ref().unwrap();
        assert_eq!(cause.to_string(), "boom");
        assert!(cause.downcast_ref::<MessageError>().is_some());
    }

    #[test]
    fn test_structured_error_is_preserved() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = LocatedError::new(Failure::error(cause), []);

        assert_eq!(err.message, "bad bytes");
        assert_eq!(err.stack, "bad bytes");
        let original = err.original_error.as_ref().unwrap();
        assert!(original.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(err.source().map(ToString::to_string), Some("bad bytes".to_string()));
    }

    #[test]
    fn test_unknown_failure() {
        let err = LocatedError::new(Failure::from_payload(Box::new(42)), []);
        assert_eq!(err.message, "An unknown error occurred.");
        assert_eq!(err.stack, err.message);
        assert!(err.original_error.is_none());
        assert!(err.source().is_none());
        assert!(err.nodes.is_empty());
    }

    #[test]
    fn test_locations_skip_unlocated_nodes() {
        let source = Arc::new(Source::new("{\n  f(a: 1, b: 2)\n}"));
        let err = LocatedError::new(
            "bad",
            [
                located_value(&source, 9, 10),
                Node::from(Value::int("0")),
                located_value(&source, 15, 16),
            ],
        );
        assert_eq!(
            err.locations(),
            vec![SourcePosition::new(2, 8), SourcePosition::new(2, 14)]
        );
    }

    #[test]
    fn test_graphql_error_omits_empty_locations() {
        let err = LocatedError::new("no position", []);
        assert_eq!(
            serde_json::to_string(&err.to_graphql_error()).unwrap(),
            r#"{"message":"no position"}"#
        );
    }

    #[test]
    fn test_print_with_excerpt() {
        let source = Arc::new(Source::new("{\n  f(a: 1, b: 2)\n}"));
        let err = LocatedError::new("Int cannot represent it", [located_value(&source, 9, 10)]);
        assert_eq!(
            err.print(),
            "Int cannot represent it\n\nGraphQL request:2:8\n2 |   f(a: 1, b: 2)\n  |        ^"
        );
    }

    #[test]
    fn test_display_is_message_only() {
        let source = Arc::new(Source::new("{ f }"));
        let err = LocatedError::new("short", [located_value(&source, 2, 3)]);
        assert_eq!(err.to_string(), "short");
    }
}
