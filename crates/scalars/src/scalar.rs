//! Scalar type definitions.

use std::fmt;
use std::sync::Arc;

use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::Value;

/// Converts an internal value to its output representation.
pub type SerializeFn = Arc<dyn Fn(&Value) -> Option<ScalarValue> + Send + Sync>;
/// Converts loosely-typed input (such as a JSON variable) to an internal value.
pub type ParseValueFn = Arc<dyn Fn(&Value) -> Option<ScalarValue> + Send + Sync>;
/// Converts a literal node from query text to an internal value.
pub type ParseLiteralFn = Arc<dyn Fn(&ast::Value) -> Option<ScalarValue> + Send + Sync>;

/// Errors raised when a scalar definition is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarDefinitionError {
    #[error("Names must match /^[_a-zA-Z][_a-zA-Z0-9]*$/ but \"{0}\" does not.")]
    InvalidName(String),

    #[error("{0} must provide \"serialize\" function. If this custom Scalar is also used as an input type, ensure \"parse_value\" and \"parse_literal\" functions are also provided.")]
    MissingSerialize(String),

    #[error("{0} must provide both \"parse_value\" and \"parse_literal\" functions.")]
    IncompleteParsers(String),
}

/// Configuration for a custom scalar, validated by [`ScalarType::new`].
///
/// ```
/// use graphql_scalars::{ScalarConfig, ScalarType, ScalarValue, Value};
///
/// let odd = ScalarType::new(
///     ScalarConfig::new("Odd")
///         .description("An odd integer")
///         .serialize(|value| match value {
///             Value::Int(n) if n.narrow().is_some_and(|n| n % 2 != 0) => {
///                 n.narrow().map(ScalarValue::Int)
///             }
///             _ => None,
///         }),
/// )
/// .unwrap();
///
/// assert_eq!(odd.serialize(&Value::from(3)), Some(ScalarValue::Int(3)));
/// assert_eq!(odd.serialize(&Value::from(4)), None);
/// ```
#[derive(Clone, Default)]
pub struct ScalarConfig {
    pub name: String,
    pub description: Option<String>,
    pub serialize: Option<SerializeFn>,
    pub parse_value: Option<ParseValueFn>,
    pub parse_literal: Option<ParseLiteralFn>,
}

impl ScalarConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn serialize(
        mut self,
        f: impl Fn(&Value) -> Option<ScalarValue> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn parse_value(
        mut self,
        f: impl Fn(&Value) -> Option<ScalarValue> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn parse_literal(
        mut self,
        f: impl Fn(&ast::Value) -> Option<ScalarValue> + Send + Sync + 'static,
    ) -> Self {
        self.parse_literal = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for ScalarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarConfig")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("serialize", &self.serialize.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("parse_literal", &self.parse_literal.is_some())
            .finish()
    }
}

/// A leaf type of the schema, with its three coercion functions.
///
/// Definitions are immutable once built and cheap to clone; the functions are
/// shared. Every method is safe to call concurrently.
#[derive(Clone)]
pub struct ScalarType {
    name: String,
    description: Option<String>,
    serialize: SerializeFn,
    parsers: Option<(ParseValueFn, ParseLiteralFn)>,
}

impl ScalarType {
    /// Validate a config and build a scalar from it.
    ///
    /// A scalar without parsers is output-only: `parse_value` and
    /// `parse_literal` always return `None`.
    pub fn new(config: ScalarConfig) -> Result<Self, ScalarDefinitionError> {
        let ScalarConfig {
            name,
            description,
            serialize,
            parse_value,
            parse_literal,
        } = config;

        if !is_valid_name(&name) {
            return Err(ScalarDefinitionError::InvalidName(name));
        }
        let Some(serialize) = serialize else {
            return Err(ScalarDefinitionError::MissingSerialize(name));
        };
        let parsers = match (parse_value, parse_literal) {
            (Some(value), Some(literal)) => Some((value, literal)),
            (None, None) => None,
            _ => return Err(ScalarDefinitionError::IncompleteParsers(name)),
        };

        tracing::debug!(scalar = %name, input = parsers.is_some(), "Defined scalar");

        Ok(Self {
            name,
            description,
            serialize,
            parsers,
        })
    }

    pub(crate) fn builtin(
        name: &str,
        description: &str,
        serialize: fn(&Value) -> Option<ScalarValue>,
        parse_value: fn(&Value) -> Option<ScalarValue>,
        parse_literal: fn(&ast::Value) -> Option<ScalarValue>,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
            serialize: Arc::new(serialize),
            parsers: Some((Arc::new(parse_value), Arc::new(parse_literal))),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this scalar accepts input (has `parse_value`/`parse_literal`).
    #[must_use]
    pub const fn is_input_type(&self) -> bool {
        self.parsers.is_some()
    }

    /// Internal value to output value.
    #[must_use]
    pub fn serialize(&self, value: &Value) -> Option<ScalarValue> {
        let result = (self.serialize)(value);
        if result.is_none() {
            tracing::trace!(scalar = %self.name, kind = value.kind_name(), "serialize produced no value");
        }
        result
    }

    /// Loosely-typed input value to internal value.
    #[must_use]
    pub fn parse_value(&self, value: &Value) -> Option<ScalarValue> {
        let result = self.parsers.as_ref().and_then(|(parse, _)| parse(value));
        if result.is_none() {
            tracing::trace!(scalar = %self.name, kind = value.kind_name(), "parse_value produced no value");
        }
        result
    }

    /// Literal node to internal value.
    #[must_use]
    pub fn parse_literal(&self, literal: &ast::Value) -> Option<ScalarValue> {
        let result = self.parsers.as_ref().and_then(|(_, parse)| parse(literal));
        if result.is_none() {
            tracing::trace!(scalar = %self.name, kind = %literal.kind(), "parse_literal produced no value");
        }
        result
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Names must match `/^[_a-zA-Z][_a-zA-Z0-9]*$/`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
