//! Literal value nodes consumed by scalar coercion and error reporting.
//!
//! These nodes are deliberately small: each carries the raw source text of
//! the literal (scalars re-parse it with their own rules) and the
//! [`Location`] it was parsed from, if any.

use std::sync::Arc;

use graphql_types::Location;

/// A name token, such as a field, argument or variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub value: Arc<str>,
    pub loc: Option<Location>,
}

impl Name {
    #[must_use]
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// `$name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: Name,
    pub loc: Option<Location>,
}

/// An integer literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Location>,
}

/// A float literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Location>,
}

/// A string literal. `value` holds the unescaped contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValue {
    pub value: String,
    /// Whether the literal used block string (`"""`) syntax
    pub block: bool,
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullValue {
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

/// Any value that can appear in an argument or variable default position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

/// The kind of a [`Value`] node, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Variable => "Variable",
            Self::Int => "IntValue",
            Self::Float => "FloatValue",
            Self::String => "StringValue",
            Self::Boolean => "BooleanValue",
            Self::Null => "NullValue",
            Self::Enum => "EnumValue",
            Self::List => "ListValue",
            Self::Object => "ObjectValue",
        };
        f.write_str(name)
    }
}

impl Value {
    /// An integer literal without a location.
    #[must_use]
    pub fn int(text: impl Into<String>) -> Self {
        Self::Int(IntValue {
            value: text.into(),
            loc: None,
        })
    }

    /// A float literal without a location.
    #[must_use]
    pub fn float(text: impl Into<String>) -> Self {
        Self::Float(FloatValue {
            value: text.into(),
            loc: None,
        })
    }

    /// A (non-block) string literal without a location.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringValue {
            value: value.into(),
            block: false,
            loc: None,
        })
    }

    /// A boolean literal without a location.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean(BooleanValue { value, loc: None })
    }

    /// A `null` literal without a location.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null(NullValue { loc: None })
    }

    /// An enum literal without a location.
    #[must_use]
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(EnumValue {
            value: value.into(),
            loc: None,
        })
    }

    /// A variable reference without a location.
    #[must_use]
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Self::Variable(Variable {
            name: Name::new(name),
            loc: None,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Variable(_) => ValueKind::Variable,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null(_) => ValueKind::Null,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::Variable(v) => v.loc.as_ref(),
            Self::Int(v) => v.loc.as_ref(),
            Self::Float(v) => v.loc.as_ref(),
            Self::String(v) => v.loc.as_ref(),
            Self::Boolean(v) => v.loc.as_ref(),
            Self::Null(v) => v.loc.as_ref(),
            Self::Enum(v) => v.loc.as_ref(),
            Self::List(v) => v.loc.as_ref(),
            Self::Object(v) => v.loc.as_ref(),
        }
    }

    /// Attach a location to this node, replacing any existing one.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        let slot = match &mut self {
            Self::Variable(v) => &mut v.loc,
            Self::Int(v) => &mut v.loc,
            Self::Float(v) => &mut v.loc,
            Self::String(v) => &mut v.loc,
            Self::Boolean(v) => &mut v.loc,
            Self::Null(v) => &mut v.loc,
            Self::Enum(v) => &mut v.loc,
            Self::List(v) => &mut v.loc,
            Self::Object(v) => &mut v.loc,
        };
        *slot = Some(location);
        self
    }
}

/// `name: value` inside a field's argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Location>,
}

/// A field selection, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
}

impl Field {
    /// The key this field appears under in a response.
    #[must_use]
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.as_str() == name)
    }
}

/// A syntax node that can be implicated in an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Name(Name),
    Value(Value),
    Argument(Argument),
    Field(Field),
}

impl Node {
    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        match self {
            Self::Name(n) => n.loc.as_ref(),
            Self::Value(v) => v.location(),
            Self::Argument(a) => a.loc.as_ref(),
            Self::Field(f) => f.loc.as_ref(),
        }
    }
}

impl From<Name> for Node {
    fn from(name: Name) -> Self {
        Self::Name(name)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Argument> for Node {
    fn from(argument: Argument) -> Self {
        Self::Argument(argument)
    }
}

impl From<Field> for Node {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_types::Source;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::int("1").kind(), ValueKind::Int);
        assert_eq!(Value::float("1.5").kind(), ValueKind::Float);
        assert_eq!(Value::string("a").kind(), ValueKind::String);
        assert_eq!(Value::boolean(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::null().kind(), ValueKind::Null);
        assert_eq!(Value::enum_value("RED").kind(), ValueKind::Enum);
        assert_eq!(Value::variable("id").kind(), ValueKind::Variable);
    }

    #[test]
    fn test_value_kind_display() {
        assert_eq!(ValueKind::Int.to_string(), "IntValue");
        assert_eq!(ValueKind::Variable.to_string(), "Variable");
    }

    #[test]
    fn test_with_location() {
        let source = Arc::new(Source::new("42"));
        let value = Value::int("42").with_location(Location::new(0, 2, source));
        assert_eq!(value.location().map(|l| (l.start, l.end)), Some((0, 2)));
        assert_eq!(Value::int("42").location(), None);
    }

    #[test]
    fn test_field_response_key() {
        let mut field = Field {
            alias: None,
            name: Name::new("user"),
            arguments: vec![Argument {
                name: Name::new("id"),
                value: Value::int("4"),
                loc: None,
            }],
            loc: None,
        };
        assert_eq!(field.response_key(), "user");
        field.alias = Some(Name::new("me"));
        assert_eq!(field.response_key(), "me");
        assert_eq!(field.argument("id").map(|a| &a.value), Some(&Value::int("4")));
        assert!(field.argument("name").is_none());
    }

    #[test]
    fn test_node_location() {
        let source = Arc::new(Source::new("true"));
        let loc = Location::new(0, 4, source);
        let node = Node::from(Value::boolean(true).with_location(loc.clone()));
        assert_eq!(node.location(), Some(&loc));
        assert_eq!(Node::from(Name::new("a")).location(), None);
    }
}
