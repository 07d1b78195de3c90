//! Loosely-typed values entering or leaving the scalar coercion functions.
//!
//! [`Value`] is a closed set of input kinds. Every coercion unit matches it
//! exhaustively, so the behavior for each kind is visible in one place.
//! References to primitives convert through the same `From` impls as the
//! primitives themselves, so callers never need a separate by-reference path.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

/// A value handed to `serialize` or `parse_value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int(Integer),
    Float(Floating),
    String(String),
    /// Raw bytes, typically UTF-8 text read from a transport
    Bytes(Vec<u8>),
    DateTime(DateTime<FixedOffset>),
    /// A value that knows how to render itself as text
    Text(Textual),
    List(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// An integer of any primitive width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integer {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
}

impl Integer {
    /// The value as an `i64`, if it is of a width that always fits.
    ///
    /// Wide kinds (`i128`, `u64`, `u128`, `usize`) return `None` even when
    /// their current value would fit; callers must widen them through `f64`.
    #[must_use]
    pub const fn narrow(self) -> Option<i64> {
        match self {
            Self::I8(n) => Some(n as i64),
            Self::I16(n) => Some(n as i64),
            Self::I32(n) => Some(n as i64),
            Self::I64(n) => Some(n),
            Self::Isize(n) => Some(n as i64),
            Self::U8(n) => Some(n as i64),
            Self::U16(n) => Some(n as i64),
            Self::U32(n) => Some(n as i64),
            Self::I128(_) | Self::U64(_) | Self::U128(_) | Self::Usize(_) => None,
        }
    }

    /// The value converted to the nearest `f64`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::I8(n) => n as f64,
            Self::I16(n) => n as f64,
            Self::I32(n) => n as f64,
            Self::I64(n) => n as f64,
            Self::I128(n) => n as f64,
            Self::Isize(n) => n as f64,
            Self::U8(n) => n as f64,
            Self::U16(n) => n as f64,
            Self::U32(n) => n as f64,
            Self::U64(n) => n as f64,
            Self::U128(n) => n as f64,
            Self::Usize(n) => n as f64,
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        match self {
            Self::I8(n) => n == 0,
            Self::I16(n) => n == 0,
            Self::I32(n) => n == 0,
            Self::I64(n) => n == 0,
            Self::I128(n) => n == 0,
            Self::Isize(n) => n == 0,
            Self::U8(n) => n == 0,
            Self::U16(n) => n == 0,
            Self::U32(n) => n == 0,
            Self::U64(n) => n == 0,
            Self::U128(n) => n == 0,
            Self::Usize(n) => n == 0,
        }
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(n) => fmt::Display::fmt(n, f),
            Self::I16(n) => fmt::Display::fmt(n, f),
            Self::I32(n) => fmt::Display::fmt(n, f),
            Self::I64(n) => fmt::Display::fmt(n, f),
            Self::I128(n) => fmt::Display::fmt(n, f),
            Self::Isize(n) => fmt::Display::fmt(n, f),
            Self::U8(n) => fmt::Display::fmt(n, f),
            Self::U16(n) => fmt::Display::fmt(n, f),
            Self::U32(n) => fmt::Display::fmt(n, f),
            Self::U64(n) => fmt::Display::fmt(n, f),
            Self::U128(n) => fmt::Display::fmt(n, f),
            Self::Usize(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// A floating point number, keeping track of its original width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Floating {
    F32(f32),
    F64(f64),
}

impl Floating {
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::F32(n) => f64::from(n),
            Self::F64(n) => n,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::F32(n) => n == 0.0,
            Self::F64(n) => n == 0.0,
        }
    }
}

impl fmt::Display for Floating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F32(n) => fmt::Display::fmt(n, f),
            Self::F64(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// A shared value rendered through its own `Display` implementation.
#[derive(Clone)]
pub struct Textual(Arc<dyn fmt::Display + Send + Sync>);

impl Textual {
    pub fn new(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self(Arc::new(value))
    }
}

impl fmt::Display for Textual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Textual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Textual").field(&self.0.to_string()).finish()
    }
}

impl PartialEq for Textual {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

impl Value {
    /// Wrap any `Display` value so it renders itself when coerced to a string.
    pub fn text(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Text(Textual::new(value))
    }

    /// Name of this value's kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::DateTime(_) => "date-time",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Default human-readable rendering, used when a value is coerced to a string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => fmt::Display::fmt(b, f),
            Self::Int(n) => fmt::Display::fmt(n, f),
            Self::Float(n) => fmt::Display::fmt(n, f),
            Self::String(s) => f.write_str(s),
            Self::Bytes(bytes) => write!(f, "{bytes:?}"),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Text(text) => fmt::Display::fmt(text, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Object(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => |$v:ident| $expr:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $expr
                }
            }

            impl From<&$ty> for Value {
                fn from($v: &$ty) -> Self {
                    let $v = *$v;
                    $expr
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => |v| Self::Boolean(v),
    i8 => |v| Self::Int(Integer::I8(v)),
    i16 => |v| Self::Int(Integer::I16(v)),
    i32 => |v| Self::Int(Integer::I32(v)),
    i64 => |v| Self::Int(Integer::I64(v)),
    i128 => |v| Self::Int(Integer::I128(v)),
    isize => |v| Self::Int(Integer::Isize(v)),
    u8 => |v| Self::Int(Integer::U8(v)),
    u16 => |v| Self::Int(Integer::U16(v)),
    u32 => |v| Self::Int(Integer::U32(v)),
    u64 => |v| Self::Int(Integer::U64(v)),
    u128 => |v| Self::Int(Integer::U128(v)),
    usize => |v| Self::Int(Integer::Usize(v)),
    f32 => |v| Self::Float(Floating::F32(v)),
    f64 => |v| Self::Float(Floating::F64(v)),
    DateTime<FixedOffset> => |v| Self::DateTime(v),
    DateTime<Utc> => |v| Self::DateTime(v.into()),
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Self::Int(n)
    }
}

impl From<Floating> for Value {
    fn from(n: Floating) -> Self {
        Self::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(Integer::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Self::Int(Integer::U64(u))
                } else {
                    Self::Float(Floating::F64(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_convert_like_values() {
        let n = 7_i16;
        let b = true;
        let s = String::from("hi");
        assert_eq!(Value::from(&n), Value::from(n));
        assert_eq!(Value::from(&b), Value::from(b));
        assert_eq!(Value::from(&s), Value::from("hi"));
    }

    #[test]
    fn test_option_converts_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3_u8)), Value::Int(Integer::U8(3)));
    }

    #[test]
    fn test_narrow_integers() {
        assert_eq!(Integer::I32(-5).narrow(), Some(-5));
        assert_eq!(Integer::U32(u32::MAX).narrow(), Some(i64::from(u32::MAX)));
        assert_eq!(Integer::U64(1).narrow(), None);
        assert_eq!(Integer::Usize(1).narrow(), None);
        assert_eq!(Integer::I128(1).narrow(), None);
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "id": 4,
            "big": 18_446_744_073_709_551_615_u64,
            "ratio": 0.5,
            "tags": ["a", null],
            "ok": true,
        });
        let Value::Object(fields) = Value::from(json) else {
            panic!("expected object");
        };
        assert_eq!(fields["id"], Value::Int(Integer::I64(4)));
        assert_eq!(fields["big"], Value::Int(Integer::U64(u64::MAX)));
        assert_eq!(fields["ratio"], Value::Float(Floating::F64(0.5)));
        assert_eq!(
            fields["tags"],
            Value::List(vec![Value::String("a".into()), Value::Null])
        );
        assert_eq!(fields["ok"], Value::Boolean(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(123).to_string(), "123");
        assert_eq!(Value::from(1.5_f64).to_string(), "1.5");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![104_u8, 105]).to_string(), "[104, 105]");
        assert_eq!(
            Value::List(vec![Value::from(1), Value::from("a")]).to_string(),
            "[1, a]"
        );

        let mut fields = BTreeMap::new();
        fields.insert("b".to_string(), Value::from(2));
        fields.insert("a".to_string(), Value::from(1));
        assert_eq!(Value::Object(fields).to_string(), "{a: 1, b: 2}");
    }

    #[test]
    fn test_textual_equality() {
        assert_eq!(Value::text(5), Value::text("5"));
        assert_ne!(Value::text(5), Value::text(6));
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(Value::from(1_u64).kind_name(), "integer");
        assert_eq!(Value::Null.kind_name(), "null");
        assert!(Value::Null.is_null());
    }
}
