//! Results of scalar coercion.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::coerce::date_time::format_rfc3339;
use crate::value::{Floating, Integer, Value};

/// A successfully coerced scalar value.
///
/// Coercion functions return `Option<ScalarValue>`; `None` is the
/// "no value" signal, which callers treat as absent or invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Value-path results are always within `i32`; literal-path results may
    /// exceed it.
    Int(i64),
    Float(Floating),
    String(String),
    Boolean(bool),
    DateTime(DateTime<FixedOffset>),
}

impl ScalarValue {
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric value as an `f64`, for both `Int` and `Float` results.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(n.to_f64()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::DateTime(dt) => match format_rfc3339(dt) {
                Some(text) => f.write_str(&text),
                None => write!(f, "{dt:?}"),
            },
        }
    }
}

/// Wire format for responses. Timestamps become RFC 3339 strings.
impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(Floating::F32(n)) => serializer.serialize_f32(*n),
            Self::Float(Floating::F64(n)) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::DateTime(dt) => match format_rfc3339(dt) {
                Some(text) => serializer.serialize_str(&text),
                None => Err(S::Error::custom(format!(
                    "timestamp {dt:?} cannot be represented in RFC 3339"
                ))),
            },
        }
    }
}

/// Internal values feed back into `serialize`.
impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Int(n) => Self::Int(Integer::I64(n)),
            ScalarValue::Float(n) => Self::Float(n),
            ScalarValue::String(s) => Self::String(s),
            ScalarValue::Boolean(b) => Self::Boolean(b),
            ScalarValue::DateTime(dt) => Self::DateTime(dt),
        }
    }
}
