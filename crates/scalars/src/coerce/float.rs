//! `Float`: signed double-precision values.

use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::{Floating, Value};

/// Coerce a loosely-typed value to a `Float`. Shared by `serialize` and
/// `parse_value`.
///
/// `f32` inputs are returned as-is so no precision is invented by widening.
/// Unlike every other scalar, unsupported kinds coerce to `0.0` rather than
/// "no value".
#[must_use]
pub fn coerce_float(value: &Value) -> Option<ScalarValue> {
    let float = match value {
        Value::Boolean(b) => Floating::F64(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Floating::F64(n.to_f64()),
        Value::Float(Floating::F32(n)) => Floating::F32(*n),
        Value::Float(Floating::F64(n)) => Floating::F64(*n),
        Value::String(s) => Floating::F64(parse_finite(s)?),
        Value::Null
        | Value::Bytes(_)
        | Value::DateTime(_)
        | Value::Text(_)
        | Value::List(_)
        | Value::Object(_) => Floating::F64(0.0),
    };

    Some(ScalarValue::Float(float))
}

/// Accepts float and int literals (every int literal is a valid float
/// literal), re-parsing the literal text at single precision.
///
/// The text is rounded to the nearest `f32` and widened, so `0.1` yields
/// `f64::from(0.1_f32)`. Literals outside the `f32` range are no value.
#[must_use]
pub fn parse_float_literal(literal: &ast::Value) -> Option<ScalarValue> {
    let text = match literal {
        ast::Value::Float(float) => &float.value,
        ast::Value::Int(int) => &int.value,
        _ => return None,
    };

    text.parse::<f32>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| ScalarValue::Float(Floating::F64(f64::from(n))))
}

/// `inf`, `infinity` and `NaN` spellings, and overflowing text, are no value.
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}
