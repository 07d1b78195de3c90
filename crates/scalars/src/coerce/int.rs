//! `Int`: signed 32-bit whole numbers.
//!
//! Integers are only valid when they fit a signed 32-bit integer, which gives
//! the broadest support across platforms. Anything else is "no value", never
//! a silent `0`.

use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::Value;

const MIN: i64 = i32::MIN as i64;
const MAX: i64 = i32::MAX as i64;

/// How an input reaches the bound checks.
enum Intermediate {
    /// Already an exact integer.
    Exact(i64),
    /// Widened through `f64`; checked as a float, then truncated and checked
    /// again as an integer.
    Widened(f64),
}

/// Coerce a loosely-typed value to an `Int`. Shared by `serialize` and
/// `parse_value`.
#[must_use]
pub fn coerce_int(value: &Value) -> Option<ScalarValue> {
    let intermediate = match value {
        Value::Boolean(b) => Intermediate::Exact(i64::from(*b)),
        Value::Int(n) => n
            .narrow()
            .map_or_else(|| Intermediate::Widened(n.to_f64()), Intermediate::Exact),
        Value::Float(n) => Intermediate::Widened(n.to_f64()),
        Value::String(s) => Intermediate::Widened(s.parse::<f64>().ok()?),
        Value::Null
        | Value::Bytes(_)
        | Value::DateTime(_)
        | Value::Text(_)
        | Value::List(_)
        | Value::Object(_) => return None,
    };

    within_bounds(intermediate).map(ScalarValue::Int)
}

fn within_bounds(intermediate: Intermediate) -> Option<i64> {
    let int = match intermediate {
        Intermediate::Exact(int) => int,
        Intermediate::Widened(float) => {
            if float.is_nan() || float < MIN as f64 || float > MAX as f64 {
                return None;
            }
            float.trunc() as i64
        }
    };

    (MIN..=MAX).contains(&int).then_some(int)
}

/// Accepts integer literals only, re-parsing the literal text.
///
/// No 32-bit bound check is applied here: the literal is accepted as long as
/// its text parses as a 64-bit integer.
#[must_use]
pub fn parse_int_literal(literal: &ast::Value) -> Option<ScalarValue> {
    match literal {
        ast::Value::Int(int) => int.value.parse::<i64>().ok().map(ScalarValue::Int),
        _ => None,
    }
}
