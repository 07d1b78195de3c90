//! `Boolean`: `true` or `false`.

use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::Value;

/// Coerce a loosely-typed value to a `Boolean`. This never fails.
///
/// `""` and `"false"` are false, every other string is true, numbers are
/// true when nonzero, and unrecognized kinds are false.
#[must_use]
pub fn coerce_bool(value: &Value) -> Option<ScalarValue> {
    let b = match value {
        Value::Boolean(b) => *b,
        Value::String(s) => !matches!(s.as_str(), "" | "false"),
        Value::Int(n) => !n.is_zero(),
        Value::Float(n) => !n.is_zero(),
        Value::Null
        | Value::Bytes(_)
        | Value::DateTime(_)
        | Value::Text(_)
        | Value::List(_)
        | Value::Object(_) => false,
    };
    Some(ScalarValue::Boolean(b))
}

/// Accepts boolean literals only.
#[must_use]
pub fn parse_bool_literal(literal: &ast::Value) -> Option<ScalarValue> {
    match literal {
        ast::Value::Boolean(boolean) => Some(ScalarValue::Boolean(boolean.value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boolean(value: impl Into<Value>) -> Option<bool> {
        coerce_bool(&value.into()).and_then(|v| v.as_bool())
    }

    #[test]
    fn test_booleans_pass_through() {
        assert_eq!(boolean(true), Some(true));
        assert_eq!(boolean(&false), Some(false));
    }

    #[test]
    fn test_strings() {
        assert_eq!(boolean(""), Some(false));
        assert_eq!(boolean("false"), Some(false));
        assert_eq!(boolean("true"), Some(true));
        assert_eq!(boolean("anything-else"), Some(true));
        assert_eq!(boolean("0"), Some(true));
        assert_eq!(boolean("False"), Some(true));
    }

    #[test]
    fn test_numbers_use_nonzero_test() {
        assert_eq!(boolean(0), Some(false));
        assert_eq!(boolean(-3), Some(true));
        assert_eq!(boolean(0_u64), Some(false));
        assert_eq!(boolean(0.0_f64), Some(false));
        assert_eq!(boolean(-0.0_f32), Some(false));
        assert_eq!(boolean(0.25_f32), Some(true));
    }

    #[test]
    fn test_unrecognized_kinds_are_false() {
        assert_eq!(boolean(Value::Null), Some(false));
        assert_eq!(boolean(Value::List(vec![Value::from(true)])), Some(false));
        assert_eq!(boolean(Value::text("true")), Some(false));
    }

    #[test]
    fn test_literal() {
        assert_eq!(
            parse_bool_literal(&ast::Value::boolean(true)),
            Some(ScalarValue::Boolean(true))
        );
        assert_eq!(
            parse_bool_literal(&ast::Value::boolean(false)),
            Some(ScalarValue::Boolean(false))
        );
        assert_eq!(parse_bool_literal(&ast::Value::string("true")), None);
        assert_eq!(parse_bool_literal(&ast::Value::int("1")), None);
    }
}
