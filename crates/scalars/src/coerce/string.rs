//! `String` and `ID`: textual values.

use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::Value;

/// Coerce any value to a `String`. This never fails.
///
/// Strings pass through, [`Value::Text`] renders itself, and everything else
/// falls back to the default rendering of [`Value`].
#[must_use]
pub fn coerce_string(value: &Value) -> Option<ScalarValue> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Text(text) => text.to_string(),
        other => other.to_string(),
    };
    Some(ScalarValue::String(text))
}

/// Accepts string literals only.
#[must_use]
pub fn parse_string_literal(literal: &ast::Value) -> Option<ScalarValue> {
    match literal {
        ast::Value::String(string) => Some(ScalarValue::String(string.value.clone())),
        _ => None,
    }
}

/// Accepts string and int literals; an int literal becomes its text.
#[must_use]
pub fn parse_id_literal(literal: &ast::Value) -> Option<ScalarValue> {
    match literal {
        ast::Value::String(string) => Some(ScalarValue::String(string.value.clone())),
        ast::Value::Int(int) => Some(ScalarValue::String(int.value.clone())),
        _ => None,
    }
}
