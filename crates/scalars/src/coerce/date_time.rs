//! `DateTime`: timestamps carried as RFC 3339 strings.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use graphql_syntax::ast;

use crate::output::ScalarValue;
use crate::value::Value;

/// Render a timestamp as RFC 3339 text.
///
/// Fractional seconds are written with trailing zeros removed and a zero
/// offset is written as `Z`. Returns `None` for timestamps RFC 3339 cannot
/// represent: years outside `0..=9999` and offsets with a seconds component.
///
/// Built by hand because `to_rfc3339_opts` pads fractions to 3, 6 or 9
/// digits: `.12` must stay `.12`, not become `.120`.
#[must_use]
pub fn format_rfc3339(dt: &DateTime<FixedOffset>) -> Option<String> {
    let offset = dt.offset().local_minus_utc();
    if !(0..=9999).contains(&dt.year()) || offset % 60 != 0 {
        return None;
    }

    let mut text = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = dt.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{nanos:09}");
        text.push('.');
        text.push_str(fraction.trim_end_matches('0'));
    }
    if offset == 0 {
        text.push('Z');
    } else {
        text.push_str(&dt.format("%:z").to_string());
    }
    Some(text)
}

/// Accepts timestamps only, rendering them as RFC 3339 text.
#[must_use]
pub fn serialize_date_time(value: &Value) -> Option<ScalarValue> {
    match value {
        Value::DateTime(dt) => format_rfc3339(dt).map(ScalarValue::String),
        Value::Null
        | Value::Boolean(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Bytes(_)
        | Value::Text(_)
        | Value::List(_)
        | Value::Object(_) => None,
    }
}

/// Parses strings and UTF-8 bytes as RFC 3339 timestamps.
#[must_use]
pub fn parse_date_time(value: &Value) -> Option<ScalarValue> {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Bytes(bytes) => std::str::from_utf8(bytes).ok()?,
        Value::Null
        | Value::Boolean(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::DateTime(_)
        | Value::Text(_)
        | Value::List(_)
        | Value::Object(_) => return None,
    };

    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(ScalarValue::DateTime)
}

/// Accepts string literals only and returns their text unconverted.
///
/// Unlike [`parse_date_time`], the text is not validated as a timestamp:
/// `"not-a-real-timestamp"` comes back as that same string.
#[must_use]
pub fn parse_date_time_literal(literal: &ast::Value) -> Option<ScalarValue> {
    match literal {
        ast::Value::String(string) => Some(ScalarValue::String(string.value.clone())),
        _ => None,
    }
}
