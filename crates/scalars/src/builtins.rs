//! The built-in scalars, shared process-wide.

use std::sync::LazyLock;

use crate::coerce::{
    coerce_bool, coerce_float, coerce_int, coerce_string, parse_bool_literal, parse_date_time,
    parse_date_time_literal, parse_float_literal, parse_id_literal, parse_int_literal,
    parse_string_literal, serialize_date_time,
};
use crate::scalar::ScalarType;

pub static INT: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "Int",
        "The `Int` scalar type represents non-fractional signed whole numeric values. \
         Int can represent values between -(2^31) and 2^31 - 1.",
        coerce_int,
        coerce_int,
        parse_int_literal,
    )
});

pub static FLOAT: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "Float",
        "The `Float` scalar type represents signed double-precision fractional values \
         as specified by [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).",
        coerce_float,
        coerce_float,
        parse_float_literal,
    )
});

pub static STRING: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "String",
        "The `String` scalar type represents textual data, represented as UTF-8 \
         character sequences. The String type is most often used by GraphQL to \
         represent free-form human-readable text.",
        coerce_string,
        coerce_string,
        parse_string_literal,
    )
});

pub static BOOLEAN: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "Boolean",
        "The `Boolean` scalar type represents `true` or `false`.",
        coerce_bool,
        coerce_bool,
        parse_bool_literal,
    )
});

/// Shares the `String` coercion for `serialize`/`parse_value`.
pub static ID: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "ID",
        "The `ID` scalar type represents a unique identifier, often used to refetch an \
         object or as key for a cache. The ID type appears in a JSON response as a \
         String; however, it is not intended to be human-readable. When expected as an \
         input type, any string (such as `\"4\"`) or integer (such as `4`) input value \
         will be accepted as an ID.",
        coerce_string,
        coerce_string,
        parse_id_literal,
    )
});

pub static DATE_TIME: LazyLock<ScalarType> = LazyLock::new(|| {
    ScalarType::builtin(
        "DateTime",
        "The `DateTime` scalar type represents a DateTime. The DateTime is serialized \
         as an RFC 3339 quoted string",
        serialize_date_time,
        parse_date_time,
        parse_date_time_literal,
    )
});

/// All built-in scalars, in declaration order.
#[must_use]
pub fn specified_scalars() -> [&'static ScalarType; 6] {
    [&*INT, &*FLOAT, &*STRING, &*BOOLEAN, &*ID, &*DATE_TIME]
}

/// Look up a built-in scalar by its GraphQL name.
#[must_use]
pub fn scalar_by_name(name: &str) -> Option<&'static ScalarType> {
    specified_scalars()
        .into_iter()
        .find(|scalar| scalar.name() == name)
}

/// Whether `name` is the name of a built-in scalar.
#[must_use]
pub fn is_specified_scalar(name: &str) -> bool {
    scalar_by_name(name).is_some()
}
