//! GraphQL scalar coercion.
//!
//! Each scalar converts values across three boundaries:
//!
//! - **serialize**: internal value to response value
//! - **parse_value**: loosely-typed input (for example JSON variables) to
//!   internal value
//! - **parse_literal**: a literal node from query text to internal value
//!
//! All three return `Option<ScalarValue>`. `None` is the "no value" signal:
//! not an error, just "treat as absent or invalid". Callers decide whether
//! that becomes a reported error.
//!
//! ```
//! use graphql_scalars::{Value, ScalarValue, INT, ID};
//! use graphql_syntax::ast;
//!
//! assert_eq!(INT.parse_value(&Value::from("42")), Some(ScalarValue::Int(42)));
//! assert_eq!(INT.parse_value(&Value::from(1_u64 << 40)), None);
//! assert_eq!(
//!     ID.parse_literal(&ast::Value::int("7")),
//!     Some(ScalarValue::String("7".to_string()))
//! );
//! ```

mod builtins;
pub mod coerce;
mod output;
mod scalar;
mod value;

pub use builtins::{
    is_specified_scalar, scalar_by_name, specified_scalars, BOOLEAN, DATE_TIME, FLOAT, ID, INT,
    STRING,
};
pub use output::ScalarValue;
pub use scalar::{
    ParseLiteralFn, ParseValueFn, ScalarConfig, ScalarDefinitionError, ScalarType, SerializeFn,
};
pub use value::{Floating, Integer, Textual, Value};
