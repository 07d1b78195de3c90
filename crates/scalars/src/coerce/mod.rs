//! One coercion unit per built-in scalar.
//!
//! Every function here is pure: no shared state, no I/O, no panics. A `None`
//! result is the "no value" signal.

pub mod boolean;
pub mod date_time;
pub mod float;
pub mod int;
pub mod string;

pub use boolean::{coerce_bool, parse_bool_literal};
pub use date_time::{
    format_rfc3339, parse_date_time, parse_date_time_literal, serialize_date_time,
};
pub use float::{coerce_float, parse_float_literal};
pub use int::{coerce_int, parse_int_literal};
pub use string::{coerce_string, parse_id_literal, parse_string_literal};
