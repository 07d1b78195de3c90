//! # GraphQL Located Errors
//!
//! Errors carry the syntax nodes they were raised for, so a response can
//! report `locations` alongside each `message`.
//!
//! Any failure can be turned into a [`LocatedError`]: structured errors keep
//! their message and are retained as the cause, plain messages are promoted
//! to [`MessageError`], and anything else becomes "An unknown error
//! occurred.".

mod failure;
mod located;

pub use failure::{Failure, MessageError};
pub use located::{ErrorLocation, GraphQLError, LocatedError};
