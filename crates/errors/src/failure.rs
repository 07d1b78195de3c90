//! Failures of unknown shape, classified into a closed set.

use std::any::Any;
use std::error::Error;
use std::sync::Arc;

/// A plain message promoted to an error value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MessageError(pub String);

/// Whatever went wrong, before positions are attached.
#[derive(Debug, Clone)]
pub enum Failure {
    /// A structured error; its message and the error itself are preserved.
    Error(Arc<dyn Error + Send + Sync>),
    /// A plain message with no error value behind it.
    Message(String),
    /// Anything else. Reported as an unknown error.
    Other,
}

impl Failure {
    /// Wrap any error, including `anyhow::Error` and boxed errors.
    pub fn error(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Error(Arc::from(error.into()))
    }

    /// Classify an arbitrary payload, such as the one carried by a panic.
    ///
    /// `String` and `&'static str` payloads become messages, boxed errors
    /// stay errors, and everything else is [`Failure::Other`].
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::Message(*message),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<&'static str>() {
            Ok(message) => return Self::Message((*message).to_string()),
            Err(payload) => payload,
        };
        match payload.downcast::<Box<dyn Error + Send + Sync>>() {
            Ok(error) => Self::Error(Arc::from(*error)),
            Err(_) => Self::Other,
        }
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Arc<dyn Error + Send + Sync>> for Failure {
    fn from(error: Arc<dyn Error + Send + Sync>) -> Self {
        Self::Error(error)
    }
}
