//! # Errors
//!
//! The single error family for the crate. Every operation validates its inputs up
//! front and fails synchronously; identical inputs fail identically, so there is
//! nothing to retry.
use std::fmt::Debug;

/// Error for a parameter outside its documented domain.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A parameter value that violates a precondition, such as a base below 2 or
    /// a digit outside `[0, base)`.
    #[error("value '{value}' for parameter {param} is unacceptable: {msg}")]
    InvalidValue {
        /// The offending value, rendered.
        value: String,
        /// Name of the parameter that carried the value.
        param: &'static str,
        /// Which precondition was violated.
        msg: String,
    },
}

impl Error {
    /// Build an `InvalidValue` from any debuggable offending value.
    pub(crate) fn invalid_value(
        value: impl Debug,
        param: &'static str,
        msg: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            value: format!("{:?}", value),
            param,
            msg: msg.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
