use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when processing range list strings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a supposed range list string but it did not match the expected format.
    #[error("invalid range list syntax: '{invalid_value}' is invalid: {problem}")]
    InvalidSyntax {
        /// The specific value that was invalid. This may either be the entire range list string
        /// or a specific part of it, depending on the problem.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,

        /// The integer parsing failure that caused the problem, if any.
        #[source]
        source: Option<ParseIntError>,
    },
}

impl Error {
    pub(crate) fn new(invalid_value: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
            source: None,
        }
    }

    pub(crate) fn caused_by(
        invalid_value: impl Into<String>,
        problem: impl Into<String>,
        source: ParseIntError,
    ) -> Self {
        Self::InvalidSyntax {
            invalid_value: invalid_value.into(),
            problem: problem.into(),
            source: Some(source),
        }
    }
}

/// A specialized `Result` type for range list operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
