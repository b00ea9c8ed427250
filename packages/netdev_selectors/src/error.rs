use thiserror::Error;

use crate::SelectorKind;

/// Errors that can occur when constructing selectors from configuration.
///
/// All of these are raised while a selector is being built. Filtering devices never fails.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A selector was configured with an empty list of values.
    #[error("{kind} selector requires at least one value")]
    NoValues {
        /// The kind of selector that was being constructed.
        kind: SelectorKind,
    },

    /// A selector was configured with an empty string as one of its values.
    #[error("{kind} selector does not accept empty values")]
    EmptyValue {
        /// The kind of selector that was being constructed.
        kind: SelectorKind,
    },

    /// A physical function name pattern did not match the `name[#ranges]` format.
    #[error("invalid PF name pattern '{pattern}': {problem}")]
    InvalidPfNamePattern {
        /// The pattern as it was configured.
        pattern: String,

        /// A human-readable description of the problem.
        problem: String,

        /// The range list error that caused the problem, if any.
        #[source]
        source: Option<rangelist::Error>,
    },

    /// A configuration key did not name any known selector kind.
    #[error("unknown selector kind '{key}'")]
    UnknownKind {
        /// The key as it was configured.
        key: String,
    },

    /// More than one selector of the same kind was added to a chain.
    #[error("{kind} selector is already present in the chain")]
    DuplicateKind {
        /// The kind that appeared more than once.
        kind: SelectorKind,
    },

    /// Selector configuration could not be deserialized.
    #[error("invalid selector configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::InvalidPfNamePattern {
            pattern: pattern.into(),
            problem: problem.into(),
            source: None,
        }
    }

    pub(crate) fn invalid_pattern_ranges(
        pattern: impl Into<String>,
        source: rangelist::Error,
    ) -> Self {
        Self::InvalidPfNamePattern {
            pattern: pattern.into(),
            problem: "VF index ranges are not valid".to_string(),
            source: Some(source),
        }
    }
}

/// A specialized `Result` type for selector construction, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
