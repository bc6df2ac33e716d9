//! Filter Error Types
//!
//! Core error types for filter parsing, building and transport decoding.

use std::fmt;

use crate::config::ConfigurationError;

/// Why a piece of filter text was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxCause {
    /// A comparison value matched none of the JSON literal forms
    #[error("unparsable literal `{0}`")]
    UnparsableLiteral(String),

    /// An attribute path could not be split into URN, name and sub-attribute
    #[error("malformed attribute path `{0}`")]
    MalformedAttributePath(String),

    /// The token sequence does not follow the filter grammar
    #[error("{0}")]
    Grammar(String),
}

/// Filter text that does not conform to the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Text that was being parsed when the error occurred
    pub input: String,
    /// Character offset into `input`, when known
    pub position: Option<usize>,
    /// Specific reason for the rejection
    pub cause: SyntaxCause,
}

impl SyntaxError {
    #[must_use]
    pub fn new(input: impl Into<String>, position: Option<usize>, cause: SyntaxCause) -> Self {
        Self {
            input: input.into(),
            position,
            cause,
        }
    }

    /// Re-anchor an error raised on a fragment onto the enclosing filter text
    #[must_use]
    pub fn located(self, input: &str, position: usize) -> Self {
        Self {
            input: input.to_string(),
            position: Some(position),
            cause: self.cause,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(
                f,
                "filter syntax error at position {pos} in `{}`: {}",
                self.input, self.cause
            ),
            None => write!(f, "filter syntax error in `{}`: {}", self.input, self.cause),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Main filter error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Input text or an attribute path argument violates the grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Fluent builder methods were called in an order the grammar forbids
    #[error("builder protocol violation: {0}")]
    BuilderProtocol(String),

    /// Transport-encoded filter could not be decoded
    #[error("invalid transport encoding: {0}")]
    Encoding(String),

    /// A search parameter other than the filter carries an unusable value
    #[error("invalid search parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Parser configuration rejected before use
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Parser consistency check failed
    #[error("internal parser error: {0}")]
    Internal(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

impl FilterError {
    /// The syntax cause, when this is a `FilterSyntaxError`
    #[must_use]
    pub fn syntax_cause(&self) -> Option<&SyntaxCause> {
        match self {
            Self::Syntax(err) => Some(&err.cause),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    #[must_use]
    pub fn is_builder_protocol(&self) -> bool {
        matches!(self, Self::BuilderProtocol(_))
    }

    /// Character position of a syntax error, if one was recorded
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax(err) => err.position,
            _ => None,
        }
    }
}
