//! Error constructor functions
//!
//! Factory helpers used by the tokenizer, parser and decoders so call sites stay short.

use super::types::{FilterError, SyntaxCause, SyntaxError};

/// Creates a grammar error for `input` at an optional character position
///
/// # Examples
/// ```
/// use scim_filter_core::filter::error::invalid_expression_error;
///
/// let error = invalid_expression_error("name eq", "expected comparison value", Some(7));
/// assert_eq!(error.position(), Some(7));
/// ```
pub fn invalid_expression_error(
    input: &str,
    reason: impl Into<String>,
    position: Option<usize>,
) -> FilterError {
    FilterError::Syntax(SyntaxError::new(
        input,
        position,
        SyntaxCause::Grammar(reason.into()),
    ))
}

/// Creates an `UnparsableLiteral` syntax error carrying the offending text
pub fn unparsable_literal_error(raw: &str) -> FilterError {
    FilterError::Syntax(SyntaxError::new(
        raw,
        None,
        SyntaxCause::UnparsableLiteral(raw.to_string()),
    ))
}

/// Creates a `MalformedAttributePath` syntax error carrying the offending path
pub fn malformed_attribute_path_error(path: &str) -> FilterError {
    FilterError::Syntax(SyntaxError::new(
        path,
        None,
        SyntaxCause::MalformedAttributePath(path.to_string()),
    ))
}

/// Creates a builder protocol error
pub fn builder_protocol_error(message: impl Into<String>) -> FilterError {
    FilterError::BuilderProtocol(message.into())
}

/// Creates an error for a search parameter value that cannot be used
pub fn invalid_parameter_error(name: &str, reason: impl Into<String>) -> FilterError {
    FilterError::InvalidParameter {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Moves a fragment-level syntax error onto the filter text that contained it.
/// Errors of any other kind pass through untouched.
#[must_use]
pub fn relocate(error: FilterError, input: &str, position: usize) -> FilterError {
    match error {
        FilterError::Syntax(err) => FilterError::Syntax(err.located(input, position)),
        other => other,
    }
}
