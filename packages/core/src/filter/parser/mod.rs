//! Filter text to expression tree
//!
//! Tokenizes the input, drives [`FilterParser`] over the lexemes and collects
//! the tree from an [`ExpressionBuildingListener`]. Parsing is a pure function
//! of its input; concurrent parses share nothing.

mod core;
mod expressions;
pub mod listener;

use std::str::FromStr;

pub use self::core::FilterParser;
pub use listener::{ExpressionBuildingListener, FilterListener};

use crate::{
    config::{ParserConfig, Validator},
    filter::{
        ast::FilterExpression,
        error::{FilterError, FilterResult, invalid_expression_error},
        tokenizer::Tokenizer,
    },
};

/// Parse filter text with the default limits
///
/// # Examples
/// ```
/// use scim_filter_core::filter::parser::parse_filter;
///
/// let expression = parse_filter(r#"userName eq "bjensen" and active eq true"#).unwrap();
/// assert_eq!(expression.node_count(), 3);
/// ```
///
/// # Errors
///
/// Returns `FilterError::Syntax` for malformed filters, unparsable literals
/// and malformed attribute paths.
pub fn parse_filter(input: &str) -> FilterResult<FilterExpression> {
    parse_filter_with(input, &ParserConfig::default())
}

/// Parse filter text under explicit limits
///
/// # Errors
///
/// Returns `FilterError::Configuration` for an invalid `config`, otherwise as
/// [`parse_filter`].
pub fn parse_filter_with(input: &str, config: &ParserConfig) -> FilterResult<FilterExpression> {
    config.validate()?;

    if input.len() > config.max_filter_length {
        return Err(invalid_expression_error(
            input,
            format!(
                "filter is {} bytes, maximum is {}",
                input.len(),
                config.max_filter_length
            ),
            None,
        ));
    }

    log::debug!("Parsing filter: {input}");

    let lexemes = Tokenizer::new(input).tokenize()?;
    let listener = FilterParser::new(lexemes, input, config, ExpressionBuildingListener::new())
        .parse()
        .inspect_err(|err| log::debug!("Rejected filter: {err}"))?;
    let expression = listener.into_expression()?;

    log::trace!("Parsed filter into {} nodes", expression.node_count());
    Ok(expression)
}

impl FromStr for FilterExpression {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_filter(s)
    }
}
