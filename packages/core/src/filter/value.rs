//! Finished filter values
//!
//! A [`Filter`] pairs an expression tree with its canonical text so that
//! request builders can embed it without re-rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    ast::FilterExpression,
    error::{FilterError, FilterResult},
    parser::parse_filter,
    transport::{decode_filter, encode_filter},
};

/// Immutable filter: tree plus canonical text
#[derive(Debug, Clone)]
pub struct Filter {
    expression: FilterExpression,
    canonical: String,
}

impl Filter {
    #[must_use]
    pub fn new(expression: FilterExpression) -> Self {
        let canonical = expression.to_canonical_string();
        Self {
            expression,
            canonical,
        }
    }

    /// Parse filter text
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Syntax` when `input` is not a valid filter.
    pub fn parse(input: &str) -> FilterResult<Self> {
        parse_filter(input).map(Self::new)
    }

    /// Decode a transport-encoded query value and parse it
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Encoding` for bad escapes, otherwise as [`Filter::parse`].
    pub fn from_encoded(encoded: &str) -> FilterResult<Self> {
        Self::parse(&decode_filter(encoded)?)
    }

    #[must_use]
    pub fn expression(&self) -> &FilterExpression {
        &self.expression
    }

    #[must_use]
    pub fn into_expression(self) -> FilterExpression {
        self.expression
    }

    /// Canonical filter text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Canonical text encoded for a URL query value
    #[must_use]
    pub fn encoded(&self) -> String {
        encode_filter(&self.canonical)
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.expression == other.expression
    }
}

impl From<FilterExpression> for Filter {
    fn from(expression: FilterExpression) -> Self {
        Self::new(expression)
    }
}

impl From<Filter> for FilterExpression {
    fn from(filter: Filter) -> Self {
        filter.expression
    }
}

impl AsRef<FilterExpression> for Filter {
    fn as_ref(&self) -> &FilterExpression {
        &self.expression
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
