//! Parser configuration
//!
//! Limits applied to filter text before and during parsing.

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Default ceiling on filter text length, in bytes (64KB)
pub const DEFAULT_MAX_FILTER_LENGTH: usize = 64 * 1024;

/// Default ceiling on nested groups and value paths
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Default ceiling on operands joined by `and`/`or` across the whole filter
pub const DEFAULT_MAX_LOGICAL_OPERANDS: usize = 1024;

const MAX_FILTER_LENGTH_CEILING: usize = 16 * 1024 * 1024;
const MAX_NESTING_DEPTH_CEILING: usize = 1024;
const MAX_LOGICAL_OPERANDS_CEILING: usize = 8192;

/// Filter parser configuration
///
/// Tree depth grows with both nesting and connective chains, so the nesting
/// and operand limits together bound the recursion of every tree walk over a
/// parsed filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Maximum accepted filter length in bytes
    pub max_filter_length: usize,

    /// Maximum nesting of parenthesised groups and value paths
    pub max_nesting_depth: usize,

    /// Maximum number of operands joined by `and`/`or`
    pub max_logical_operands: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_filter_length: DEFAULT_MAX_FILTER_LENGTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_logical_operands: DEFAULT_MAX_LOGICAL_OPERANDS,
        }
    }
}

impl ParserConfig {
    /// Set the maximum filter length in bytes
    ///
    /// # Examples
    /// ```
    /// use scim_filter_core::config::ParserConfig;
    ///
    /// let config = ParserConfig::default().with_max_filter_length(1024);
    /// assert_eq!(config.max_filter_length, 1024);
    /// ```
    #[must_use]
    pub fn with_max_filter_length(mut self, max_filter_length: usize) -> Self {
        self.max_filter_length = max_filter_length;
        self
    }

    /// Set the maximum nesting depth for groups and value paths
    #[must_use]
    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }

    /// Set the maximum number of operands joined by `and`/`or`
    #[must_use]
    pub fn with_max_logical_operands(mut self, max_logical_operands: usize) -> Self {
        self.max_logical_operands = max_logical_operands;
        self
    }
}

impl Validator for ParserConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_limit(
            self.max_filter_length,
            MAX_FILTER_LENGTH_CEILING,
            "max_filter_length",
        )?;
        ConfigValidator::validate_limit(
            self.max_nesting_depth,
            MAX_NESTING_DEPTH_CEILING,
            "max_nesting_depth",
        )?;
        ConfigValidator::validate_limit(
            self.max_logical_operands,
            MAX_LOGICAL_OPERANDS_CEILING,
            "max_logical_operands",
        )
    }
}
