//! Parser configuration and validation

pub mod parser;
pub mod validation;

pub use parser::{
    DEFAULT_MAX_FILTER_LENGTH, DEFAULT_MAX_LOGICAL_OPERANDS, DEFAULT_MAX_NESTING_DEPTH, ParserConfig,
};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
