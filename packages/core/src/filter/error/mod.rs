//! Filter error handling module
//!
//! Error taxonomy shared by the parser, the literal and attribute-path decoders,
//! the transport codec and the fluent builder.

pub mod constructors;
mod types;

pub use constructors::{
    builder_protocol_error, invalid_expression_error, invalid_parameter_error,
    malformed_attribute_path_error, relocate, unparsable_literal_error,
};
pub use types::{FilterError, FilterResult, SyntaxCause, SyntaxError};
