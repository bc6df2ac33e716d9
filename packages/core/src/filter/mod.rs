//! SCIM filter grammar
//!
//! Parses filter text such as
//! `emails[type eq "work" and value co "@example.com"] or not (title pr)`
//! into a [`FilterExpression`] tree and renders trees back into canonical text.
//!
//! # Examples
//!
//! ```rust
//! use scim_filter_core::filter::{Filter, FilterExpression, LogicalOperator};
//!
//! let filter = Filter::parse(r#"userName sw "j" OR title pr"#).unwrap();
//! assert_eq!(filter.expression().logical_operator(), Some(LogicalOperator::Or));
//! assert_eq!(filter.as_str(), r#"userName sw "j" or title pr"#);
//! assert_eq!(filter.encoded(), "userName%20sw%20%22j%22%20or%20title%20pr");
//! ```

pub mod ast;
pub mod attribute;
pub mod error;
pub mod literal;
pub mod parser;
pub mod serializer;
pub mod tokenizer;
pub mod tokens;
pub mod transport;
pub mod value;
pub mod visitor;

pub use self::{
    ast::{CompareOperator, FilterExpression, LogicalOperator},
    attribute::AttributeReference,
    error::{FilterError, FilterResult, SyntaxCause, SyntaxError},
    literal::{Literal, parse_json_type},
    parser::{parse_filter, parse_filter_with},
    transport::{decode_filter, encode_filter},
    value::Filter,
    visitor::FilterVisitor,
};
