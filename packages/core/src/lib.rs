//! SCIM filter core
//!
//! Grammar, expression tree, parser and canonical serializer for SCIM query
//! filters, plus the parser limits in [`config`]. The fluent builder lives in
//! the `scim_filter` crate on top of this one.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod filter;

pub use config::ParserConfig;
pub use filter::{
    AttributeReference, CompareOperator, Filter, FilterError, FilterExpression, FilterResult,
    Literal, LogicalOperator, parse_filter,
};
