//! SCIM filter public API
//!
//! Fluent construction of SCIM query filters plus the request types that carry
//! them to a server. Parsing and the expression tree come from
//! `scim_filter_core` and are re-exported here.
//!
//! # Examples
//!
//! ```rust
//! use scim_filter::{FilterClient, SearchRequest};
//!
//! # fn main() -> Result<(), scim_filter::FilterError> {
//! let work = FilterClient::builder().equal_to("type", "work")?.build()?;
//! let filter = FilterClient::builder()
//!     .equal_to("userType", "Employee")?
//!     .and()?
//!     .attribute_has("emails", work)?
//!     .build()?;
//!
//! assert_eq!(filter.as_str(), r#"userType eq "Employee" and emails[type eq "work"]"#);
//!
//! let request = SearchRequest::new().with_filter(filter).with_count(20);
//! assert!(request.to_query_string().starts_with("filter=userType%20eq%20"));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod search;

pub use builder::{FilterBuilder, OrderedOperand};
pub use search::{SEARCH_REQUEST_SCHEMA, SearchRequest, SortOrder};

// Re-export the grammar and tree types
pub use scim_filter_core::{
    ParserConfig,
    filter::{
        AttributeReference, CompareOperator, Filter, FilterError, FilterExpression,
        FilterResult, FilterVisitor, Literal, LogicalOperator, SyntaxCause, SyntaxError,
        decode_filter, encode_filter, parse_filter, parse_filter_with,
    },
};

/// Entry point for building filters
pub struct FilterClient;

impl FilterClient {
    /// Start a new builder session
    #[must_use]
    pub fn builder() -> FilterBuilder {
        FilterBuilder::new()
    }

    /// Parse filter text
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` when `input` is not a valid filter.
    pub fn parse(input: &str) -> FilterResult<Filter> {
        Filter::parse(input)
    }
}
