//! Search request wire types

pub mod request;

pub use request::{SEARCH_REQUEST_SCHEMA, SearchRequest, SortOrder};
