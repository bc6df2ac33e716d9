//! Query parameters and POST body for resource searches
//!
//! The same request renders either as a `?filter=...&sortBy=...` query for
//! `GET /Users` or as the JSON body of `POST /Users/.search`. Query values use
//! the filter transport encoding, so spaces always travel as `%20`.

use std::fmt;
use std::str::FromStr;

use scim_filter_core::filter::{
    AttributeReference, Filter, FilterError, FilterResult, encode_filter,
    error::invalid_parameter_error,
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Schema URN carried by every search request body
pub const SEARCH_REQUEST_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:SearchRequest";

/// Result ordering for `sortBy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascending") {
            Ok(Self::Ascending)
        } else if s.eq_ignore_ascii_case("descending") {
            Ok(Self::Descending)
        } else {
            Err(invalid_parameter_error(
                "sortOrder",
                format!("expected `ascending` or `descending`, got `{s}`"),
            ))
        }
    }
}

/// Search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default = "default_schemas")]
    pub schemas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_attributes: Vec<AttributeReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<AttributeReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    /// 1-based index of the first result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

fn default_schemas() -> Vec<String> {
    vec![SEARCH_REQUEST_SCHEMA.to_string()]
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            schemas: default_schemas(),
            attributes: Vec::new(),
            excluded_attributes: Vec::new(),
            filter: None,
            sort_by: None,
            sort_order: None,
            start_index: None,
            count: None,
        }
    }
}

impl SearchRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Add an attribute to return
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` for a malformed attribute path.
    pub fn with_attribute(mut self, path: &str) -> FilterResult<Self> {
        self.attributes.push(AttributeReference::parse(path)?);
        Ok(self)
    }

    /// Add an attribute to leave out of results
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` for a malformed attribute path.
    pub fn with_excluded_attribute(mut self, path: &str) -> FilterResult<Self> {
        self.excluded_attributes
            .push(AttributeReference::parse(path)?);
        Ok(self)
    }

    /// Sort results by an attribute
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` for a malformed attribute path.
    pub fn with_sort_by(mut self, path: &str) -> FilterResult<Self> {
        self.sort_by = Some(AttributeReference::parse(path)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    #[must_use]
    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Query parameters in wire order, values not yet encoded
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.as_str().to_string()));
        }
        if !self.attributes.is_empty() {
            pairs.push(("attributes", join_paths(&self.attributes)));
        }
        if !self.excluded_attributes.is_empty() {
            pairs.push(("excludedAttributes", join_paths(&self.excluded_attributes)));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.to_string()));
        }
        if let Some(start_index) = self.start_index {
            pairs.push(("startIndex", start_index.to_string()));
        }
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }

        pairs
    }

    /// Encoded query string without the leading `?`
    ///
    /// # Examples
    /// ```
    /// use scim_filter::{Filter, SearchRequest};
    ///
    /// let request = SearchRequest::new()
    ///     .with_filter(Filter::parse(r#"userName eq "bjensen""#).unwrap())
    ///     .with_count(10);
    /// assert_eq!(request.to_query_string(), "filter=userName%20eq%20%22bjensen%22&count=10");
    /// ```
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", encode_filter(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Append this request's parameters to `url`, keeping any existing query
    pub fn apply_to(&self, url: &mut Url) {
        let ours = self.to_query_string();
        if ours.is_empty() {
            return;
        }

        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{ours}"),
            _ => ours,
        };
        log::debug!("Search query for {}: {query}", url.path());
        url.set_query(Some(&query));
    }

    /// Read a request back from a query string, as a server would.
    /// Unknown parameters are ignored.
    ///
    /// # Errors
    ///
    /// `FilterError::InvalidParameter` for an unknown sort order or a
    /// non-numeric index, and `FilterSyntaxError` for an invalid filter or
    /// attribute path.
    pub fn from_query(query: &str) -> FilterResult<Self> {
        let mut request = Self::default();

        // Form decoding turns legacy `+` back into spaces
        for (key, value) in url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match &*key {
                "filter" => request.filter = Some(Filter::parse(&value)?),
                "attributes" => request.attributes = parse_paths(&value)?,
                "excludedAttributes" => request.excluded_attributes = parse_paths(&value)?,
                "sortBy" => request.sort_by = Some(AttributeReference::parse(&value)?),
                "sortOrder" => request.sort_order = Some(value.parse()?),
                "startIndex" => request.start_index = Some(parse_number("startIndex", &value)?),
                "count" => request.count = Some(parse_number("count", &value)?),
                other => log::trace!("Ignoring query parameter {other}"),
            }
        }

        Ok(request)
    }
}

fn join_paths(paths: &[AttributeReference]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_paths(value: &str) -> FilterResult<Vec<AttributeReference>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(AttributeReference::parse)
        .collect()
}

fn parse_number(key: &str, value: &str) -> FilterResult<u32> {
    value
        .parse()
        .map_err(|_| invalid_parameter_error(key, format!("expected a non-negative integer, got `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_has_no_query() {
        assert_eq!(SearchRequest::new().to_query_string(), "");
    }

    #[test]
    fn attributes_join_with_commas() {
        let request = SearchRequest::new()
            .with_attribute("userName")
            .unwrap()
            .with_attribute("name.familyName")
            .unwrap();
        assert_eq!(request.to_query_string(), "attributes=userName%2Cname.familyName");
    }

    #[test]
    fn sort_order_parses_case_insensitively() {
        assert_eq!("Descending".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn unknown_sort_order_names_the_parameter() {
        let err = SearchRequest::from_query("sortOrder=sideways").unwrap_err();
        assert!(
            matches!(&err, FilterError::InvalidParameter { name, .. } if name == "sortOrder"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn bad_count_is_rejected() {
        assert!(matches!(
            SearchRequest::from_query("count=-1"),
            Err(FilterError::InvalidParameter { name, .. }) if name == "count"
        ));
    }

    #[test]
    fn form_encoded_pairs_are_decoded() {
        let err = SearchRequest::from_query("?tenant=a&filter=title+pr&count=").unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter { name, .. } if name == "count"));

        let request = SearchRequest::from_query("filter=title%20pr&&sortBy=name.familyName").unwrap();
        assert_eq!(request.filter.map(|f| f.to_string()), Some("title pr".to_string()));
        assert_eq!(
            request.sort_by.map(|a| a.to_string()),
            Some("name.familyName".to_string())
        );
    }
}
