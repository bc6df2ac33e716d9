//! Search request wire format tests

use scim_filter::{
    FilterClient, FilterResult, SEARCH_REQUEST_SCHEMA, SearchRequest, SortOrder,
};
use url::Url;

fn sample_request() -> FilterResult<SearchRequest> {
    let filter = FilterClient::builder()
        .equal_to("meta.resourceType", "User")?
        .and()?
        .starts_with("name.familyName", "O'Mal ley")?
        .build()?;

    Ok(SearchRequest::new()
        .with_filter(filter)
        .with_attribute("displayName")?
        .with_attribute("userName")?
        .with_excluded_attribute("urn:ietf:params:scim:schemas:core:2.0:User:emails")?
        .with_sort_by("name.familyName")?
        .with_sort_order(SortOrder::Descending)
        .with_start_index(1)
        .with_count(10))
}

#[test]
fn test_post_body_uses_camel_case() -> FilterResult<()> {
    let request = sample_request()?;
    let json = serde_json::to_value(&request).expect("serializes");

    assert_eq!(json["schemas"][0], SEARCH_REQUEST_SCHEMA);
    assert_eq!(json["attributes"], serde_json::json!(["displayName", "userName"]));
    assert_eq!(
        json["excludedAttributes"],
        serde_json::json!(["urn:ietf:params:scim:schemas:core:2.0:User:emails"])
    );
    assert_eq!(
        json["filter"],
        r#"meta.resourceType eq "User" and name.familyName sw "O'Mal ley""#
    );
    assert_eq!(json["sortBy"], "name.familyName");
    assert_eq!(json["sortOrder"], "descending");
    assert_eq!(json["startIndex"], 1);
    assert_eq!(json["count"], 10);
    Ok(())
}

#[test]
fn test_post_body_round_trips() -> FilterResult<()> {
    let request = sample_request()?;
    let json = serde_json::to_string(&request).expect("serializes");
    let back: SearchRequest = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, request);
    Ok(())
}

#[test]
fn test_minimal_body_omits_empty_fields() {
    let json = serde_json::to_string(&SearchRequest::new()).expect("serializes");
    assert_eq!(json, format!(r#"{{"schemas":["{SEARCH_REQUEST_SCHEMA}"]}}"#));

    let back: SearchRequest = serde_json::from_str("{}").expect("schemas default");
    assert_eq!(back.schemas, vec![SEARCH_REQUEST_SCHEMA.to_string()]);
}

#[test]
fn test_invalid_filter_in_body_is_rejected() {
    let result = serde_json::from_str::<SearchRequest>(r#"{"filter":"userName eq"}"#);
    assert!(result.is_err());
}

#[test]
fn test_query_string_never_uses_plus() -> FilterResult<()> {
    let query = sample_request()?.to_query_string();

    assert!(!query.contains('+'));
    assert!(query.starts_with("filter=meta.resourceType%20eq%20%22User%22%20and%20"));
    assert!(query.contains("&sortOrder=descending&startIndex=1&count=10"));
    Ok(())
}

#[test]
fn test_query_round_trips() -> FilterResult<()> {
    let request = sample_request()?;
    let back = SearchRequest::from_query(&request.to_query_string())?;
    assert_eq!(back, request);
    Ok(())
}

#[test]
fn test_apply_to_url_keeps_existing_query() -> FilterResult<()> {
    let mut url = Url::parse("https://example.com/scim/v2/Users?tenant=a").expect("valid url");
    let request = SearchRequest::new()
        .with_filter(FilterClient::parse("title pr")?)
        .with_count(5);

    request.apply_to(&mut url);

    assert_eq!(url.query(), Some("tenant=a&filter=title%20pr&count=5"));
    Ok(())
}

#[test]
fn test_legacy_plus_query_decodes() -> FilterResult<()> {
    let request = SearchRequest::from_query("?filter=userName+eq+%22bjensen%22&sortBy=userName")?;
    let filter = request.filter.expect("filter present");
    assert_eq!(filter.as_str(), r#"userName eq "bjensen""#);
    assert_eq!(request.sort_by.map(|a| a.to_string()), Some("userName".to_string()));
    Ok(())
}
