//! Query-parameter encoding for canonical filter text

use std::borrow::Cow;

use super::error::{FilterError, FilterResult};

/// Percent-encode canonical filter text for a URL query value.
///
/// Spaces become `%20`, never `+`, and a literal `+` is escaped as `%2B`.
///
/// # Examples
/// ```
/// use scim_filter_core::filter::transport::encode_filter;
///
/// assert_eq!(encode_filter(r#"title eq "a+b c""#), "title%20eq%20%22a%2Bb%20c%22");
/// ```
#[must_use]
pub fn encode_filter(canonical: &str) -> String {
    urlencoding::encode(canonical).into_owned()
}

/// Reverse [`encode_filter`], also accepting form-style `+` for spaces
///
/// # Errors
///
/// Returns `FilterError::Encoding` when the escapes decode to invalid UTF-8.
pub fn decode_filter(encoded: &str) -> FilterResult<String> {
    let spaced: Cow<'_, str> = if encoded.contains('+') {
        Cow::Owned(encoded.replace('+', " "))
    } else {
        Cow::Borrowed(encoded)
    };

    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|err| FilterError::Encoding(format!("`{encoded}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_never_become_plus() {
        let encoded = encode_filter(r#"userName eq "john""#);
        assert_eq!(encoded, "userName%20eq%20%22john%22");
        assert!(!encoded.contains('+'));
    }

    #[test]
    fn decode_accepts_both_space_forms() {
        assert_eq!(decode_filter("a%20pr").unwrap(), "a pr");
        assert_eq!(decode_filter("a+pr").unwrap(), "a pr");
        assert_eq!(decode_filter("x%2By").unwrap(), "x+y");
    }

    #[test]
    fn decode_reverses_encode() {
        let canonical = r#"emails[value ew "@exämple.com" and type ne "a+b"]"#;
        assert_eq!(decode_filter(&encode_filter(canonical)).unwrap(), canonical);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(matches!(decode_filter("%FF%FE"), Err(FilterError::Encoding(_))));
    }
}
