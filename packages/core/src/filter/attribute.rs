//! Attribute path references
//!
//! Parses and renders `[schemaUrn ":"] attributeName ["." subAttributeName]`
//! paths such as `urn:ietf:params:scim:schemas:core:2.0:User:name.familyName`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{FilterResult, malformed_attribute_path_error};

/// `urn:<nid>:...:<Name>` where the final segment names a resource or extension schema
static SCHEMA_URN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^urn:[a-z0-9][a-z0-9-]*(?::[^\s:]+)*:[a-z][a-z0-9_-]*$")
        .expect("schema URN pattern is a valid regex")
});

/// Reference to a (possibly schema-qualified) attribute or sub-attribute
///
/// Equality, hashing and ordering ignore ASCII case on every component, matching
/// the case-insensitive attribute names of the protocol.
#[derive(Debug, Clone)]
pub struct AttributeReference {
    urn: Option<String>,
    attribute_name: String,
    sub_attribute_name: Option<String>,
}

impl AttributeReference {
    /// Parse an attribute path
    ///
    /// # Errors
    ///
    /// Returns a `MalformedAttributePath` syntax error when the path has no
    /// attribute name, the schema URN prefix is not URN-shaped, the attribute
    /// name contains characters outside `ALPHA *(ALPHA / DIGIT / "-" / "_")`,
    /// or the text after the first `.` has an empty component.
    pub fn parse(path: &str) -> FilterResult<Self> {
        let (urn, remainder) = match path.rfind(':') {
            Some(idx) => {
                let urn = &path[..idx];
                if !SCHEMA_URN.is_match(urn) {
                    return Err(malformed_attribute_path_error(path));
                }
                (Some(urn.to_string()), &path[idx + 1..])
            }
            None => (None, path),
        };

        if remainder.is_empty() {
            return Err(malformed_attribute_path_error(path));
        }

        let (attribute_name, sub_attribute_name) = match remainder.split_once('.') {
            Some((name, sub)) => (name, Some(sub)),
            None => (remainder, None),
        };

        // Everything after the first `.` is the sub-attribute, dots included
        if !is_attribute_name(attribute_name)
            || sub_attribute_name.is_some_and(|sub| sub.split('.').any(str::is_empty))
        {
            return Err(malformed_attribute_path_error(path));
        }

        Ok(Self {
            urn,
            attribute_name: attribute_name.to_string(),
            sub_attribute_name: sub_attribute_name.map(str::to_string),
        })
    }

    /// Build a reference from already separated components
    ///
    /// # Errors
    ///
    /// Same conditions as [`AttributeReference::parse`] on the rendered path.
    pub fn from_parts(
        urn: Option<&str>,
        attribute_name: &str,
        sub_attribute_name: Option<&str>,
    ) -> FilterResult<Self> {
        let mut path = String::new();
        if let Some(urn) = urn {
            path.push_str(urn);
            path.push(':');
        }
        path.push_str(attribute_name);
        if let Some(sub) = sub_attribute_name {
            path.push('.');
            path.push_str(sub);
        }
        Self::parse(&path)
    }

    #[must_use]
    pub fn urn(&self) -> Option<&str> {
        self.urn.as_deref()
    }

    #[must_use]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    #[must_use]
    pub fn sub_attribute_name(&self) -> Option<&str> {
        self.sub_attribute_name.as_deref()
    }

    /// `name.sub` without the schema URN
    #[must_use]
    pub fn attribute_base(&self) -> String {
        match &self.sub_attribute_name {
            Some(sub) => format!("{}.{sub}", self.attribute_name),
            None => self.attribute_name.clone(),
        }
    }

    /// Canonical `urn:...:Name:attr.sub` rendering
    #[must_use]
    pub fn full_path(&self) -> String {
        self.to_string()
    }

    /// Re-root a bare attribute name under a multi-valued parent.
    ///
    /// Inside `emails[type eq "work"]` the reference `type` denotes
    /// `emails.type`; references that already carry a URN or sub-attribute
    /// are left as written.
    #[must_use]
    pub fn scoped_under(&self, parent: &Self) -> Self {
        if self.urn.is_some() || self.sub_attribute_name.is_some() {
            return self.clone();
        }
        Self {
            urn: parent.urn.clone(),
            attribute_name: parent.attribute_name.clone(),
            sub_attribute_name: Some(self.attribute_name.clone()),
        }
    }

    /// True when this reference is a sub-attribute of `parent`
    #[must_use]
    pub fn is_scoped_under(&self, parent: &Self) -> bool {
        self.sub_attribute_name.is_some()
            && self.attribute_name.eq_ignore_ascii_case(&parent.attribute_name)
            && eq_ignore_case_opt(self.urn.as_deref(), parent.urn.as_deref())
    }

    fn folded(&self) -> (Option<String>, String, Option<String>) {
        (
            self.urn.as_deref().map(str::to_ascii_lowercase),
            self.attribute_name.to_ascii_lowercase(),
            self.sub_attribute_name.as_deref().map(str::to_ascii_lowercase),
        )
    }
}

fn is_attribute_name(name: &str) -> bool {
    let name = name.strip_prefix('$').unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

fn eq_ignore_case_opt(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for AttributeReference {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case_opt(self.urn.as_deref(), other.urn.as_deref())
            && self.attribute_name.eq_ignore_ascii_case(&other.attribute_name)
            && eq_ignore_case_opt(
                self.sub_attribute_name.as_deref(),
                other.sub_attribute_name.as_deref(),
            )
    }
}

impl Eq for AttributeReference {}

impl Hash for AttributeReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for AttributeReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}

impl fmt::Display for AttributeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(urn) = &self.urn {
            write!(f, "{urn}:")?;
        }
        f.write_str(&self.attribute_name)?;
        if let Some(sub) = &self.sub_attribute_name {
            write!(f, ".{sub}")?;
        }
        Ok(())
    }
}

impl FromStr for AttributeReference {
    type Err = super::error::FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AttributeReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AttributeReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Self::parse(&path).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::error::SyntaxCause;

    const USER_URN: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

    #[test]
    fn parses_simple_name() {
        let attr = AttributeReference::parse("userName").unwrap();
        assert_eq!(attr.urn(), None);
        assert_eq!(attr.attribute_name(), "userName");
        assert_eq!(attr.sub_attribute_name(), None);
    }

    #[test]
    fn parses_urn_qualified_sub_attribute() {
        let attr = AttributeReference::parse(&format!("{USER_URN}:name.familyName")).unwrap();
        assert_eq!(attr.urn(), Some(USER_URN));
        assert_eq!(attr.attribute_name(), "name");
        assert_eq!(attr.sub_attribute_name(), Some("familyName"));
        assert_eq!(attr.to_string(), format!("{USER_URN}:name.familyName"));
    }

    #[test]
    fn enterprise_extension_urn_keeps_version_dots() {
        let path = "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User:manager.value";
        let attr = AttributeReference::parse(path).unwrap();
        assert_eq!(
            attr.urn(),
            Some("urn:ietf:params:scim:schemas:extension:enterprise:2.0:User")
        );
        assert_eq!(attr.attribute_base(), "manager.value");
    }

    #[test]
    fn empty_remainder_is_malformed() {
        for path in ["", "urn:ietf:params:scim:schemas:core:2.0:User:", "name.", ".sub"] {
            let err = AttributeReference::parse(path).unwrap_err();
            assert!(
                matches!(err.syntax_cause(), Some(SyntaxCause::MalformedAttributePath(p)) if p == path),
                "expected malformed path for {path:?}"
            );
        }
    }

    #[test]
    fn non_urn_prefix_is_malformed() {
        assert!(AttributeReference::parse("http://example.com:name").is_err());
        assert!(AttributeReference::parse("foo:bar").is_err());
    }

    #[test]
    fn equality_ignores_case() {
        let a = AttributeReference::parse("Name.FamilyName").unwrap();
        let b = AttributeReference::parse("name.familyname").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn scoping_rewrites_bare_names_only() {
        let parent = AttributeReference::parse(&format!("{USER_URN}:emails")).unwrap();
        let bare = AttributeReference::parse("type").unwrap();
        let scoped = bare.scoped_under(&parent);
        assert_eq!(scoped.to_string(), format!("{USER_URN}:emails.type"));
        assert!(scoped.is_scoped_under(&parent));

        let qualified = AttributeReference::parse("emails.value").unwrap();
        assert_eq!(qualified.scoped_under(&parent), qualified);
    }

    #[test]
    fn sub_attribute_keeps_text_after_first_dot() {
        let attr = AttributeReference::parse("a.b.c").unwrap();
        assert_eq!(attr.attribute_name(), "a");
        assert_eq!(attr.sub_attribute_name(), Some("b.c"));
        assert_eq!(attr.to_string(), "a.b.c");

        for path in ["a..b", "a.b.", "a.b..c"] {
            assert!(AttributeReference::parse(path).is_err(), "{path} should be rejected");
        }
    }

    #[test]
    fn ref_attribute_names_are_allowed() {
        let attr = AttributeReference::parse("members.$ref").unwrap();
        assert_eq!(attr.sub_attribute_name(), Some("$ref"));
    }
}
