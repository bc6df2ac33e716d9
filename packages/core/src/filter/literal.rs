//! Comparison value literals
//!
//! Decodes the raw text that follows a comparison operator into a JSON-style
//! literal and converts Rust operand types into the same representation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};

use super::error::{FilterResult, unparsable_literal_error};

/// Comparison value
///
/// Integer and floating-point input collapse into a single `Number`; dates are
/// carried as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Decode the raw text of a comparison value
///
/// Quoted text is unescaped with JSON rules; `\/` and `/` both yield a slash and
/// a backslash-escaped single quote yields a plain single quote, so filters
/// written by older clients keep decoding. Bare `null`, `true` and `false` are
/// matched case-sensitively, anything else must parse as a finite number.
///
/// # Errors
///
/// Returns an `UnparsableLiteral` syntax error carrying `raw` when no form matches.
///
/// # Examples
/// ```
/// use scim_filter_core::filter::{Literal, parse_json_type};
///
/// assert_eq!(parse_json_type("true").unwrap(), Literal::Bool(true));
/// assert_eq!(parse_json_type("3.14E+10").unwrap(), Literal::Number(3.14e10));
/// ```
pub fn parse_json_type(raw: &str) -> FilterResult<Literal> {
    if raw.starts_with('"') {
        return parse_quoted(raw);
    }

    match raw {
        "null" => Ok(Literal::Null),
        "true" => Ok(Literal::Bool(true)),
        "false" => Ok(Literal::Bool(false)),
        _ => match raw.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Literal::Number(number)),
            _ => {
                log::warn!("Unable to parse a json value: {raw}");
                Err(unparsable_literal_error(raw))
            }
        },
    }
}

fn parse_quoted(raw: &str) -> FilterResult<Literal> {
    if raw.len() < 2 || !raw.ends_with('"') {
        return Err(unparsable_literal_error(raw));
    }

    let inner = &raw[1..raw.len() - 1];
    let normalized = normalize_escapes(inner);

    serde_json::from_str::<String>(&format!("\"{normalized}\""))
        .map(Literal::String)
        .map_err(|e| {
            log::warn!("Unable to unescape string literal {raw}: {e}");
            unparsable_literal_error(raw)
        })
}

/// Rewrite `\'` to `'` and escape raw control characters, leaving every
/// other escape pair intact
fn normalize_escapes(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c < '\u{20}' {
            out.push_str(&format!("\\u{:04x}", u32::from(c)));
            continue;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => out.push('\''),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }

    out
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! literal_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

literal_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Self::String(value.format("%Y-%m-%d").to_string())
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(value: NaiveDateTime) -> Self {
        Self::String(value.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Literal
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Self::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
