//! String literal tokenization
//!
//! Finds the extent of a double-quoted string. The text is kept verbatim,
//! escapes included; unescaping is the literal decoder's job.

use super::core::Tokenizer;
use crate::filter::{
    error::{FilterResult, invalid_expression_error},
    tokens::Token,
};

/// Scan a quoted string starting at `chars[i] == '"'`.
/// Returns the index of the closing quote.
pub(crate) fn parse_string_literal(
    tokenizer: &mut Tokenizer<'_>,
    chars: &[char],
    mut i: usize,
) -> FilterResult<usize> {
    let start = i;
    i += 1; // Skip opening quote

    while i < chars.len() {
        match chars[i] {
            '"' => break,
            '\\' => i += 2,
            _ => i += 1,
        }
    }

    if i >= chars.len() {
        return Err(invalid_expression_error(
            tokenizer.input,
            "unterminated string literal",
            Some(start),
        ));
    }

    let raw: String = chars[start..=i].iter().collect();
    tokenizer.push(Token::String(raw), start);
    Ok(i)
}

#[cfg(test)]
mod tests {
    use crate::filter::tokenizer::Tokenizer;
    use crate::filter::tokens::Token;

    #[test]
    fn escaped_quote_does_not_terminate() {
        let lexemes = Tokenizer::new(r#""say \"hi\"" x"#).tokenize().unwrap();
        assert_eq!(lexemes[0].token, Token::String(r#""say \"hi\"""#.into()));
        assert_eq!(lexemes[1].token, Token::Word("x".into()));
    }

    #[test]
    fn unterminated_string_reports_opening_quote() {
        let err = Tokenizer::new(r#"name eq "abc"#).tokenize().unwrap_err();
        assert_eq!(err.position(), Some(8));
    }

    #[test]
    fn trailing_backslash_is_unterminated() {
        assert!(Tokenizer::new(r#"a eq "abc\"#).tokenize().is_err());
    }
}
