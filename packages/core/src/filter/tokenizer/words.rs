//! Bare word tokenization
//!
//! Attribute paths, keywords, numbers and JSON keywords all run until
//! whitespace, a bracket, a parenthesis or a quote.

use super::core::Tokenizer;
use crate::filter::tokens::Token;

#[inline]
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '"')
}

/// Scan a word starting at `chars[i]`. Returns the index of its last character.
pub(crate) fn parse_word(tokenizer: &mut Tokenizer<'_>, chars: &[char], i: usize) -> usize {
    let start = i;
    let mut end = i;
    while end < chars.len() && !is_delimiter(chars[end]) {
        end += 1;
    }

    let word: String = chars[start..end].iter().collect();
    tokenizer.push(Token::Word(word), start);
    end.saturating_sub(1) // Adjust for loop increment
}
