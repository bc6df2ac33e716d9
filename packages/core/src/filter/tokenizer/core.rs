//! Core tokenizer types
//!
//! Provides the `Tokenizer` struct that turns filter text into a lexeme queue.

use std::collections::VecDeque;

use crate::filter::{
    error::FilterResult,
    tokens::{Lexeme, Token},
};

/// Splits filter text into lexemes
pub struct Tokenizer<'a> {
    pub(crate) input: &'a str,
    pub(crate) lexemes: VecDeque<Lexeme>,
}

impl<'a> Tokenizer<'a> {
    /// Create new tokenizer over `input`
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexemes: VecDeque::new(),
        }
    }

    /// Tokenize the whole input, terminated by an `EOF` lexeme
    pub fn tokenize(mut self) -> FilterResult<VecDeque<Lexeme>> {
        use super::{strings, words};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                c if c.is_whitespace() => {}
                '(' => self.push(Token::LeftParen, i),
                ')' => self.push(Token::RightParen, i),
                '[' => self.push(Token::LeftBracket, i),
                ']' => self.push(Token::RightBracket, i),
                '"' => {
                    i = strings::parse_string_literal(&mut self, &chars, i)?;
                }
                _ => {
                    i = words::parse_word(&mut self, &chars, i);
                }
            }
            i += 1;
        }

        self.push(Token::EOF, chars.len());
        Ok(self.lexemes)
    }

    #[inline]
    pub(crate) fn push(&mut self, token: Token, position: usize) {
        self.lexemes.push_back(Lexeme { token, position });
    }
}
