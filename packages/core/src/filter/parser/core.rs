//! Core filter parser structure and token-queue helpers

use std::collections::VecDeque;

use super::listener::FilterListener;
use crate::{
    config::ParserConfig,
    filter::{
        error::{FilterResult, invalid_expression_error},
        tokens::{Lexeme, Token},
    },
};

static EOF: Token = Token::EOF;

/// Recursive-descent parser for filter expressions.
///
/// Recognizes the grammar and reports each completed rule to its listener; it
/// never builds tree nodes itself.
pub struct FilterParser<'a, L> {
    pub(super) lexemes: VecDeque<Lexeme>,
    pub(super) input: &'a str,
    pub(super) listener: L,
    pub(super) depth: usize,
    pub(super) max_depth: usize,
    pub(super) connectives: usize,
    pub(super) max_operands: usize,
    pub(super) in_value_path: bool,
}

impl<'a, L: FilterListener> FilterParser<'a, L> {
    /// Create new filter parser over an already tokenized input
    #[inline]
    pub fn new(lexemes: VecDeque<Lexeme>, input: &'a str, config: &ParserConfig, listener: L) -> Self {
        Self {
            lexemes,
            input,
            listener,
            depth: 0,
            max_depth: config.max_nesting_depth,
            connectives: 0,
            max_operands: config.max_logical_operands,
            in_value_path: false,
        }
    }

    /// Parse the complete filter and hand back the listener
    pub fn parse(mut self) -> FilterResult<L> {
        self.parse_filter_expression()?;

        if !matches!(self.peek_token(), Token::EOF) {
            return Err(self.unexpected("logical operator or end of filter"));
        }

        self.listener.exit_filter()?;
        Ok(self.listener)
    }

    /// Peek at the next token without consuming it
    #[inline]
    pub(super) fn peek_token(&self) -> &Token {
        self.lexemes.front().map_or(&EOF, |lexeme| &lexeme.token)
    }

    /// Peek `n` tokens ahead
    #[inline]
    pub(super) fn peek_nth(&self, n: usize) -> &Token {
        self.lexemes.get(n).map_or(&EOF, |lexeme| &lexeme.token)
    }

    /// Position of the next token, or end of input
    #[inline]
    pub(super) fn position(&self) -> usize {
        self.lexemes
            .front()
            .map_or(self.input.chars().count(), |lexeme| lexeme.position)
    }

    /// Consume the next lexeme
    #[inline]
    pub(super) fn consume(&mut self) -> Lexeme {
        self.lexemes.pop_front().unwrap_or(Lexeme {
            token: Token::EOF,
            position: self.input.chars().count(),
        })
    }

    /// Expect a specific token and consume it
    pub(super) fn expect_token(&mut self, expected: &Token) -> FilterResult<Lexeme> {
        if std::mem::discriminant(self.peek_token()) == std::mem::discriminant(expected) {
            Ok(self.consume())
        } else {
            Err(self.unexpected(&expected.describe()))
        }
    }

    /// Error describing the next token as unexpected
    pub(super) fn unexpected(&self, wanted: &str) -> crate::filter::error::FilterError {
        invalid_expression_error(
            self.input,
            format!("expected {wanted}, found {}", self.peek_token().describe()),
            Some(self.position()),
        )
    }

    /// Track one more level of groups or value paths
    pub(super) fn enter_nesting(&mut self, position: usize) -> FilterResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(invalid_expression_error(
                self.input,
                format!("nesting depth exceeds maximum of {}", self.max_depth),
                Some(position),
            ));
        }
        Ok(())
    }

    /// Track one more `and`/`or`; `n` connectives join `n + 1` operands
    pub(super) fn count_connective(&mut self, position: usize) -> FilterResult<()> {
        self.connectives += 1;
        if self.connectives >= self.max_operands {
            return Err(invalid_expression_error(
                self.input,
                format!("filter joins more than {} logical operands", self.max_operands),
                Some(position),
            ));
        }
        Ok(())
    }

    #[inline]
    pub(super) fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
