//! Grammar rules for filter expressions
//!
//! `or` binds loosest, then `and`, then attribute expressions: groups, value
//! paths, presence tests and comparisons. Each rule reports its exit to the
//! listener once its children have been reported.

use super::core::FilterParser;
use super::listener::FilterListener;
use crate::filter::{
    ast::{CompareOperator, LogicalOperator},
    attribute::AttributeReference,
    error::{FilterResult, invalid_expression_error, relocate},
    literal::parse_json_type,
    tokens::Token,
};

impl<L: FilterListener> FilterParser<'_, L> {
    /// Parse a complete `filter` production
    #[inline]
    pub(super) fn parse_filter_expression(&mut self) -> FilterResult<()> {
        self.parse_logical_or()
    }

    /// Parse logical OR expressions (lowest precedence)
    fn parse_logical_or(&mut self) -> FilterResult<()> {
        self.parse_logical_and()?;

        while self.peek_token().is_keyword(LogicalOperator::Or.as_str()) {
            let connective = self.consume();
            self.count_connective(connective.position)?;
            self.parse_logical_and()?;
            self.listener.exit_logic_expression(LogicalOperator::Or)?;
        }

        Ok(())
    }

    /// Parse logical AND expressions
    fn parse_logical_and(&mut self) -> FilterResult<()> {
        self.parse_attribute_expression()?;

        while self.peek_token().is_keyword(LogicalOperator::And.as_str()) {
            let connective = self.consume();
            self.count_connective(connective.position)?;
            self.parse_attribute_expression()?;
            self.listener.exit_logic_expression(LogicalOperator::And)?;
        }

        Ok(())
    }

    /// Parse a group, negated group, value path, presence test or comparison
    fn parse_attribute_expression(&mut self) -> FilterResult<()> {
        match self.peek_token() {
            Token::LeftParen => self.parse_group(false),
            Token::Word(word)
                if word.eq_ignore_ascii_case("not")
                    && matches!(self.peek_nth(1), Token::LeftParen) =>
            {
                self.consume();
                self.parse_group(true)
            }
            Token::Word(_) => self.parse_attribute_path_expression(),
            _ => Err(self.unexpected("attribute expression")),
        }
    }

    /// `["not"] "(" filter ")"`, the `not` already consumed
    fn parse_group(&mut self, negated: bool) -> FilterResult<()> {
        let open = self.expect_token(&Token::LeftParen)?;
        self.enter_nesting(open.position)?;

        self.parse_filter_expression()?;
        self.expect_token(&Token::RightParen)?;

        self.leave_nesting();
        self.listener.exit_group_expression(negated)
    }

    /// Everything that starts with an attribute path
    fn parse_attribute_path_expression(&mut self) -> FilterResult<()> {
        let path = self.consume();
        let attribute = match &path.token {
            Token::Word(word) => AttributeReference::parse(word)
                .map_err(|err| relocate(err, self.input, path.position))?,
            _ => return Err(self.unexpected("attribute path")),
        };

        match self.peek_token() {
            Token::LeftBracket => self.parse_value_path(attribute),
            token if token.is_keyword("pr") => {
                self.consume();
                self.listener.exit_present_expression(attribute)
            }
            Token::Word(word) => match CompareOperator::from_keyword(word) {
                Some(operator) => {
                    self.consume();
                    self.parse_comparison(attribute, operator)
                }
                None => Err(self.unexpected(&format!(
                    "comparison operator or 'pr' after '{attribute}'"
                ))),
            },
            _ => Err(self.unexpected(&format!(
                "comparison operator, 'pr' or '[' after '{attribute}'"
            ))),
        }
    }

    /// `attrPath "[" valFilter "]"`
    fn parse_value_path(&mut self, attribute: AttributeReference) -> FilterResult<()> {
        let open = self.expect_token(&Token::LeftBracket)?;
        if self.in_value_path {
            return Err(invalid_expression_error(
                self.input,
                "value paths cannot be nested",
                Some(open.position),
            ));
        }
        self.enter_nesting(open.position)?;
        self.in_value_path = true;

        self.parse_filter_expression()?;
        self.expect_token(&Token::RightBracket)?;

        self.in_value_path = false;
        self.leave_nesting();
        self.listener.exit_value_path_expression(attribute)
    }

    /// `compValue` following an operator keyword
    fn parse_comparison(
        &mut self,
        attribute: AttributeReference,
        operator: CompareOperator,
    ) -> FilterResult<()> {
        if !self.peek_token().is_value() {
            return Err(self.unexpected(&format!("comparison value after '{operator}'")));
        }

        let lexeme = self.consume();
        let value = match &lexeme.token {
            Token::String(raw) | Token::Word(raw) => {
                parse_json_type(raw).map_err(|err| relocate(err, self.input, lexeme.position))?
            }
            _ => return Err(self.unexpected("comparison value")),
        };

        self.listener
            .exit_compare_expression(attribute, operator, value)
    }
}
