//! Connectives, negation and value-path methods
//!
//! Operands passed in from outside (another builder's `Filter`, a parsed
//! expression) are wrapped in a plain group wherever their own connective
//! would otherwise regroup under the new one.

use scim_filter_core::filter::{
    AttributeReference, FilterExpression, FilterResult, LogicalOperator,
    error::invalid_expression_error,
};

use super::core::{BuilderState, FilterBuilder, Pending, wrap_left, wrap_right};

impl FilterBuilder {
    /// Bare `and`; the next leaf becomes its right operand
    ///
    /// # Errors
    ///
    /// `BuilderProtocolError` when there is nothing to connect yet.
    pub fn and(self) -> FilterResult<Self> {
        self.connect(LogicalOperator::And)
    }

    /// Bare `or`; the next leaf becomes its right operand
    ///
    /// # Errors
    ///
    /// `BuilderProtocolError` when there is nothing to connect yet.
    pub fn or(self) -> FilterResult<Self> {
        self.connect(LogicalOperator::Or)
    }

    /// `and` with an externally built operand
    ///
    /// With no root yet, `expression` becomes the left operand of an open
    /// `and`. Otherwise it joins the current root on the right.
    ///
    /// # Errors
    ///
    /// `BuilderProtocolError` if the merge would leave two adjacent connectives.
    pub fn and_expr(self, expression: impl Into<FilterExpression>) -> FilterResult<Self> {
        self.merge(LogicalOperator::And, expression.into())
    }

    /// `or` with an externally built operand
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::and_expr`].
    pub fn or_expr(self, expression: impl Into<FilterExpression>) -> FilterResult<Self> {
        self.merge(LogicalOperator::Or, expression.into())
    }

    /// `left and right`, merged into the session as one operand
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::and_expr`].
    pub fn and_pair(
        self,
        left: impl Into<FilterExpression>,
        right: impl Into<FilterExpression>,
    ) -> FilterResult<Self> {
        self.merge_pair(LogicalOperator::And, left.into(), right.into())
    }

    /// `left or right`, merged into the session as one operand
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::and_expr`].
    pub fn or_pair(
        self,
        left: impl Into<FilterExpression>,
        right: impl Into<FilterExpression>,
    ) -> FilterResult<Self> {
        self.merge_pair(LogicalOperator::Or, left.into(), right.into())
    }

    /// `not (expression)`, placed like a leaf
    ///
    /// # Errors
    ///
    /// `BuilderProtocolError` when the filter is already complete.
    pub fn not(self, expression: impl Into<FilterExpression>) -> FilterResult<Self> {
        self.place(FilterExpression::not(expression.into()))
    }

    /// `attribute[expression]`, placed like a leaf
    ///
    /// Bare attribute names inside `expression` are scoped under `attribute`.
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` for a malformed `attribute` or an `expression` that
    /// itself contains a value path, `BuilderProtocolError` when the filter is
    /// already complete.
    pub fn attribute_has(
        self,
        attribute: &str,
        expression: impl Into<FilterExpression>,
    ) -> FilterResult<Self> {
        let parent = AttributeReference::parse(attribute)?;
        let expression = expression.into();
        if contains_value_path(&expression) {
            return Err(invalid_expression_error(
                attribute,
                "value paths cannot be nested",
                None,
            ));
        }
        self.place(FilterExpression::value_path(parent, expression))
    }

    fn merge(self, operator: LogicalOperator, expression: FilterExpression) -> FilterResult<Self> {
        match self.state {
            BuilderState::Empty => Ok(Self {
                state: BuilderState::Pending(Pending::open(
                    wrap_left(operator, expression),
                    operator,
                )),
                ..self
            }),
            BuilderState::Pending(_) => self.place(expression)?.connect(operator),
            BuilderState::Complete(_) => self.connect(operator)?.place(expression),
        }
    }

    fn merge_pair(
        self,
        operator: LogicalOperator,
        left: FilterExpression,
        right: FilterExpression,
    ) -> FilterResult<Self> {
        let pair = FilterExpression::logical(
            wrap_left(operator, left),
            operator,
            wrap_right(operator, right),
        );
        match self.state {
            BuilderState::Empty | BuilderState::Pending(_) => self.place(pair),
            BuilderState::Complete(_) => self.connect(operator)?.place(pair),
        }
    }
}

fn contains_value_path(expression: &FilterExpression) -> bool {
    match expression {
        FilterExpression::ValuePath { .. } => true,
        FilterExpression::Logical { left, right, .. } => {
            contains_value_path(left) || contains_value_path(right)
        }
        FilterExpression::Group { inner, .. } => contains_value_path(inner),
        FilterExpression::Comparison { .. } | FilterExpression::Present { .. } => false,
    }
}
