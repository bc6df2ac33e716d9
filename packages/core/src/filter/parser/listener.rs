//! Grammar exit events and the stack-based tree builder
//!
//! The parser reports each completed grammar rule to a [`FilterListener`].
//! [`ExpressionBuildingListener`] reacts by popping the rule's children off an
//! explicit expression stack and pushing the node it builds from them, so the
//! tree grows bottom-up and a finished filter leaves exactly one node behind.

use crate::filter::{
    ast::{CompareOperator, FilterExpression, LogicalOperator},
    attribute::AttributeReference,
    error::{FilterError, FilterResult},
    literal::Literal,
};

/// Receives one callback per grammar rule, in post-order
pub trait FilterListener {
    /// `attrPath compareOp compareValue`
    fn exit_compare_expression(
        &mut self,
        attribute: AttributeReference,
        operator: CompareOperator,
        value: Literal,
    ) -> FilterResult<()>;

    /// `attrPath "pr"`
    fn exit_present_expression(&mut self, attribute: AttributeReference) -> FilterResult<()>;

    /// `filter logicOp filter`, both operands already reported
    fn exit_logic_expression(&mut self, operator: LogicalOperator) -> FilterResult<()>;

    /// `["not"] "(" filter ")"`, the inner filter already reported
    fn exit_group_expression(&mut self, negated: bool) -> FilterResult<()>;

    /// `attrPath "[" filter "]"`, the inner filter already reported
    fn exit_value_path_expression(&mut self, attribute: AttributeReference) -> FilterResult<()>;

    /// The whole filter production completed
    fn exit_filter(&mut self) -> FilterResult<()>;
}

/// Builds a [`FilterExpression`] tree from exit events.
/// Each parse owns a fresh listener; nothing is shared between parses.
#[derive(Debug, Default)]
pub struct ExpressionBuildingListener {
    stack: Vec<FilterExpression>,
}

impl ExpressionBuildingListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The finished root expression
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Internal` unless exactly one node remains.
    pub fn into_expression(mut self) -> FilterResult<FilterExpression> {
        self.check_single_root()?;
        self.pop()
    }

    fn pop(&mut self) -> FilterResult<FilterExpression> {
        self.stack.pop().ok_or_else(|| {
            FilterError::Internal("expression stack underflow".to_string())
        })
    }

    fn check_single_root(&self) -> FilterResult<()> {
        debug_assert!(
            self.stack.len() == 1,
            "wrong number ({}) of expressions on stack, should be 1",
            self.stack.len()
        );
        if self.stack.len() == 1 {
            Ok(())
        } else {
            Err(FilterError::Internal(format!(
                "wrong number ({}) of expressions on stack, should be 1",
                self.stack.len()
            )))
        }
    }
}

impl FilterListener for ExpressionBuildingListener {
    fn exit_compare_expression(
        &mut self,
        attribute: AttributeReference,
        operator: CompareOperator,
        value: Literal,
    ) -> FilterResult<()> {
        self.stack
            .push(FilterExpression::comparison(attribute, operator, value));
        Ok(())
    }

    fn exit_present_expression(&mut self, attribute: AttributeReference) -> FilterResult<()> {
        self.stack.push(FilterExpression::present(attribute));
        Ok(())
    }

    fn exit_logic_expression(&mut self, operator: LogicalOperator) -> FilterResult<()> {
        let right = self.pop()?;
        let left = self.pop()?;
        self.stack
            .push(FilterExpression::logical(left, operator, right));
        Ok(())
    }

    fn exit_group_expression(&mut self, negated: bool) -> FilterResult<()> {
        let inner = self.pop()?;
        self.stack.push(FilterExpression::group(negated, inner));
        Ok(())
    }

    fn exit_value_path_expression(&mut self, attribute: AttributeReference) -> FilterResult<()> {
        let inner = self.pop()?;
        self.stack
            .push(FilterExpression::value_path(attribute, inner));
        Ok(())
    }

    fn exit_filter(&mut self) -> FilterResult<()> {
        self.check_single_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(path: &str) -> AttributeReference {
        AttributeReference::parse(path).unwrap()
    }

    #[test]
    fn logic_exit_pops_right_then_left() {
        let mut listener = ExpressionBuildingListener::new();
        listener.exit_present_expression(attr("a")).unwrap();
        listener.exit_present_expression(attr("b")).unwrap();
        listener.exit_logic_expression(LogicalOperator::Or).unwrap();
        listener.exit_filter().unwrap();

        assert_eq!(
            listener.into_expression().unwrap(),
            FilterExpression::logical(
                FilterExpression::present(attr("a")),
                LogicalOperator::Or,
                FilterExpression::present(attr("b")),
            )
        );
    }

    #[test]
    fn value_path_exit_scopes_inner() {
        let mut listener = ExpressionBuildingListener::new();
        listener
            .exit_compare_expression(attr("type"), CompareOperator::Eq, "work".into())
            .unwrap();
        listener.exit_value_path_expression(attr("emails")).unwrap();

        let FilterExpression::ValuePath { inner, .. } = listener.into_expression().unwrap() else {
            panic!("expected value path");
        };
        assert!(matches!(*inner, FilterExpression::Comparison { ref attribute, .. } if *attribute == attr("emails.type")));
    }

    #[test]
    fn underflow_is_internal_error() {
        let mut listener = ExpressionBuildingListener::new();
        let err = listener.exit_group_expression(true).unwrap_err();
        assert!(matches!(err, FilterError::Internal(_)));
    }
}
