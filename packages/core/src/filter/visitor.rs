//! Read-only traversal over filter trees
//!
//! Query-execution collaborators implement [`FilterVisitor`] to translate a
//! filter without caring whether it was parsed or built fluently.

use super::ast::{CompareOperator, FilterExpression, LogicalOperator};
use super::attribute::AttributeReference;
use super::literal::Literal;

/// One callback per expression variant. Visitors decide themselves whether and
/// when to descend into children via [`FilterExpression::accept`].
pub trait FilterVisitor {
    type Output;

    fn visit_comparison(
        &mut self,
        attribute: &AttributeReference,
        operator: CompareOperator,
        value: &Literal,
    ) -> Self::Output;

    fn visit_present(&mut self, attribute: &AttributeReference) -> Self::Output;

    fn visit_logical(
        &mut self,
        left: &FilterExpression,
        operator: LogicalOperator,
        right: &FilterExpression,
    ) -> Self::Output;

    fn visit_group(&mut self, negated: bool, inner: &FilterExpression) -> Self::Output;

    fn visit_value_path(
        &mut self,
        attribute: &AttributeReference,
        inner: &FilterExpression,
    ) -> Self::Output;
}

impl FilterExpression {
    /// Dispatch to the visitor method matching this node's variant
    pub fn accept<V: FilterVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Comparison {
                attribute,
                operator,
                value,
            } => visitor.visit_comparison(attribute, *operator, value),
            Self::Present { attribute } => visitor.visit_present(attribute),
            Self::Logical {
                left,
                operator,
                right,
            } => visitor.visit_logical(left, *operator, right),
            Self::Group { negated, inner } => visitor.visit_group(*negated, inner),
            Self::ValuePath { attribute, inner } => visitor.visit_value_path(attribute, inner),
        }
    }

    /// Every attribute reference in the tree, in left-to-right order.
    /// A value path contributes its own attribute before its scoped children.
    #[must_use]
    pub fn referenced_attributes(&self) -> Vec<AttributeReference> {
        let mut collector = AttributeCollector::default();
        self.accept(&mut collector);
        collector.attributes
    }
}

/// Gathers attribute references for schema validation upstream
#[derive(Debug, Default)]
pub struct AttributeCollector {
    pub attributes: Vec<AttributeReference>,
}

impl FilterVisitor for AttributeCollector {
    type Output = ();

    fn visit_comparison(&mut self, attribute: &AttributeReference, _: CompareOperator, _: &Literal) {
        self.attributes.push(attribute.clone());
    }

    fn visit_present(&mut self, attribute: &AttributeReference) {
        self.attributes.push(attribute.clone());
    }

    fn visit_logical(&mut self, left: &FilterExpression, _: LogicalOperator, right: &FilterExpression) {
        left.accept(self);
        right.accept(self);
    }

    fn visit_group(&mut self, _: bool, inner: &FilterExpression) {
        inner.accept(self);
    }

    fn visit_value_path(&mut self, attribute: &AttributeReference, inner: &FilterExpression) {
        self.attributes.push(attribute.clone());
        inner.accept(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(path: &str) -> AttributeReference {
        AttributeReference::parse(path).unwrap()
    }

    /// Maximum depth of the tree, leaves counting as 1
    struct Depth;

    impl FilterVisitor for Depth {
        type Output = usize;

        fn visit_comparison(&mut self, _: &AttributeReference, _: CompareOperator, _: &Literal) -> usize {
            1
        }

        fn visit_present(&mut self, _: &AttributeReference) -> usize {
            1
        }

        fn visit_logical(&mut self, left: &FilterExpression, _: LogicalOperator, right: &FilterExpression) -> usize {
            1 + left.accept(self).max(right.accept(self))
        }

        fn visit_group(&mut self, _: bool, inner: &FilterExpression) -> usize {
            1 + inner.accept(self)
        }

        fn visit_value_path(&mut self, _: &AttributeReference, inner: &FilterExpression) -> usize {
            1 + inner.accept(self)
        }
    }

    #[test]
    fn visitor_returns_values_per_variant() {
        let expr = FilterExpression::logical(
            FilterExpression::present(attr("a")),
            LogicalOperator::And,
            FilterExpression::not(FilterExpression::present(attr("b"))),
        );
        assert_eq!(expr.accept(&mut Depth), 3);
    }

    #[test]
    fn collects_attributes_in_order() {
        let expr = FilterExpression::logical(
            FilterExpression::comparison(attr("userName"), CompareOperator::Sw, "j".into()),
            LogicalOperator::Or,
            FilterExpression::value_path(attr("emails"), FilterExpression::present(attr("value"))),
        );
        assert_eq!(
            expr.referenced_attributes(),
            vec![attr("userName"), attr("emails"), attr("emails.value")]
        );
    }
}
