//! Attribute comparison and presence methods
//!
//! Each method parses `key` as an attribute path, builds the leaf and places it
//! with the comparison-slot rule.

use scim_filter_core::filter::{
    AttributeReference, CompareOperator, FilterExpression, FilterResult, Literal,
};

use super::{core::FilterBuilder, operand::OrderedOperand};

impl FilterBuilder {
    fn compare(self, key: &str, operator: CompareOperator, value: Literal) -> FilterResult<Self> {
        let attribute = AttributeReference::parse(key)?;
        self.place(FilterExpression::comparison(attribute, operator, value))
    }

    /// `key eq value`
    ///
    /// # Arguments
    /// * `key` - Attribute path, optionally URN-qualified
    /// * `value` - String, boolean, number, date or `Option` of those
    ///
    /// # Errors
    ///
    /// `FilterSyntaxError` for a malformed `key`; `BuilderProtocolError` when
    /// the previous call already completed the filter.
    pub fn equal_to(self, key: &str, value: impl Into<Literal>) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Eq, value.into())
    }

    /// `key ne value`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn not_equal(self, key: &str, value: impl Into<Literal>) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Ne, value.into())
    }

    /// `key eq null`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn equal_null(self, key: &str) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Eq, Literal::Null)
    }

    /// `key ne null`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn not_equal_null(self, key: &str) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Ne, Literal::Null)
    }

    /// `key gt value`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn greater_than(self, key: &str, value: impl OrderedOperand) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Gt, value.into())
    }

    /// `key ge value`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn greater_than_or_equals(self, key: &str, value: impl OrderedOperand) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Ge, value.into())
    }

    /// `key lt value`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn less_than(self, key: &str, value: impl OrderedOperand) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Lt, value.into())
    }

    /// `key le value`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn less_than_or_equals(self, key: &str, value: impl OrderedOperand) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Le, value.into())
    }

    /// `key sw "value"`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn starts_with(self, key: &str, value: impl Into<String>) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Sw, Literal::String(value.into()))
    }

    /// `key ew "value"`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn ends_with(self, key: &str, value: impl Into<String>) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Ew, Literal::String(value.into()))
    }

    /// `key co "value"`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn contains(self, key: &str, value: impl Into<String>) -> FilterResult<Self> {
        self.compare(key, CompareOperator::Co, Literal::String(value.into()))
    }

    /// `key pr`
    ///
    /// # Errors
    ///
    /// As [`FilterBuilder::equal_to`].
    pub fn present(self, key: &str) -> FilterResult<Self> {
        let attribute = AttributeReference::parse(key)?;
        self.place(FilterExpression::present(attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scim_filter_core::filter::SyntaxCause;

    #[test]
    fn ordering_methods_use_their_own_operator() {
        let cases = [
            (FilterBuilder::new().greater_than("w", 1).unwrap(), "w gt 1"),
            (FilterBuilder::new().greater_than_or_equals("w", 1).unwrap(), "w ge 1"),
            (FilterBuilder::new().less_than("w", 1).unwrap(), "w lt 1"),
            (FilterBuilder::new().less_than_or_equals("w", 1).unwrap(), "w le 1"),
        ];
        for (builder, expected) in cases {
            assert_eq!(builder.to_canonical_string().unwrap(), expected);
        }
    }

    #[test]
    fn null_helpers() {
        let text = FilterBuilder::new()
            .equal_null("manager")
            .unwrap()
            .to_canonical_string()
            .unwrap();
        assert_eq!(text, "manager eq null");

        let text = FilterBuilder::new()
            .not_equal("manager", None::<&str>)
            .unwrap()
            .to_canonical_string()
            .unwrap();
        assert_eq!(text, "manager ne null");
    }

    #[test]
    fn malformed_key_is_syntax_error() {
        let err = FilterBuilder::new().equal_to("bad key", "x").unwrap_err();
        assert!(matches!(err.syntax_cause(), Some(SyntaxCause::MalformedAttributePath(_))));
    }

    #[test]
    fn second_leaf_without_connective_is_rejected() {
        let err = FilterBuilder::new()
            .present("a")
            .unwrap()
            .present("b")
            .unwrap_err();
        assert!(err.is_builder_protocol());
    }
}
