//! Filter Abstract Syntax Tree (AST) definitions
//!
//! Core type definitions for representing filter expressions as structured data.
//! Trees are built once, by the parser or the fluent builder, and never mutated
//! afterwards; every node owns its children outright.

use std::str::FromStr;

use super::attribute::AttributeReference;
use super::error::FilterError;
use super::literal::Literal;

/// Comparison operators for attribute expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOperator {
    /// Equal (eq)
    Eq,
    /// Not equal (ne)
    Ne,
    /// Contains (co)
    Co,
    /// Starts with (sw)
    Sw,
    /// Ends with (ew)
    Ew,
    /// Greater than (gt)
    Gt,
    /// Greater than or equal (ge)
    Ge,
    /// Less than (lt)
    Lt,
    /// Less than or equal (le)
    Le,
}

impl CompareOperator {
    pub const ALL: [Self; 9] = [
        Self::Eq,
        Self::Ne,
        Self::Co,
        Self::Sw,
        Self::Ew,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
    ];

    /// Wire keyword, lowercase
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Co => "co",
            Self::Sw => "sw",
            Self::Ew => "ew",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
        }
    }

    /// Match a keyword case-insensitively
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(word))
    }
}

impl FromStr for CompareOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| {
            super::error::invalid_expression_error(s, "unknown comparison operator", None)
        })
    }
}

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("and") {
            Some(Self::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(Self::Or)
        } else {
            None
        }
    }
}

/// Filter expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// `attr op value`
    Comparison {
        attribute: AttributeReference,
        operator: CompareOperator,
        value: Literal,
    },

    /// `attr pr`
    Present { attribute: AttributeReference },

    /// `left and right`, `left or right`
    Logical {
        left: Box<FilterExpression>,
        operator: LogicalOperator,
        right: Box<FilterExpression>,
    },

    /// `(inner)` or `not (inner)`
    Group {
        negated: bool,
        inner: Box<FilterExpression>,
    },

    /// `attr[inner]`, with every bare attribute in `inner` scoped under `attr`
    ValuePath {
        attribute: AttributeReference,
        inner: Box<FilterExpression>,
    },
}

impl FilterExpression {
    #[must_use]
    pub fn comparison(attribute: AttributeReference, operator: CompareOperator, value: Literal) -> Self {
        Self::Comparison {
            attribute,
            operator,
            value,
        }
    }

    #[must_use]
    pub fn present(attribute: AttributeReference) -> Self {
        Self::Present { attribute }
    }

    #[must_use]
    pub fn logical(left: Self, operator: LogicalOperator, right: Self) -> Self {
        Self::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn group(negated: bool, inner: Self) -> Self {
        Self::Group {
            negated,
            inner: Box::new(inner),
        }
    }

    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::group(true, inner)
    }

    /// Build a value path, scoping bare attribute names in `inner` under `attribute`
    #[must_use]
    pub fn value_path(attribute: AttributeReference, inner: Self) -> Self {
        let inner = inner.scoped_under(&attribute);
        Self::ValuePath {
            attribute,
            inner: Box::new(inner),
        }
    }

    /// Rewrite every unscoped attribute reference beneath this node so it
    /// resolves relative to `parent`. Nested value paths keep their own scope.
    #[must_use]
    pub fn scoped_under(self, parent: &AttributeReference) -> Self {
        match self {
            Self::Comparison {
                attribute,
                operator,
                value,
            } => Self::Comparison {
                attribute: attribute.scoped_under(parent),
                operator,
                value,
            },
            Self::Present { attribute } => Self::Present {
                attribute: attribute.scoped_under(parent),
            },
            Self::Logical {
                left,
                operator,
                right,
            } => Self::Logical {
                left: Box::new(left.scoped_under(parent)),
                operator,
                right: Box::new(right.scoped_under(parent)),
            },
            Self::Group { negated, inner } => Self::Group {
                negated,
                inner: Box::new(inner.scoped_under(parent)),
            },
            value_path @ Self::ValuePath { .. } => value_path,
        }
    }

    /// Logical operator of this node, if it is a `Logical` node
    #[must_use]
    pub fn logical_operator(&self) -> Option<LogicalOperator> {
        match self {
            Self::Logical { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Comparison, presence and value-path nodes are leaves for placement purposes
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Self::Comparison { .. } | Self::Present { .. } | Self::ValuePath { .. }
        )
    }

    /// Number of nodes in the tree
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Comparison { .. } | Self::Present { .. } => 1,
            Self::Logical { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Group { inner, .. } | Self::ValuePath { inner, .. } => 1 + inner.node_count(),
        }
    }
}
