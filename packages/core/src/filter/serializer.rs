//! Canonical filter text
//!
//! Renders expression trees back into the grammar. Connectives and operators
//! are lowercase, strings are JSON-escaped and double-quoted, and a `Logical`
//! child is parenthesised only where the default precedence would otherwise
//! regroup it.

use std::fmt;

use super::{
    ast::{CompareOperator, FilterExpression, LogicalOperator},
    attribute::AttributeReference,
    literal::Literal,
};

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            // JSON has no spelling for NaN or infinity
            Self::Number(n) if !n.is_finite() => f.write_str("null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => {
                let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
        }
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self, None)
    }
}

impl FilterExpression {
    /// Canonical filter text for this tree
    ///
    /// # Examples
    /// ```
    /// use scim_filter_core::filter::parser::parse_filter;
    ///
    /// let expression = parse_filter(r#"emails[type EQ "work" AND value co "@example.com"]"#).unwrap();
    /// assert_eq!(
    ///     expression.to_canonical_string(),
    ///     r#"emails[type eq "work" and value co "@example.com"]"#
    /// );
    /// ```
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

/// Render `expression`, abbreviating references scoped under `scope`
fn render<W: fmt::Write>(
    out: &mut W,
    expression: &FilterExpression,
    scope: Option<&AttributeReference>,
) -> fmt::Result {
    match expression {
        FilterExpression::Comparison {
            attribute,
            operator,
            value,
        } => {
            render_attribute(out, attribute, scope)?;
            write!(out, " {operator} {value}")
        }
        FilterExpression::Present { attribute } => {
            render_attribute(out, attribute, scope)?;
            out.write_str(" pr")
        }
        FilterExpression::Logical { .. } => render_logical(out, expression, scope),
        FilterExpression::Group { negated, inner } => {
            if *negated {
                out.write_str("not ")?;
            }
            render_child(out, inner, true, scope)
        }
        FilterExpression::ValuePath { attribute, inner } => {
            render_attribute(out, attribute, scope)?;
            out.write_char('[')?;
            render(out, inner, Some(attribute))?;
            out.write_char(']')
        }
    }
}

/// Render a connective chain, walking its left spine in a loop so long
/// `a and b and c ...` runs take constant stack
fn render_logical<W: fmt::Write>(
    out: &mut W,
    expression: &FilterExpression,
    scope: Option<&AttributeReference>,
) -> fmt::Result {
    let mut spine = Vec::new();
    let mut head = expression;
    let mut head_parens = false;

    while let FilterExpression::Logical {
        left,
        operator,
        right,
    } = head
    {
        spine.push((*operator, right.as_ref()));
        head = left.as_ref();
        if needs_parens_left(*operator, left) {
            head_parens = true;
            break;
        }
    }

    render_child(out, head, head_parens, scope)?;
    for (operator, right) in spine.into_iter().rev() {
        write!(out, " {operator} ")?;
        render_child(out, right, needs_parens_right(operator, right), scope)?;
    }
    Ok(())
}

fn render_child<W: fmt::Write>(
    out: &mut W,
    child: &FilterExpression,
    parenthesize: bool,
    scope: Option<&AttributeReference>,
) -> fmt::Result {
    if parenthesize {
        out.write_char('(')?;
        render(out, child, scope)?;
        out.write_char(')')
    } else {
        render(out, child, scope)
    }
}

fn render_attribute<W: fmt::Write>(
    out: &mut W,
    attribute: &AttributeReference,
    scope: Option<&AttributeReference>,
) -> fmt::Result {
    match (scope, attribute.sub_attribute_name()) {
        (Some(parent), Some(sub)) if attribute.is_scoped_under(parent) => out.write_str(sub),
        _ => write!(out, "{attribute}"),
    }
}

/// An `or` on the left of an `and` would otherwise bind to the `and`'s right side
fn needs_parens_left(parent: LogicalOperator, child: &FilterExpression) -> bool {
    parent == LogicalOperator::And && child.logical_operator() == Some(LogicalOperator::Or)
}

/// Connectives chain to the left, so any right-hand `Logical` regroups unless it
/// is an `and` under an `or`
fn needs_parens_right(parent: LogicalOperator, child: &FilterExpression) -> bool {
    match child.logical_operator() {
        Some(LogicalOperator::And) => parent != LogicalOperator::Or,
        Some(LogicalOperator::Or) => true,
        None => false,
    }
}
