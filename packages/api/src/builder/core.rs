//! Core `FilterBuilder` structure and placement rules
//!
//! The builder holds at most one in-progress root. A bare `and()` / `or()`
//! leaves an open right-hand slot; the next leaf fills it. Slots only ever
//! open on the right spine, so the open part of the tree is a chain of
//! [`Pending`] connectives whose deepest member owns the slot.

use scim_filter_core::filter::{
    Filter, FilterExpression, FilterResult, LogicalOperator, error::builder_protocol_error,
};

/// A connective whose right operand is still missing, possibly below a
/// further pending connective
#[derive(Debug, Clone)]
pub(crate) struct Pending {
    left: FilterExpression,
    operator: LogicalOperator,
    right: Option<Box<Pending>>,
}

impl Pending {
    pub(crate) fn open(left: FilterExpression, operator: LogicalOperator) -> Self {
        Self {
            left,
            operator,
            right: None,
        }
    }

    /// Operator of the connective that owns the open slot
    fn slot_operator(&self) -> LogicalOperator {
        self.right
            .as_deref()
            .map_or(self.operator, Pending::slot_operator)
    }

    /// Close the open slot with `expression`, yielding a complete tree
    fn fill(self, expression: FilterExpression) -> FilterExpression {
        let right = match self.right {
            Some(inner) => inner.fill(expression),
            None => expression,
        };
        FilterExpression::logical(self.left, self.operator, right)
    }
}

/// Construction progress
#[derive(Debug, Clone, Default)]
pub(crate) enum BuilderState {
    #[default]
    Empty,
    Complete(FilterExpression),
    Pending(Pending),
}

/// Fluent filter builder
///
/// Produces the same trees the parser builds from equivalent text. Methods
/// consume the builder and hand it back inside a `FilterResult`, so a chain
/// reads naturally with `?`.
///
/// # Examples
/// ```
/// use scim_filter::FilterClient;
///
/// # fn main() -> Result<(), scim_filter::FilterError> {
/// let filter = FilterClient::builder()
///     .equal_to("a", "1")?
///     .and()?
///     .equal_to("b", "2")?
///     .or()?
///     .equal_to("c", "3")?
///     .build()?;
///
/// assert_eq!(filter.as_str(), r#"a eq "1" and b eq "2" or c eq "3""#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    /// Root under construction
    pub(crate) state: BuilderState,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl FilterBuilder {
    /// Start an empty builder session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every placement decision at debug level
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// The completed root, if no connective is waiting for an operand
    #[must_use]
    pub fn expression(&self) -> Option<&FilterExpression> {
        match &self.state {
            BuilderState::Complete(root) => Some(root),
            _ => None,
        }
    }

    /// True when `build()` would succeed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, BuilderState::Complete(_))
    }

    /// Finish the session
    ///
    /// # Errors
    ///
    /// Returns `BuilderProtocolError` when nothing was added or the last call
    /// was a bare `and()` / `or()`.
    pub fn build(self) -> FilterResult<Filter> {
        match self.state {
            BuilderState::Complete(root) => {
                let filter = Filter::new(root);
                if self.debug_enabled {
                    tracing::debug!(filter = %filter, "filter built");
                }
                Ok(filter)
            }
            BuilderState::Empty => Err(builder_protocol_error("cannot build an empty filter")),
            BuilderState::Pending(pending) => Err(builder_protocol_error(format!(
                "'{}' is missing its right operand",
                pending.slot_operator()
            ))),
        }
    }

    /// Canonical text of the completed root
    ///
    /// # Errors
    ///
    /// Same conditions as [`FilterBuilder::build`].
    pub fn to_canonical_string(&self) -> FilterResult<String> {
        self.clone().build().map(|filter| filter.as_str().to_string())
    }

    /// Canonical text encoded for a `filter` query parameter, spaces as `%20`
    ///
    /// # Errors
    ///
    /// Same conditions as [`FilterBuilder::build`].
    pub fn to_query_value(&self) -> FilterResult<String> {
        self.clone().build().map(|filter| filter.encoded())
    }

    /// Comparison-slot rule: a leaf becomes the root, or fills the open slot
    pub(crate) fn place(mut self, expression: FilterExpression) -> FilterResult<Self> {
        self.state = match std::mem::take(&mut self.state) {
            BuilderState::Empty => {
                self.trace("root set", &expression);
                BuilderState::Complete(expression)
            }
            BuilderState::Pending(pending) => {
                let expression = wrap_right(pending.slot_operator(), expression);
                self.trace("slot filled", &expression);
                BuilderState::Complete(pending.fill(expression))
            }
            BuilderState::Complete(root) => {
                return Err(builder_protocol_error(format!(
                    "'{root}' is already complete; call and() or or() before adding '{expression}'"
                )));
            }
        };
        Ok(self)
    }

    /// Open a connective over the current root.
    ///
    /// An `and` applied to a completed `or` binds to the `or`'s right operand,
    /// as it would in filter text.
    pub(crate) fn connect(mut self, operator: LogicalOperator) -> FilterResult<Self> {
        self.state = match std::mem::take(&mut self.state) {
            BuilderState::Complete(FilterExpression::Logical {
                left,
                operator: LogicalOperator::Or,
                right,
            }) if operator == LogicalOperator::And => {
                self.trace("and opened under or", &right);
                BuilderState::Pending(Pending {
                    left: *left,
                    operator: LogicalOperator::Or,
                    right: Some(Box::new(Pending::open(*right, LogicalOperator::And))),
                })
            }
            BuilderState::Complete(root) => {
                self.trace("tree raised", &root);
                BuilderState::Pending(Pending::open(root, operator))
            }
            BuilderState::Empty => {
                return Err(builder_protocol_error(format!(
                    "cannot start a filter with '{operator}'"
                )));
            }
            BuilderState::Pending(pending) => {
                return Err(builder_protocol_error(format!(
                    "'{operator}' cannot follow '{}' without an operand in between",
                    pending.slot_operator()
                )));
            }
        };
        Ok(self)
    }

    fn trace(&self, step: &str, expression: &FilterExpression) {
        if self.debug_enabled {
            tracing::debug!(step, expression = %expression, "filter builder");
        } else {
            tracing::trace!(step, expression = %expression, "filter builder");
        }
    }
}

/// Group a left operand that would otherwise regroup under `parent`
pub(crate) fn wrap_left(parent: LogicalOperator, expression: FilterExpression) -> FilterExpression {
    if parent == LogicalOperator::And && expression.logical_operator() == Some(LogicalOperator::Or) {
        FilterExpression::group(false, expression)
    } else {
        expression
    }
}

/// Group a right operand; only an `and` under an `or` keeps its meaning bare
pub(crate) fn wrap_right(parent: LogicalOperator, expression: FilterExpression) -> FilterExpression {
    match expression.logical_operator() {
        Some(LogicalOperator::And) if parent == LogicalOperator::Or => expression,
        Some(_) => FilterExpression::group(false, expression),
        None => expression,
    }
}
