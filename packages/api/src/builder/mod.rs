//! Fluent filter builder
//!
//! Builds filter trees call by call, reproducing the precedence and nesting
//! the parser would give the equivalent text.

pub mod comparisons;
pub mod core;
pub mod logical;
pub mod operand;

pub use self::core::FilterBuilder;
pub use operand::OrderedOperand;
