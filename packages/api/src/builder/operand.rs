//! Operand types accepted by the comparison methods
//!
//! Every operand converts into a [`Literal`]; dates become ISO-8601 strings on
//! the way. Ordering comparisons (`gt`, `ge`, `lt`, `le`) only make sense for
//! numbers and dates, so they take an [`OrderedOperand`].

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use scim_filter_core::filter::Literal;

/// Marker for operands with a natural ordering
pub trait OrderedOperand: Into<Literal> {}

macro_rules! ordered_operand {
    ($($ty:ty),*) => {
        $(impl OrderedOperand for $ty {})*
    };
}

ordered_operand!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, NaiveDate, NaiveDateTime
);

impl<Tz: TimeZone> OrderedOperand for DateTime<Tz> where Tz::Offset: Display {}
