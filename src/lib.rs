//! intervalseq - ordered sets of disjoint closed intervals.
//!
//! The [`seq`] module holds the core container, [`IntervalSeq`], which keeps
//! a flat boundary vector in canonical form and answers point and range
//! queries by binary search. [`units`] extends it to typed quantities and
//! [`axis`] uses it to lay out chart ticks without collisions.

pub mod axis;
pub mod seq;
pub mod units;

pub use seq::{Interval, IntervalError, IntervalSeq};
