//! Ordered sets of disjoint closed intervals.
//!
//! [`IntervalSeq`] is the core container: a flat ascending boundary vector
//! with binary-search queries and merge-on-insert. [`Interval`] is the
//! validated closed-range value used to feed and read it.

mod assertions;
mod error;
mod interval;
mod interval_seq;


pub use assertions::is_canonical;
pub use error::IntervalError;
pub use interval::Interval;
pub use interval_seq::{IntervalSeq, Intervals};
