//! Interval sequences over typed physical quantities.
//!
//! Any `qtty::Quantity<U>` is a valid boundary type, so a time axis can be
//! tracked as an `IntervalSeq<Quantity<Second>>` and later viewed in days or
//! hours. Unit conversion is a positive scaling, so boundaries never swap,
//! but rounding can collapse a gap between neighbouring intervals; converted
//! sequences are rebuilt through `add` so such intervals coalesce.

use qtty::{Quantity, Unit};

use crate::seq::{Interval, IntervalSeq};

/// Interval sequence whose boundaries carry a unit.
pub type QuantitySeq<U> = IntervalSeq<Quantity<U>>;

impl<U: Unit> Interval<Quantity<U>> {
    /// Builds an interval from raw values expressed in `U`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn from_values(lo: f64, hi: f64) -> Self {
        Interval::new(Quantity::<U>::new(lo), Quantity::<U>::new(hi))
    }

    /// Converts both bounds to another unit of the same dimension.
    pub fn to<V: Unit<Dim = U::Dim>>(self) -> Interval<Quantity<V>> {
        Interval::new(self.lo().to(), self.hi().to())
    }

    /// Length of the interval in `U`.
    pub fn length(&self) -> Quantity<U> {
        self.hi() - self.lo()
    }
}

impl<U: Unit> IntervalSeq<Quantity<U>> {
    /// Adds `[lo, hi]` given as raw values in `U`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn add_values(&mut self, lo: f64, hi: f64) {
        self.add(Quantity::new(lo), Quantity::new(hi));
    }

    /// Converts every boundary to another unit of the same dimension.
    ///
    /// Intervals whose gap rounds away in the target unit are merged.
    pub fn to<V: Unit<Dim = U::Dim>>(&self) -> IntervalSeq<Quantity<V>> {
        self.iter().map(|interval| interval.to::<V>()).collect()
    }

    /// Total covered length, summed over the stored intervals.
    pub fn total_length(&self) -> Quantity<U> {
        self.iter()
            .fold(Quantity::new(0.0), |acc, interval| acc + interval.length())
    }
}
