//! Closed interval value used to feed and read an [`IntervalSeq`](super::IntervalSeq).

use std::fmt::{Debug, Display};

use super::error::IntervalError;

/// Closed range `[lo, hi]`, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

/// Checks that `lo <= hi`, distinguishing inverted from unordered bounds.
pub(crate) fn check_bounds<T: PartialOrd + Debug>(lo: &T, hi: &T) -> Result<(), IntervalError> {
    match lo.partial_cmp(hi) {
        Some(std::cmp::Ordering::Greater) => Err(IntervalError::Inverted {
            lo: format!("{lo:?}"),
            hi: format!("{hi:?}"),
        }),
        Some(_) => Ok(()),
        None => Err(IntervalError::Incomparable {
            lo: format!("{lo:?}"),
            hi: format!("{hi:?}"),
        }),
    }
}

impl<T: Copy + PartialOrd> Interval<T> {
    /// Creates interval `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or the bounds cannot be compared.
    pub fn new(lo: T, hi: T) -> Self {
        assert!(lo <= hi, "Interval lower bound must be <= upper bound");
        Self { lo, hi }
    }

    /// Creates interval `[lo, hi]`, reporting invalid bounds as an error.
    pub fn try_new(lo: T, hi: T) -> Result<Self, IntervalError>
    where
        T: Debug,
    {
        check_bounds(&lo, &hi)?;
        Ok(Self { lo, hi })
    }

    /// Single-point interval `[x, x]`.
    pub fn point(x: T) -> Self {
        Self::new(x, x)
    }

    pub fn lo(&self) -> T {
        self.lo
    }

    pub fn hi(&self) -> T {
        self.hi
    }

    /// Returns true if `lo <= x <= hi`.
    pub fn contains(&self, x: T) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Returns true if the two intervals share at least one point.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }

    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if !self.overlaps(other) {
            return None;
        }
        let lo = if self.lo > other.lo { self.lo } else { other.lo };
        let hi = if self.hi < other.hi { self.hi } else { other.hi };
        Some(Interval { lo, hi })
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("lo", &self.lo)?;
        s.serialize_field("hi", &self.hi)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Interval<T>
where
    T: serde::Deserialize<'de> + Copy + PartialOrd + Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            lo: T,
            hi: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Self::try_new(raw.lo, raw.hi).map_err(serde::de::Error::custom)
    }
}
