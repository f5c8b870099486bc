//! A flat, canonical sequence of disjoint closed intervals.
//!
//! [`IntervalSeq`] stores its intervals as a single ascending vector of
//! boundary values `[lo0, hi0, lo1, hi1, ...]`. The **canonical invariant**
//! holds after every mutation: the vector has even length, each pair is
//! ordered, and every interval ends strictly before the next one starts.
//!
//! Intervals are coalesced when they overlap or share an endpoint. Integer
//! ranges that merely sit next to each other, such as `[1, 5]` and `[6, 10]`,
//! stay separate because no point is common to both.

use std::fmt::{Debug, Display};
use std::iter::FusedIterator;
use std::slice::ChunksExact;

use super::assertions::is_canonical;
use super::error::IntervalError;
use super::interval::{check_bounds, Interval};

/// A sorted set of disjoint closed intervals with merge-on-insert.
///
/// # Example
///
/// ```rust
/// use intervalseq::seq::IntervalSeq;
///
/// let mut seq = IntervalSeq::new();
/// seq.add(1, 5);
/// seq.add(10, 15);
/// seq.add(4, 11);
/// assert_eq!(seq.boundaries(), &[1, 15]);
/// assert!(seq.contains(8));
/// assert!(!seq.overlaps(16, 20));
/// ```
///
/// # Performance
///
/// - `lower`, `contains`, `overlaps`: O(log n) binary search over intervals.
/// - `add`: O(log n + k) comparisons where `k` is the number of absorbed
///   intervals, plus the vector shift on insertion.
/// - `clear`: O(1) for `Copy` bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSeq<T>(Vec<T>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl<T: Copy + PartialOrd> IntervalSeq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty sequence with room for `intervals` intervals.
    pub fn with_capacity(intervals: usize) -> Self {
        Self(Vec::with_capacity(intervals * 2))
    }

    /// Wraps a boundary vector that is **already canonical**.
    ///
    /// The invariant is checked in debug builds only.
    pub fn from_boundaries_unchecked(bounds: Vec<T>) -> Self {
        debug_assert!(
            is_canonical(&bounds),
            "IntervalSeq::from_boundaries_unchecked called with non-canonical input"
        );
        Self(bounds)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl<T: Copy + PartialOrd> IntervalSeq<T> {
    /// Returns the boundary index of the first interval that contains `x`
    /// or lies after it.
    ///
    /// The result is always even. It equals `boundaries().len()` when every
    /// stored interval ends before `x`.
    pub fn lower(&self, x: T) -> usize {
        let bounds = &self.0;
        let (mut l, mut r) = (0, bounds.len() / 2);
        while l < r {
            let m = l + (r - l) / 2;
            if bounds[2 * m] > x {
                r = m;
            } else if x > bounds[2 * m + 1] {
                l = m + 1;
            } else {
                return 2 * m;
            }
        }
        2 * l
    }

    /// Returns true if `x` lies in some stored interval.
    pub fn contains(&self, x: T) -> bool {
        let i = self.lower(x);
        i < self.0.len() && x >= self.0[i]
    }

    /// Returns true if `[lo, hi]` shares a point with some stored interval.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or the bounds cannot be compared.
    pub fn overlaps(&self, lo: T, hi: T) -> bool {
        assert!(lo <= hi, "IntervalSeq::overlaps requires lo <= hi");
        let i = self.lower(lo);
        i < self.0.len() && hi >= self.0[i]
    }

    pub fn overlaps_interval(&self, interval: &Interval<T>) -> bool {
        self.overlaps(interval.lo(), interval.hi())
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The flat boundary vector `[lo0, hi0, lo1, hi1, ...]`.
    pub fn boundaries(&self) -> &[T] {
        &self.0
    }

    /// Returns the `k`-th interval in ascending order.
    pub fn get(&self, k: usize) -> Option<Interval<T>> {
        let lo = *self.0.get(2 * k)?;
        let hi = *self.0.get(2 * k + 1)?;
        Some(Interval::new(lo, hi))
    }

    pub fn first(&self) -> Option<Interval<T>> {
        self.get(0)
    }

    pub fn last(&self) -> Option<Interval<T>> {
        self.len().checked_sub(1).and_then(|k| self.get(k))
    }

    /// Iterates over the stored intervals in ascending order.
    pub fn iter(&self) -> Intervals<'_, T> {
        Intervals {
            pairs: self.0.chunks_exact(2),
        }
    }

    /// Consumes the sequence and returns the boundary vector.
    pub fn into_boundaries(self) -> Vec<T> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation
// ─────────────────────────────────────────────────────────────────────

impl<T: Copy + PartialOrd> IntervalSeq<T> {
    /// Adds the closed range `[lo, hi]`, coalescing every stored interval
    /// that overlaps it or shares an endpoint with it.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or the bounds cannot be compared.
    pub fn add(&mut self, lo: T, hi: T) {
        assert!(lo <= hi, "IntervalSeq::add requires lo <= hi");
        let i = self.lower(lo);
        let bounds = &mut self.0;

        if i >= bounds.len() || lo < bounds[i] {
            bounds.splice(i..i, [lo, lo]);
        }

        // Absorb every following interval that starts at or before `hi`.
        let mut j = i;
        while j + 2 < bounds.len() && hi >= bounds[j + 2] {
            j += 2;
        }
        if j != i {
            bounds.drain(i + 1..j + 1);
        }

        if hi > bounds[i + 1] {
            bounds[i + 1] = hi;
        }

        debug_assert!(is_canonical(bounds), "IntervalSeq::add broke the invariant");
    }

    pub fn add_interval(&mut self, interval: Interval<T>) {
        self.add(interval.lo(), interval.hi());
    }

    /// Like [`add`](Self::add), but reports invalid bounds instead of
    /// panicking. The sequence is left untouched on error.
    pub fn try_add(&mut self, lo: T, hi: T) -> Result<(), IntervalError>
    where
        T: Debug,
    {
        if let Err(err) = check_bounds(&lo, &hi) {
            log::debug!("rejected interval insertion: {err}");
            return Err(err);
        }
        self.add(lo, hi);
        Ok(())
    }

    /// Removes all intervals.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────
// Iterators
// ─────────────────────────────────────────────────────────────────────

/// Iterator over the intervals of an [`IntervalSeq`].
#[derive(Debug, Clone)]
pub struct Intervals<'a, T> {
    pairs: ChunksExact<'a, T>,
}

impl<T: Copy + PartialOrd> Iterator for Intervals<'_, T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Interval<T>> {
        self.pairs.next().map(|pair| Interval::new(pair[0], pair[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<T: Copy + PartialOrd> DoubleEndedIterator for Intervals<'_, T> {
    fn next_back(&mut self) -> Option<Interval<T>> {
        self.pairs
            .next_back()
            .map(|pair| Interval::new(pair[0], pair[1]))
    }
}

impl<T: Copy + PartialOrd> ExactSizeIterator for Intervals<'_, T> {}

impl<T: Copy + PartialOrd> FusedIterator for Intervals<'_, T> {}

impl<'a, T: Copy + PartialOrd> IntoIterator for &'a IntervalSeq<T> {
    type Item = Interval<T>;
    type IntoIter = Intervals<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl<T: Copy + PartialOrd> From<Interval<T>> for IntervalSeq<T> {
    fn from(interval: Interval<T>) -> Self {
        Self(vec![interval.lo(), interval.hi()])
    }
}

impl<T: Copy + PartialOrd> FromIterator<Interval<T>> for IntervalSeq<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T: Copy + PartialOrd> Extend<Interval<T>> for IntervalSeq<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────

impl<T: Copy + PartialOrd> Default for IntervalSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialOrd + Display> Display for IntervalSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (k, interval) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<T: Copy + PartialOrd + serde::Serialize> serde::Serialize for IntervalSeq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for IntervalSeq<T>
where
    T: serde::Deserialize<'de> + Copy + PartialOrd + Debug,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let intervals = Vec::<Interval<T>>::deserialize(deserializer)?;
        Ok(intervals.into_iter().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(ranges: &[(i64, i64)]) -> IntervalSeq<i64> {
        let mut s = IntervalSeq::new();
        for &(lo, hi) in ranges {
            s.add(lo, hi);
        }
        s
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let s = IntervalSeq::<i64>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.boundaries(), &[] as &[i64]);
    }

    #[test]
    fn with_capacity_is_empty() {
        let s = IntervalSeq::<i64>::with_capacity(8);
        assert!(s.is_empty());
    }

    #[test]
    fn from_single_interval() {
        let s = IntervalSeq::from(Interval::new(3, 9));
        assert_eq!(s.boundaries(), &[3, 9]);
    }

    #[test]
    fn from_boundaries_unchecked_canonical() {
        let s = IntervalSeq::from_boundaries_unchecked(vec![1, 2, 4, 5]);
        assert_eq!(s.len(), 2);
    }

    // ── lower ─────────────────────────────────────────────────────────

    #[test]
    fn lower_on_empty_is_zero() {
        assert_eq!(IntervalSeq::<i64>::new().lower(42), 0);
    }

    #[test]
    fn lower_finds_containing_or_following_interval() {
        let s = seq(&[(10, 20), (30, 40), (50, 60)]);
        assert_eq!(s.lower(5), 0);
        assert_eq!(s.lower(10), 0);
        assert_eq!(s.lower(20), 0);
        assert_eq!(s.lower(21), 2);
        assert_eq!(s.lower(35), 2);
        assert_eq!(s.lower(45), 4);
        assert_eq!(s.lower(60), 4);
        assert_eq!(s.lower(61), 6);
    }

    // ── contains / overlaps ───────────────────────────────────────────

    #[test]
    fn contains_respects_closed_bounds() {
        let s = seq(&[(10, 20)]);
        assert!(s.contains(10));
        assert!(s.contains(15));
        assert!(s.contains(20));
        assert!(!s.contains(9));
        assert!(!s.contains(21));
    }

    #[test]
    fn overlaps_detects_shared_points() {
        let s = seq(&[(10, 20), (30, 40)]);
        assert!(s.overlaps(0, 10));
        assert!(s.overlaps(20, 25));
        assert!(s.overlaps(21, 30));
        assert!(s.overlaps(0, 100));
        assert!(!s.overlaps(21, 29));
        assert!(!s.overlaps(41, 50));
        assert!(s.overlaps_interval(&Interval::new(35, 36)));
    }

    #[test]
    #[should_panic(expected = "requires lo <= hi")]
    fn overlaps_panics_on_inverted_range() {
        let s = seq(&[(10, 20)]);
        let _ = s.overlaps(15, 12);
    }

    // ── add ───────────────────────────────────────────────────────────

    #[test]
    fn add_into_empty() {
        let s = seq(&[(10, 20)]);
        assert_eq!(s.boundaries(), &[10, 20]);
    }

    #[test]
    fn add_before_and_after_existing() {
        let s = seq(&[(10, 20), (30, 40), (0, 5)]);
        assert_eq!(s.boundaries(), &[0, 5, 10, 20, 30, 40]);
    }

    #[test]
    fn add_inside_existing_is_noop() {
        let s = seq(&[(10, 20), (12, 18)]);
        assert_eq!(s.boundaries(), &[10, 20]);
    }

    #[test]
    fn add_extends_upper_bound() {
        let s = seq(&[(10, 20), (15, 25)]);
        assert_eq!(s.boundaries(), &[10, 25]);
    }

    #[test]
    fn add_extends_lower_bound() {
        let s = seq(&[(10, 20), (5, 12)]);
        assert_eq!(s.boundaries(), &[5, 20]);
    }

    #[test]
    fn add_bridging_multiple_merges() {
        let s = seq(&[(0, 1), (3, 4), (6, 7), (9, 10), (20, 30)]);
        let mut s2 = s.clone();
        s2.add(2, 9);
        assert_eq!(s2.boundaries(), &[0, 1, 2, 10, 20, 30]);
    }

    #[test]
    fn add_shared_endpoint_merges() {
        assert_eq!(seq(&[(1, 5), (5, 10)]).boundaries(), &[1, 10]);
        assert_eq!(seq(&[(5, 10), (1, 5)]).boundaries(), &[1, 10]);
    }

    #[test]
    fn add_unit_gap_does_not_merge() {
        assert_eq!(seq(&[(1, 5), (6, 10)]).boundaries(), &[1, 5, 6, 10]);
        assert_eq!(seq(&[(6, 10), (1, 5)]).boundaries(), &[1, 5, 6, 10]);
    }

    #[test]
    #[should_panic(expected = "requires lo <= hi")]
    fn add_panics_on_inverted_range() {
        let mut s = IntervalSeq::new();
        s.add(3, 1);
    }

    #[test]
    fn try_add_rejects_without_mutating() {
        let mut s = seq(&[(1, 2)]);
        assert_eq!(
            s.try_add(9, 4),
            Err(IntervalError::Inverted {
                lo: "9".to_string(),
                hi: "4".to_string()
            })
        );
        assert_eq!(s.boundaries(), &[1, 2]);
        assert_eq!(s.try_add(4, 9), Ok(()));
        assert_eq!(s.boundaries(), &[1, 2, 4, 9]);
    }

    #[test]
    fn try_add_rejects_nan() {
        let mut s = IntervalSeq::<f64>::new();
        assert!(matches!(
            s.try_add(f64::NAN, 1.0),
            Err(IntervalError::Incomparable { .. })
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn add_float_bounds() {
        let mut s = IntervalSeq::new();
        s.add(10.0, 16.0);
        s.add(16.0, 22.5);
        s.add(30.25, 31.0);
        assert_eq!(s.boundaries(), &[10.0, 22.5, 30.25, 31.0]);
        assert!(s.contains(22.5));
        assert!(!s.contains(22.51));
    }

    // ── clear ─────────────────────────────────────────────────────────

    #[test]
    fn clear_empties() {
        let mut s = seq(&[(1, 2), (4, 8)]);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(1));
        s.add(3, 3);
        assert_eq!(s.boundaries(), &[3, 3]);
    }

    // ── Accessors / iteration ─────────────────────────────────────────

    #[test]
    fn get_first_last() {
        let s = seq(&[(1, 2), (4, 8), (10, 12)]);
        assert_eq!(s.get(1), Some(Interval::new(4, 8)));
        assert_eq!(s.get(3), None);
        assert_eq!(s.first(), Some(Interval::new(1, 2)));
        assert_eq!(s.last(), Some(Interval::new(10, 12)));
        assert_eq!(IntervalSeq::<i64>::new().last(), None);
    }

    #[test]
    fn iter_yields_intervals_in_order() {
        let s = seq(&[(10, 12), (1, 2), (4, 8)]);
        let collected: Vec<_> = s.iter().collect();
        assert_eq!(
            collected,
            vec![Interval::new(1, 2), Interval::new(4, 8), Interval::new(10, 12)]
        );
        assert_eq!(s.iter().len(), 3);
        assert_eq!(s.iter().next_back(), Some(Interval::new(10, 12)));
        assert_eq!((&s).into_iter().count(), 3);
    }

    #[test]
    fn from_iterator_normalizes() {
        let s: IntervalSeq<i64> = vec![Interval::new(5, 7), Interval::new(1, 3), Interval::new(2, 6)]
            .into_iter()
            .collect();
        assert_eq!(s.boundaries(), &[1, 7]);
    }

    #[test]
    fn extend_merges() {
        let mut s = seq(&[(0, 10)]);
        s.extend(vec![Interval::new(5, 20), Interval::new(30, 31)]);
        assert_eq!(s.boundaries(), &[0, 20, 30, 31]);
    }

    #[test]
    fn into_boundaries_returns_vec() {
        let s = seq(&[(1, 2), (4, 8)]);
        assert_eq!(s.into_boundaries(), vec![1, 2, 4, 8]);
    }

    // ── Display / Default / PartialEq ─────────────────────────────────

    #[test]
    fn display_format() {
        let s = seq(&[(1, 2), (4, 8)]);
        assert_eq!(s.to_string(), "{[1, 2], [4, 8]}");
        assert_eq!(IntervalSeq::<i64>::new().to_string(), "{}");
    }

    #[test]
    fn default_is_empty() {
        assert!(IntervalSeq::<i64>::default().is_empty());
    }

    #[test]
    fn equal_point_sets_compare_equal() {
        assert_eq!(seq(&[(1, 3), (3, 6)]), seq(&[(1, 6)]));
        assert_ne!(seq(&[(1, 3), (4, 6)]), seq(&[(1, 6)]));
    }

    // ── Serde ─────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let s = seq(&[(1, 2), (4, 8)]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"[{"lo":1,"hi":2},{"lo":4,"hi":8}]"#);
        let restored: IntervalSeq<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, s);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_normalizes_overlapping_input() {
        let json = r#"[{"lo":5,"hi":9},{"lo":1,"hi":6}]"#;
        let restored: IntervalSeq<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(restored.boundaries(), &[1, 9]);
    }
}
