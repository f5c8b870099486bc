//! Canonical-form checks for boundary sequences.

/// Returns true if `bounds` is a canonical boundary sequence: even length,
/// each pair ordered (`lo <= hi`), and each interval ending strictly before
/// the next one starts.
pub fn is_canonical<T: PartialOrd>(bounds: &[T]) -> bool {
    if bounds.len() % 2 != 0 {
        return false;
    }
    let pairs_ordered = bounds.chunks_exact(2).all(|pair| pair[0] <= pair[1]);
    let gaps_ordered = bounds
        .iter()
        .skip(1)
        .step_by(2)
        .zip(bounds.iter().skip(2).step_by(2))
        .all(|(hi, next_lo)| hi < next_lo);
    pairs_ordered && gaps_ordered
}
