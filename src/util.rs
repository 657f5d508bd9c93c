//! Small array helpers shared by the sequence generators.

// -------------------------------------------------------------------------------------------------

/// Cyclically shifts the given sequence by `amount` steps to the right. Negative amounts shift
/// to the left. Amounts larger than the sequence length wrap around.
pub fn rotate<T: Clone>(values: &[T], amount: i64) -> Vec<T> {
    let mut rotated = values.to_vec();
    if rotated.is_empty() {
        return rotated;
    }
    let shift = amount.rem_euclid(rotated.len() as i64) as usize;
    rotated.rotate_right(shift);
    rotated
}

/// Maps all values of the given sequence into the range `[0, |divisor|)` using a Euclidean
/// modulo, so negative values wrap into the positive range too. A divisor of 0 keeps values
/// unchanged.
pub fn modulo(values: &[i64], divisor: i64) -> Vec<i64> {
    if divisor == 0 {
        return values.to_vec();
    }
    // only `i64::MIN % -1` overflows, and its remainder is 0
    values
        .iter()
        .map(|v| v.checked_rem_euclid(divisor).unwrap_or(0))
        .collect()
}

// --------------------------------------------------------------------------------------------------
