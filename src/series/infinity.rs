use super::SeriesError;

// -------------------------------------------------------------------------------------------------

/// Generates Per Nørgård's infinity series, scaled and shifted by the given seed.
///
/// The unscaled series is `0, 1, -1, 2, 1, 0, -2, 3, ...` with `a(2n) = -a(n)` and
/// `a(2n + 1) = a(n) + 1`. Each value gets mapped to `seed[0] + a(n) * (seed[1] - seed[0])`,
/// so the seed's two values are the series' first two values. `offset` skips the first values.
///
/// Seeds or offsets which leave the integer range result in an overflow error.
pub fn infinity_series(
    size: usize,
    seed: [i64; 2],
    offset: usize,
) -> Result<Vec<i64>, SeriesError> {
    let [root, next] = seed;
    let step = next
        .checked_sub(root)
        .ok_or(SeriesError::InfinityOverflow(1))?;
    let end = offset
        .checked_add(size.max(1))
        .ok_or(SeriesError::InfinityOverflow(offset as u64))?;
    (offset..end)
        .map(|index| {
            let index = index as u64;
            norgard(index)
                .checked_mul(step)
                .and_then(|value| value.checked_add(root))
                .ok_or(SeriesError::InfinityOverflow(index))
        })
        .collect()
}

/// Value of the unscaled infinity series at the given index: walk the index' binary digits,
/// most significant first, adding 1 for each set bit and negating for each cleared bit.
fn norgard(index: u64) -> i64 {
    let digits = u64::BITS - index.leading_zeros();
    (0..digits).rev().fold(0, |value, bit| {
        if (index >> bit) & 1 == 1 {
            value + 1
        } else {
            -value
        }
    })
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn series() -> Result<(), SeriesError> {
        assert_eq!(
            infinity_series(16, [0, 1], 0)?,
            vec![0, 1, -1, 2, 1, 0, -2, 3, -1, 2, 0, 1, 2, -1, -3, 4]
        );
        assert_eq!(infinity_series(4, [0, 1], 4)?, vec![1, 0, -2, 3]);
        assert_eq!(infinity_series(0, [0, 1], 0)?, vec![0]);
        Ok(())
    }

    #[test]
    fn scaled() -> Result<(), SeriesError> {
        assert_eq!(
            infinity_series(6, [60, 62], 0)?,
            vec![60, 62, 58, 64, 62, 60]
        );
        assert_eq!(infinity_series(4, [3, 2], 0)?, vec![3, 2, 4, 1]);
        Ok(())
    }

    #[test]
    fn overflows() -> Result<(), SeriesError> {
        // seed distance leaves the integer range
        assert_eq!(
            infinity_series(4, [i64::MIN, i64::MAX], 0),
            Err(SeriesError::InfinityOverflow(1))
        );
        // scaled values leave the integer range: a(3) = 2
        assert_eq!(
            infinity_series(4, [0, i64::MAX], 0),
            Err(SeriesError::InfinityOverflow(3))
        );
        assert_eq!(
            infinity_series(4, [i64::MAX, i64::MAX - 1], 0),
            Err(SeriesError::InfinityOverflow(2))
        );
        // offsets which leave the index range
        assert_eq!(
            infinity_series(4, [0, 1], usize::MAX - 1),
            Err(SeriesError::InfinityOverflow((usize::MAX - 1) as u64))
        );
        // the last valid index still works
        assert_eq!(infinity_series(1, [0, 1], usize::MAX - 1)?.len(), 1);
        Ok(())
    }
}
