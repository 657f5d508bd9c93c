use super::SeriesError;
use crate::util::modulo;

// -------------------------------------------------------------------------------------------------

/// Walks the Collatz sequence from `start` down to 1 and returns the path in reversed order, so
/// the series starts with `1` and ends with the step following `start`.
///
/// Starting values below 2 are clamped to 2.
pub fn collatz(start: u64) -> Result<Vec<u64>, SeriesError> {
    let mut value = start.max(2);
    let mut sequence = Vec::new();
    while value != 1 {
        value = if value % 2 == 0 {
            value / 2
        } else {
            value
                .checked_mul(3)
                .and_then(|value| value.checked_add(1))
                .ok_or(SeriesError::Overflow(value))?
        };
        sequence.push(value);
    }
    sequence.reverse();
    Ok(sequence)
}

/// The reversed Collatz sequence of `start`, mapped into the range `[0, divisor)`.
/// With a divisor of 2 this results in a binary rhythm.
pub fn collatz_mod(start: u64, divisor: i64) -> Result<Vec<i64>, SeriesError> {
    let values = collatz(start)?
        .into_iter()
        .map(|value| i64::try_from(value).map_err(|_| SeriesError::Overflow(value)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(modulo(&values, divisor))
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn walks() -> Result<(), SeriesError> {
        assert_eq!(collatz(12)?, vec![1, 2, 4, 8, 16, 5, 10, 3, 6]);
        assert_eq!(collatz(1)?, vec![1]);
        assert_eq!(collatz(0)?, collatz(2)?);
        assert_eq!(collatz(27)?.len(), 111);
        assert_eq!(collatz(u64::MAX), Err(SeriesError::Overflow(u64::MAX)));
        Ok(())
    }

    #[test]
    fn modulo_walks() -> Result<(), SeriesError> {
        assert_eq!(collatz_mod(12, 2)?, vec![1, 0, 0, 0, 0, 1, 0, 1, 0]);
        assert_eq!(collatz_mod(12, 3)?, vec![1, 2, 1, 2, 1, 2, 1, 0, 0]);
        Ok(())
    }
}
