//! Arbitrary precision linear recurrences of the form `F(n) = t * F(n-1) + F(n-2)`.
//!
//! Fibonacci, Pell, Lucas and other n-bonacci like families are all just parameterizations
//! of the same [`Recurrence`], picked via seeds and the multiplier `t`.

use derive_more::From;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

// -------------------------------------------------------------------------------------------------

/// Magnitude in bits up to which an integer is exactly representable as `f64`.
const F64_SAFE_INTEGER_BITS: u64 = 53;

// -------------------------------------------------------------------------------------------------

/// Endless iterator over the terms of a linear recurrence `F(n) = t * F(n-1) + F(n-2)`,
/// starting with `seed1, seed2`.
///
/// Terms are [`BigInt`]s, so no precision is lost no matter how large they get. When a modulus
/// is set, all terms and the internal state are reduced with a floored modulo.
///
/// # Examples:
///
/// ```rust
/// use algoseq::recurrence::Recurrence;
/// use num_bigint::BigInt;
///
/// let fibonacci = Recurrence::new(0, 1, 1).take(8).collect::<Vec<_>>();
/// assert_eq!(fibonacci.last(), Some(&BigInt::from(13)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recurrence {
    previous: BigInt,
    current: BigInt,
    multiplier: BigInt,
    modulus: Option<BigInt>,
}

impl Recurrence {
    /// Create a new recurrence with the given seeds `F(0)`, `F(1)` and multiplier `t`.
    pub fn new<S1, S2, T>(seed1: S1, seed2: S2, multiplier: T) -> Self
    where
        S1: Into<BigInt>,
        S2: Into<BigInt>,
        T: Into<BigInt>,
    {
        Self {
            previous: seed1.into(),
            current: seed2.into(),
            multiplier: multiplier.into(),
            modulus: None,
        }
    }

    /// Return a copy of the recurrence which reduces all terms modulo the given modulus.
    /// A zero modulus is ignored.
    pub fn with_modulus<M: Into<BigInt>>(mut self, modulus: M) -> Self {
        let modulus = modulus.into();
        if modulus.is_zero() {
            log::warn!("Ignoring zero modulus in recurrence");
            return self;
        }
        self.previous = self.previous.mod_floor(&modulus);
        self.current = self.current.mod_floor(&modulus);
        self.modulus = Some(modulus);
        self
    }
}

impl Iterator for Recurrence {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = &self.multiplier * &self.current + &self.previous;
        if let Some(modulus) = &self.modulus {
            next = next.mod_floor(modulus);
        }
        let current = std::mem::replace(&mut self.current, next);
        Some(std::mem::replace(&mut self.previous, current))
    }
}

// -------------------------------------------------------------------------------------------------

/// Output representation of generated recurrence terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberFormat {
    /// Native `f64` numbers: exact only while terms stay within ±2^53.
    #[default]
    Number,
    /// Exact decimal strings.
    Exact,
}

/// Recurrence terms in the representation chosen via [`NumberFormat`].
#[derive(Clone, Debug, PartialEq, From)]
pub enum Terms {
    Numbers(Vec<f64>),
    Exact(Vec<String>),
}

impl Terms {
    /// Convert the given big integers into the given representation.
    pub fn from_values(values: &[BigInt], format: NumberFormat) -> Self {
        match format {
            NumberFormat::Number => {
                if values
                    .iter()
                    .any(|value| value.magnitude().bits() > F64_SAFE_INTEGER_BITS)
                {
                    log::warn!(
                        "Recurrence terms exceed the safe integer range of native numbers: \
                        values will be approximated. Use an exact format to avoid this."
                    );
                }
                Terms::Numbers(
                    values
                        .iter()
                        .map(|value| value.to_f64().unwrap_or(f64::NAN))
                        .collect(),
                )
            }
            NumberFormat::Exact => {
                Terms::Exact(values.iter().map(|value| value.to_str_radix(10)).collect())
            }
        }
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        match self {
            Terms::Numbers(numbers) => numbers.len(),
            Terms::Exact(strings) => strings.len(),
        }
    }

    /// Returns true if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -------------------------------------------------------------------------------------------------

/// Generate `max(length, 1)` exact terms of the recurrence `F(n) = t * F(n-1) + F(n-2)` with
/// `F(0) = seed1` and `F(1) = seed2`.
pub fn recurrence<S1, S2, T>(length: usize, seed1: S1, seed2: S2, multiplier: T) -> Vec<BigInt>
where
    S1: Into<BigInt>,
    S2: Into<BigInt>,
    T: Into<BigInt>,
{
    Recurrence::new(seed1, seed2, multiplier)
        .take(length.max(1))
        .collect()
}

/// Generate `max(length, 1)` terms of the recurrence, converted into the given format.
pub fn generate_recurrence<S1, S2, T>(
    length: usize,
    seed1: S1,
    seed2: S2,
    multiplier: T,
    format: NumberFormat,
) -> Terms
where
    S1: Into<BigInt>,
    S2: Into<BigInt>,
    T: Into<BigInt>,
{
    Terms::from_values(&recurrence(length, seed1, seed2, multiplier), format)
}

/// Generate `length` terms starting at term index `offset`. `length + offset` terms are
/// generated in one go and only the trailing `length` terms are kept.
fn windowed_recurrence(
    length: usize,
    offset: usize,
    seed1: i64,
    seed2: i64,
    multiplier: i64,
    format: NumberFormat,
) -> Terms {
    let values = Recurrence::new(seed1, seed2, multiplier)
        .skip(offset)
        .take(length.max(1))
        .collect::<Vec<_>>();
    Terms::from_values(&values, format)
}

// -------------------------------------------------------------------------------------------------

/// Generic n-bonacci sequence: `length` terms of `F(n) = t * F(n-1) + F(n-2)` with custom seeds.
pub fn nbonacci<S1, S2, T>(
    length: usize,
    seed1: S1,
    seed2: S2,
    multiplier: T,
    format: NumberFormat,
) -> Terms
where
    S1: Into<BigInt>,
    S2: Into<BigInt>,
    T: Into<BigInt>,
{
    generate_recurrence(length, seed1, seed2, multiplier, format)
}

/// Fibonacci sequence `0, 1, 1, 2, 3, 5, ...`, starting at term `offset`.
pub fn fibonacci(length: usize, offset: usize, format: NumberFormat) -> Terms {
    windowed_recurrence(length, offset, 0, 1, 1, format)
}

/// Pell sequence `0, 1, 2, 5, 12, 29, ...`, starting at term `offset`.
pub fn pell(length: usize, offset: usize, format: NumberFormat) -> Terms {
    windowed_recurrence(length, offset, 0, 1, 2, format)
}

/// Three-Fibonacci sequence `0, 1, 3, 10, 33, 109, ...`, starting at term `offset`.
pub fn three_fibonacci(length: usize, offset: usize, format: NumberFormat) -> Terms {
    windowed_recurrence(length, offset, 0, 1, 3, format)
}

/// Lucas sequence `2, 1, 3, 4, 7, 11, ...`, starting at term `offset`.
pub fn lucas(length: usize, offset: usize, format: NumberFormat) -> Terms {
    windowed_recurrence(length, offset, 2, 1, 1, format)
}

// --------------------------------------------------------------------------------------------------
