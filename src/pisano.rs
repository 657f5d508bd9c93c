//! Pisano periods: the repeating cycle of the Fibonacci sequence reduced modulo `m`.

use derive_more::Display;
use num_traits::ToPrimitive;

use crate::recurrence::Recurrence;

// -------------------------------------------------------------------------------------------------

/// Error returned by the Pisano period search.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum PisanoError {
    #[display("No Pisano period found for modulus {modulus} within the first {searched} terms")]
    PeriodNotFound { modulus: u64, searched: usize },
}

impl std::error::Error for PisanoError {}

// -------------------------------------------------------------------------------------------------

/// Bounded Pisano period search.
///
/// Generates a batch of Fibonacci terms modulo `m` and looks for the restart signature
/// `0, 1, 1`. When the batch contains no restart, the batch length is doubled and the batch is
/// generated again from scratch, until `max_length` terms got searched.
///
/// Periods are at most `6 * m` long, so the default bound covers all moduli up to ~170000.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PisanoSearch {
    initial_length: usize,
    max_length: usize,
}

impl Default for PisanoSearch {
    fn default() -> Self {
        Self {
            initial_length: 32,
            max_length: 1 << 20,
        }
    }
}

impl PisanoSearch {
    /// Create a new search with the default initial and maximum batch lengths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the search with the given initial batch length.
    pub fn with_initial_length(mut self, length: usize) -> Self {
        self.initial_length = length.max(RESTART_SIGNATURE.len() + 1);
        self
    }

    /// Return a copy of the search with the given maximum batch length.
    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Initial batch length.
    pub fn initial_length(&self) -> usize {
        self.initial_length
    }

    /// Maximum number of terms the search generates before giving up.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Find the Pisano period for the given modulus: the Fibonacci terms modulo `m` up to, but
    /// not including the first restart of the sequence. Moduli < 2 have the trivial period `[0]`.
    pub fn period(&self, modulus: u64) -> Result<Vec<u64>, PisanoError> {
        if modulus < 2 {
            return Ok(vec![0]);
        }
        let mut length = self.initial_length.min(self.max_length);
        loop {
            let mut terms = fibonacci_mod(modulus, length);
            if let Some(restart) = find_restart(&terms) {
                terms.truncate(restart);
                return Ok(terms);
            }
            if length >= self.max_length {
                return Err(PisanoError::PeriodNotFound {
                    modulus,
                    searched: length,
                });
            }
            log::debug!(
                "No Pisano period for modulus {} within {} terms, doubling batch length",
                modulus,
                length
            );
            length = length.saturating_mul(2).min(self.max_length);
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Find the Pisano period of the given modulus with the default search bounds.
pub fn pisano_period(modulus: u64) -> Result<Vec<u64>, PisanoError> {
    PisanoSearch::default().period(modulus)
}

/// Fibonacci terms modulo `m`. When a `length` >= 1 is given, exactly `length` terms are
/// returned, else the Pisano period of the modulus. Moduli < 2 always return `[0]`.
pub fn pisano(modulus: u64, length: Option<usize>) -> Result<Vec<u64>, PisanoError> {
    if modulus < 2 {
        return Ok(vec![0]);
    }
    match length {
        Some(length) if length >= 1 => Ok(fibonacci_mod(modulus, length)),
        _ => pisano_period(modulus),
    }
}

// -------------------------------------------------------------------------------------------------

const RESTART_SIGNATURE: [u64; 3] = [0, 1, 1];

fn fibonacci_mod(modulus: u64, length: usize) -> Vec<u64> {
    Recurrence::new(0, 1, 1)
        .with_modulus(modulus)
        .take(length)
        .map(|term| term.to_u64().unwrap_or_default())
        .collect()
}

/// Index of the first restart signature, skipping the sequence's own start.
fn find_restart(terms: &[u64]) -> Option<usize> {
    terms
        .windows(RESTART_SIGNATURE.len())
        .skip(1)
        .position(|window| window == RESTART_SIGNATURE)
        .map(|position| position + 1)
}

// --------------------------------------------------------------------------------------------------
