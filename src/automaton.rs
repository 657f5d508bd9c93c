//! One dimensional, binary, elementary cellular automaton with Wolfram rules.

use derive_more::Display;

pub mod rule;
pub use rule::{RuleInput, RuleTable};

// -------------------------------------------------------------------------------------------------

/// Minimum number of cells an automaton should have: one full neighborhood.
pub const MIN_CELLS: usize = 3;

/// Errors for rules which can't be interpreted in any meaningful way.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum AutomatonError {
    #[display("Invalid automaton rule '{_0}': expected a rule number in range [0, 255]")]
    InvalidRule(String),
    #[display("Invalid automaton neighborhood '{_0}': expected a 3 digit binary string")]
    InvalidNeighborhood(String),
    #[display("Invalid automaton rule value {_0}: expected 0 or 1")]
    InvalidBit(u8),
}

impl std::error::Error for AutomatonError {}

// -------------------------------------------------------------------------------------------------

/// An elementary cellular automaton over a ring of binary cells.
///
/// Each [`step`](Self::step) computes the next generation of all cells at once from the current
/// one: a cell's next value is the rule table's value for its `left, center, right`
/// neighborhood. The first and last cells are neighbors.
///
/// # Examples:
///
/// ```rust
/// use algoseq::automaton::Automaton;
///
/// let mut automaton = Automaton::new(8, 110).unwrap();
/// automaton.feed([0u8, 0, 0, 0, 0, 0, 0, 1]);
/// assert_eq!(automaton.step(), &[0, 0, 0, 0, 0, 0, 1, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    state: Vec<u8>,
    table: RuleTable,
}

impl Default for Automaton {
    fn default() -> Self {
        Self {
            state: vec![0; 8],
            table: RuleTable::default(),
        }
    }
}

impl Automaton {
    /// Create a new automaton with the given number of cells, all cleared, and the given rule.
    pub fn new<R: Into<RuleInput>>(length: usize, rule: R) -> Result<Self, AutomatonError> {
        if length < MIN_CELLS {
            log::warn!(
                "Automaton should have at least {} cells, but got {}",
                MIN_CELLS,
                length
            );
        }
        let table = RuleTable::default().applied(rule.into())?;
        Ok(Self {
            state: vec![0; length],
            table,
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the automaton has no cells.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Current generation of cells.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// Current rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Replace the rule without touching the current state. On errors, the previous rule is kept.
    pub fn set_rule<R: Into<RuleInput>>(&mut self, rule: R) -> Result<(), AutomatonError> {
        self.table = self.table.applied(rule.into())?;
        Ok(())
    }

    /// Replace the current state and with it the number of cells. Cell values other than 0 are
    /// treated as 1.
    pub fn feed<S: Into<Vec<u8>>>(&mut self, state: S) {
        let mut state = state.into();
        if state.len() < MIN_CELLS {
            log::warn!(
                "Automaton state should have at least {} cells, but got {}",
                MIN_CELLS,
                state.len()
            );
        }
        if state.iter().any(|cell| *cell > 1) {
            log::warn!("Automaton state should only contain 0 or 1 values: clamping cells to 1");
            for cell in state.iter_mut() {
                *cell = (*cell != 0) as u8;
            }
        }
        self.state = state;
    }

    /// Move on to the next generation and return it.
    pub fn step(&mut self) -> &[u8] {
        let length = self.state.len();
        let next = (0..length)
            .map(|index| {
                let left = self.state[(index + length - 1) % length];
                let right = self.state[(index + 1) % length];
                self.table.lookup(left, self.state[index], right)
            })
            .collect();
        self.state = next;
        &self.state
    }
}

/// Endless iterator over all following generations.
impl Iterator for Automaton {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step().to_vec())
    }
}

// --------------------------------------------------------------------------------------------------
