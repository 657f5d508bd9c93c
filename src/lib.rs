//! Deterministic sequence generators for algorithmic composition.
//!
//! Every generator is a plain function which turns a few numeric parameters into a finite
//! sequence of integers, bits or symbols:
//!
//! - [`recurrence`]: arbitrary precision linear recurrences (Fibonacci, Pell, Lucas, n-bonacci).
//! - [`pisano`]: Pisano periods of the Fibonacci sequence modulo `m`.
//! - [`rhythm`]: Euclidean and hex based binary rhythms.
//! - [`automaton`]: elementary cellular automata, the only stateful generator.
//! - [`series`]: Collatz walks, Nørgård's infinity series and Lindenmayer systems.
//!
//! Anomalies which still allow a meaningful result, like a rule with too few bits, are reported
//! via the [`log`] crate. Inputs which can't be interpreted at all are returned as errors.

pub mod automaton;
pub mod pisano;
pub mod recurrence;
pub mod rhythm;
pub mod series;
pub mod util;

pub mod prelude;

pub use automaton::{Automaton, AutomatonError, RuleInput, RuleTable};
pub use pisano::{pisano, pisano_period, PisanoError, PisanoSearch};
pub use recurrence::{generate_recurrence, recurrence, NumberFormat, Recurrence, Terms};
pub use rhythm::{euclidean, fast_euclidean, hex_beat};
