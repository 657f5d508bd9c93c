//! The algoseq prelude.
//!
//! The purpose of this module is to alleviate imports of all generators and their types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use algoseq::prelude::*;
//! ```

pub use super::{
    automaton::{Automaton, AutomatonError, RuleInput, RuleTable},
    pisano::{pisano, pisano_period, PisanoError, PisanoSearch},
    recurrence::{
        fibonacci, generate_recurrence, lucas, nbonacci, pell, recurrence, three_fibonacci,
        NumberFormat, Recurrence, Terms,
    },
    rhythm::{euclidean, fast_euclidean, hex_beat},
    series::{
        collatz, collatz_mod, infinity_series, lindenmayer, lindenmayer_str, SeriesError,
    },
    util::{modulo, rotate},
};
