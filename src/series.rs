//! Integer and symbol series: Collatz walks, Norgård's infinity series and Lindenmayer systems.

use derive_more::Display;

pub mod collatz;
pub mod infinity;
pub mod lindenmayer;

pub use collatz::{collatz, collatz_mod};
pub use infinity::infinity_series;
pub use lindenmayer::{lindenmayer, lindenmayer_str};

// -------------------------------------------------------------------------------------------------

/// Errors of series which can leave the native integer range.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum SeriesError {
    #[display("Series overflows the integer range after value {_0}")]
    Overflow(u64),
    #[display("Infinity series overflows the integer range at index {_0}")]
    InfinityOverflow(u64),
}

impl std::error::Error for SeriesError {}
