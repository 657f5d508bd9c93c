//! Binary rhythm generators. All rhythms are sequences of `0` (rest) and `1` (beat) values.

pub mod euclidean;
pub mod fast_euclidean;
pub mod hex_beat;

pub use euclidean::euclidean;
pub use fast_euclidean::fast_euclidean;
pub use hex_beat::hex_beat;

// -------------------------------------------------------------------------------------------------

/// Clamp beat counts which exceed the step count, so a rhythm never gets more beats than steps.
pub(crate) fn clamp_beats(steps: u32, beats: u32) -> u32 {
    if beats > steps {
        log::warn!(
            "Rhythm has more beats ({}) than steps ({}): clamping beats to {}",
            beats,
            steps,
            steps
        );
        steps
    } else {
        beats
    }
}
