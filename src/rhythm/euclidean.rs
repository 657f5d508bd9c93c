use super::clamp_beats;
use crate::util::rotate;

// -------------------------------------------------------------------------------------------------

/// Count and remainder ladder of the Bjorklund algorithm.
///
/// Each level records how many groups of the level below nest into one group of this level,
/// and whether a group from two levels below follows them.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Ladder {
    counts: Vec<u32>,
    remainders: Vec<u32>,
    level: usize,
}

impl Ladder {
    /// Build the ladder for `1 <= beats <= steps`.
    fn new(steps: u32, beats: u32) -> Self {
        debug_assert!(beats >= 1 && beats <= steps);
        let mut divisor = steps - beats;
        let mut counts = Vec::new();
        let mut remainders = vec![beats];
        let mut level = 0;
        loop {
            counts.push(divisor / remainders[level]);
            remainders.push(divisor % remainders[level]);
            divisor = remainders[level];
            level += 1;
            if remainders[level] <= 1 {
                break;
            }
        }
        counts.push(divisor);
        Self {
            counts,
            remainders,
            level,
        }
    }

    /// Expand the whole ladder into a rhythm.
    fn build(&self) -> Vec<u8> {
        let mut pattern = Vec::new();
        self.expand(self.level as isize, &mut pattern);
        pattern
    }

    /// Recursively expand the given level into `pattern`. Level -1 is a rest, -2 a beat.
    fn expand(&self, level: isize, pattern: &mut Vec<u8>) {
        match level {
            -1 => pattern.push(0),
            -2 => pattern.push(1),
            _ => {
                let index = level as usize;
                for _ in 0..self.counts[index] {
                    self.expand(level - 1, pattern);
                }
                if self.remainders[index] != 0 {
                    self.expand(level - 2, pattern);
                }
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Generates a Euclidean rhythm with the given number of steps and beats, using Bjorklund's
/// algorithm.
///
/// The resulting rhythm is rotated so that its first beat lands on step `rotate`. Negative
/// rotations count from the end. Beats are clamped to the step count. Zero beats result in a
/// rhythm of rests, zero steps in an empty rhythm.
pub fn euclidean(steps: u32, beats: u32, rotate_by: i32) -> Vec<u8> {
    if steps == 0 {
        return vec![];
    }
    let beats = clamp_beats(steps, beats);
    if beats == 0 {
        return vec![0; steps as usize];
    }
    let pattern = Ladder::new(steps, beats).build();
    debug_assert_eq!(pattern.len(), steps as usize);
    let first_beat = pattern.iter().position(|v| *v == 1).unwrap_or(0);
    rotate(&pattern, rotate_by as i64 - first_beat as i64)
}

// --------------------------------------------------------------------------------------------------
