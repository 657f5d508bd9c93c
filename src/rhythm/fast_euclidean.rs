use super::clamp_beats;
use crate::util::rotate;

// -------------------------------------------------------------------------------------------------

/// Generates an evenly distributed rhythm by tracing a line through a `steps` x `beats` grid and
/// emitting a beat whenever the line crosses into a new row.
///
/// For small step counts this matches many of the [`euclidean`](super::euclidean) rhythms, but
/// the beat order may differ. Rotations are plain positional shifts to the right. Beats are
/// clamped to the step count. Zero beats result in a rhythm of rests, zero steps in an empty
/// rhythm.
///
/// Note: applying the grid rule literally to zero beats would still emit a single beat on the
/// first step, because the first step has no previous row to compare with. Zero beats are
/// special cased to match [`euclidean`](super::euclidean) instead.
pub fn fast_euclidean(steps: u32, beats: u32, rotate_by: i32) -> Vec<u8> {
    if steps == 0 {
        return vec![];
    }
    let beats = clamp_beats(steps, beats);
    if beats == 0 {
        return vec![0; steps as usize];
    }
    let mut previous_row = None;
    let pattern = (0..steps as u64)
        .map(|step| {
            let row = step * beats as u64 / steps as u64;
            let beat = previous_row != Some(row);
            previous_row = Some(row);
            beat as u8
        })
        .collect::<Vec<_>>();
    if rotate_by != 0 {
        rotate(&pattern, rotate_by as i64)
    } else {
        pattern
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::fast_euclidean;
    use crate::rhythm::euclidean;
    use pretty_assertions::assert_eq;

    #[test]
    fn patterns() {
        assert_eq!(fast_euclidean(8, 4, 0), vec![1, 0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(fast_euclidean(8, 3, 0), vec![1, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(fast_euclidean(5, 2, 0), vec![1, 0, 0, 1, 0]);
        assert_eq!(fast_euclidean(7, 3, 0), vec![1, 0, 0, 1, 0, 1, 0]);
        assert_eq!(
            fast_euclidean(12, 7, 0),
            vec![1, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1]
        );
        assert_eq!(fast_euclidean(1, 1, 0), vec![1]);
    }

    #[test]
    fn matches_euclidean() {
        for (steps, beats) in [(4, 2), (6, 3), (8, 2), (8, 3), (8, 4), (12, 4), (16, 4)] {
            assert_eq!(
                fast_euclidean(steps, beats, 0),
                euclidean(steps, beats, 0),
                "({}, {})",
                steps,
                beats
            );
        }
    }

    #[test]
    fn beat_counts() {
        for steps in 1..=128 {
            for beats in 0..=steps {
                let pattern = fast_euclidean(steps, beats, 0);
                assert_eq!(pattern.len(), steps as usize);
                assert_eq!(
                    pattern.iter().filter(|v| **v == 1).count(),
                    beats as usize,
                    "({}, {})",
                    steps,
                    beats
                );
            }
        }
    }

    #[test]
    fn edge_cases() {
        assert_eq!(fast_euclidean(8, 0, 0), vec![0; 8]);
        assert_eq!(fast_euclidean(8, 9, 0), vec![1; 8]);
        assert_eq!(fast_euclidean(0, 3, 0), Vec::<u8>::new());
    }

    #[test]
    fn rotation() {
        assert_eq!(fast_euclidean(8, 3, 2), vec![1, 0, 1, 0, 0, 1, 0, 0]);
        assert_eq!(fast_euclidean(8, 3, -1), vec![0, 0, 1, 0, 0, 1, 0, 1]);
        assert_eq!(fast_euclidean(8, 3, 3), fast_euclidean(8, 3, 3 + 8));
    }
}
