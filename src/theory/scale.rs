/*
Scale Degrees
=============

Voices address pitch as a signed degree into a 7-note major scale relative
to a movable root. Degrees are unbounded: degree 7 is the root one octave
up, degree -1 is the 7th one octave down. Normalization uses floor
division so negative degrees wrap correctly instead of mirroring.

The root itself steps through the circle of fifths, one entry every 12
cycles, giving a full harmonic rotation every 144 cycles.
*/

/// Major scale intervals in semitones from the root
pub const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Circle of fifths as chromatic indices (C=0, G=7, D=2, A=9, ...)
pub const CIRCLE_OF_FIFTHS: [i32; 12] = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];

/// Resolve a scale degree against a root and base octave to a MIDI note.
///
/// The degree is normalized into 0..=6 with the overflow carried into the
/// octave: degree 9 at octave 3 is degree 2 at octave 4, and degree -1 at
/// octave 3 is degree 6 at octave 2. If `min_octave` is given, the result
/// is raised by whole octaves until it reaches that register.
pub fn degree_to_midi(
    root_chromatic: i32,
    degree: i32,
    base_octave: i32,
    min_octave: Option<i32>,
) -> i32 {
    // Floor division keeps the normalized degree in 0..=6 for any sign
    let oct_offset = degree.div_euclid(7);
    let norm_degree = degree.rem_euclid(7) as usize;

    let semitone_offset = MAJOR_SCALE[norm_degree];
    let mut midi = (base_octave + oct_offset) * 12 + root_chromatic + semitone_offset;

    if let Some(min_octave) = min_octave {
        let min_midi = min_octave * 12;
        while midi < min_midi {
            midi += 12;
        }
    }

    midi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_degree_is_octave_times_twelve() {
        // C root, degree 0, octave 3 = MIDI 36
        assert_eq!(degree_to_midi(0, 0, 3, None), 36);
        // G root, same shape, shifted by 7 semitones
        assert_eq!(degree_to_midi(7, 0, 3, None), 43);
    }

    #[test]
    fn degrees_walk_the_major_scale() {
        let expected = [36, 38, 40, 41, 43, 45, 47];
        for (degree, midi) in expected.iter().enumerate() {
            assert_eq!(degree_to_midi(0, degree as i32, 3, None), *midi);
        }
    }

    #[test]
    fn positive_overflow_carries_octave() {
        // Degree 7 = root, one octave up
        assert_eq!(
            degree_to_midi(0, 7, 3, None),
            degree_to_midi(0, 0, 4, None)
        );
        // Degree 9 = third, one octave up
        assert_eq!(
            degree_to_midi(0, 9, 3, None),
            degree_to_midi(0, 2, 4, None)
        );
    }

    #[test]
    fn negative_degree_wraps_downward() {
        // Degree -1 at octave 3 equals degree 6 at octave 2
        assert_eq!(
            degree_to_midi(0, -1, 3, None),
            degree_to_midi(0, 6, 2, None)
        );
        // Degree -7 is the root a full octave down
        assert_eq!(
            degree_to_midi(0, -7, 3, None),
            degree_to_midi(0, 0, 2, None)
        );
    }

    #[test]
    fn min_octave_raises_into_register() {
        // Degree 0 octave 3 is MIDI 36; floor of octave 4 forces 48
        assert_eq!(degree_to_midi(0, 0, 3, Some(4)), 48);
        // Already above the floor: unchanged
        assert_eq!(degree_to_midi(0, 0, 5, Some(4)), 60);
    }

    #[test]
    fn min_octave_applies_after_normalization() {
        // Deeply negative degree still lands at or above the floor
        let midi = degree_to_midi(0, -20, 3, Some(4));
        assert!(midi >= 48);
    }

    #[test]
    fn circle_of_fifths_is_a_permutation() {
        let mut seen = [false; 12];
        for &chromatic in &CIRCLE_OF_FIFTHS {
            seen[chromatic as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn circle_of_fifths_steps_by_seven_semitones() {
        for pair in CIRCLE_OF_FIFTHS.windows(2) {
            assert_eq!((pair[1] - pair[0]).rem_euclid(12), 7);
        }
    }
}
