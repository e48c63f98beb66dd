/*
Pitch Conversions
=================

MIDI note numbers are the common currency between the sequencer and any
renderer: the sequencer emits them, the renderer turns them into Hz.

The MIDI formula: note_number = 12 * octave + semitone
Where semitone: C=0, C#=1, D=2, D#=3, E=4, F=5, F#=6, G=7, G#=8, A=9, A#=10, B=11

Frequencies are equal-tempered with A4 (MIDI 69) = 440 Hz.
*/

/// Chromatic note names, indexed by semitone (for display/debug only)
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a MIDI note number to its equal-tempered frequency in Hz.
///
/// Reference: A4 = MIDI 69 = 440 Hz, 12 semitones per octave.
pub fn midi_to_freq(midi_note: i32) -> f32 {
    440.0 * 2f32.powf((midi_note - 69) as f32 / 12.0)
}

/// Split a MIDI note number into chromatic index (0-11) and octave.
///
/// Handles notes below MIDI 0 by carrying into the octave, so the
/// chromatic index is always in range.
pub fn midi_to_note_info(midi: i32) -> (i32, i32) {
    let note_index = midi.rem_euclid(12);
    let octave = midi.div_euclid(12);
    (note_index, octave)
}

/// Human-readable name for a chromatic index (e.g. 7 → "G").
pub fn note_name(note_index: i32) -> &'static str {
    NOTE_NAMES[note_index.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a440_reference() {
        assert!((midi_to_freq(69) - 440.0).abs() < 1e-4);
    }

    #[test]
    fn octave_doubles_frequency() {
        let a4 = midi_to_freq(69);
        let a5 = midi_to_freq(81);
        assert!((a5 / a4 - 2.0).abs() < 1e-5);
    }

    #[test]
    fn middle_c_frequency() {
        // C4 = MIDI 60 ≈ 261.63 Hz
        let c4 = midi_to_freq(60);
        assert!((c4 - 261.6256).abs() < 0.01);
    }

    #[test]
    fn note_info_splits_midi() {
        assert_eq!(midi_to_note_info(60), (0, 5)); // C, octave 5 in raw midi/12 terms
        assert_eq!(midi_to_note_info(69), (9, 5)); // A
        assert_eq!(midi_to_note_info(11), (11, 0)); // B
    }

    #[test]
    fn note_info_negative_midi() {
        // -1 is B of the octave below zero
        assert_eq!(midi_to_note_info(-1), (11, -1));
    }

    #[test]
    fn note_names_cover_chromatic_scale() {
        assert_eq!(note_name(0), "C");
        assert_eq!(note_name(6), "F#");
        assert_eq!(note_name(11), "B");
        assert_eq!(note_name(12), "C"); // wraps
    }
}
