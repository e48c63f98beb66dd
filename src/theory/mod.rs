pub mod pitch;
pub mod scale;

pub use pitch::{midi_to_freq, midi_to_note_info, note_name, NOTE_NAMES};
pub use scale::{degree_to_midi, CIRCLE_OF_FIFTHS, MAJOR_SCALE};
