pub mod driver; // Cycle clock, follower trigger schedule, deferred nudge
pub mod sequencer; // Deterministic six-voice state machine
pub mod theory; // Scale degrees, circle of fifths, MIDI/frequency math

pub use sequencer::{SequencerState, Voice, VoiceRole};
