#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of voices in the sequencer
pub const NUM_VOICES: usize = 6;

/// Fixed voice roles, in storage order.
///
/// Cross-voice rules are written against roles, not positions, so the
/// per-voice rule table reads the way it is specified.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceRole {
    /// Drone on the key center
    Root,
    /// Follower that moves opposite to the ScaleWalker's direction
    Mirror,
    /// Drone a major third above the root
    Third,
    /// Follower steered by the previous gates of Third and Mirror
    Wanderer,
    /// Walks scale degrees 0-6, one step every 3 cycles
    ScaleWalker,
    /// Follower that copies the Wanderer's degree one cycle late
    Echo,
}

impl VoiceRole {
    /// All roles in storage order
    pub const ALL: [VoiceRole; NUM_VOICES] = [
        VoiceRole::Root,
        VoiceRole::Mirror,
        VoiceRole::Third,
        VoiceRole::Wanderer,
        VoiceRole::ScaleWalker,
        VoiceRole::Echo,
    ];

    /// Index of this role in the voice array
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            VoiceRole::Root => "Root",
            VoiceRole::Mirror => "Mirror",
            VoiceRole::Third => "Third",
            VoiceRole::Wanderer => "Wanderer",
            VoiceRole::ScaleWalker => "ScaleWalker",
            VoiceRole::Echo => "Echo",
        }
    }

    /// Whether this role's degree only changes on its own trigger
    pub fn is_follower(self) -> bool {
        matches!(
            self,
            VoiceRole::Mirror | VoiceRole::Wanderer | VoiceRole::Echo
        )
    }
}

/// Per-cycle output state for one voice.
///
/// `gate`/`freq`/`midi_note`/`degree` drive rendering; `note_index` and
/// `final_octave` exist only for human-readable display and never feed
/// back into pitch or gate computation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Voice {
    /// Current frequency in Hz
    pub freq: f32,
    /// Current MIDI note number
    pub midi_note: i32,
    /// Scale degree (can drift beyond 0-6 for followers)
    pub degree: i32,
    /// Base octave used in the most recent pitch computation
    pub octave: i32,
    /// Is this voice gated ON this cycle?
    pub gate: bool,
    /// Was this voice gated ON last cycle?
    pub prev_gate: bool,
    /// Chromatic note index 0-11, display only
    pub note_index: i32,
    /// Actual octave after degree overflow, display only
    pub final_octave: i32,
}
