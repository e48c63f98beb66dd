//! Shared state types for UI communication
//!
//! Designed for real-time safety: updates flowing out of the engine
//! thread are Copy and allocation-free.

use drift_seq::sequencer::NUM_VOICES;
use drift_seq::Voice;

/// Commands sent from the UI thread to the engine thread
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    /// Pause/resume the cycle clock
    TogglePause,
    /// Request a root nudge, applied at the next cycle boundary
    NudgeRoot,
    /// Raise the tempo one step
    BpmUp,
    /// Lower the tempo one step
    BpmDown,
    /// Shut the engine thread down
    Quit,
}

/// Snapshot of engine state for one UI frame (Copy, no allocations)
#[derive(Clone, Copy, Debug)]
pub struct UiUpdate {
    /// Cycle counter after the most recent tick
    pub cycle: u32,
    /// Chromatic index of the current root
    pub root_chromatic: i32,
    /// Position of the root in the circle of fifths
    pub root_cycle_index: usize,
    /// Current tempo
    pub bpm: f64,
    /// Fraction of the current cycle elapsed, 0..1
    pub progress: f64,
    /// Whether the cycle clock is paused
    pub paused: bool,
    /// Settled voice outputs from the most recent tick
    pub voices: [Voice; NUM_VOICES],
    /// Smoothed per-voice activity levels for display, 0..1
    pub activity: [f32; NUM_VOICES],
}

impl UiUpdate {
    pub fn new(bpm: f64) -> Self {
        Self {
            cycle: 0,
            root_chromatic: 0,
            root_cycle_index: 0,
            bpm,
            progress: 0.0,
            paused: false,
            voices: [Voice::default(); NUM_VOICES],
            activity: [0.0; NUM_VOICES],
        }
    }
}
