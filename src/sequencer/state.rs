use crate::theory::{degree_to_midi, midi_to_freq, midi_to_note_info, CIRCLE_OF_FIFTHS};

use super::voice::{Voice, VoiceRole, NUM_VOICES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel trigger cycle far enough in the past that the Wanderer's
/// "Mirror fired within the last 2 cycles" rule cannot match at startup.
const NO_TRIGGER: i64 = -100;

/// Complete sequencer state: the cycle counter, six voices, and the
/// retained history the follower rules read.
///
/// `tick` is the only mutator of steady-state fields; `nudge_root` only
/// advances `cycle`. All other access is read-only. No hidden globals,
/// so independent instances stay independent.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SequencerState {
    /// Global cycle counter, the sole driver of pattern computation.
    /// Wraps at u32::MAX; at one cycle per bar that is thousands of
    /// years of runtime, so wraparound is documented but not handled.
    cycle: u32,
    voices: [Voice; NUM_VOICES],

    // Frozen follower degrees, updated only on that voice's own trigger
    frozen_mirror_degree: i32,
    frozen_wanderer_degree: i32,
    frozen_echo_degree: i32,
    /// Wanderer's degree as it was before this tick's possible update,
    /// so Echo copies the one-cycle-lagged value
    wanderer_degree_for_echo: i32,

    /// ScaleWalker's [current, previous] scale steps
    walker_history: [i32; 2],

    /// Cycle of the most recent Mirror gate-on (signed so the startup
    /// sentinel stays out of range of any real cycle)
    last_mirror_trigger_cycle: i64,

    /// Chromatic index (0-11) of the current key center
    root_chromatic: i32,
    /// Position in the circle of fifths (0-11)
    root_cycle_index: usize,
}

impl SequencerState {
    /// Create a freshly initialized sequencer at cycle 0.
    pub fn new() -> Self {
        let mut state = Self {
            cycle: 0,
            voices: [Voice::default(); NUM_VOICES],
            frozen_mirror_degree: 0,
            frozen_wanderer_degree: 0,
            frozen_echo_degree: 0,
            wanderer_degree_for_echo: 0,
            walker_history: [0; 2],
            last_mirror_trigger_cycle: NO_TRIGGER,
            root_chromatic: 0,
            root_cycle_index: 0,
        };
        state.reset();
        state
    }

    /// Reset to the deterministic startup state. Idempotent: resetting
    /// twice yields the same state as resetting once.
    pub fn reset(&mut self) {
        self.cycle = 0;
        self.frozen_mirror_degree = 4; // 5th scale degree
        self.frozen_wanderer_degree = 5; // 6th scale degree
        self.frozen_echo_degree = 3; // 4th scale degree
        self.wanderer_degree_for_echo = 5;
        self.walker_history = [0, 0];
        self.last_mirror_trigger_cycle = NO_TRIGGER;
        self.root_chromatic = 0; // C
        self.root_cycle_index = 0;

        for voice in &mut self.voices {
            *voice = Voice {
                degree: 0,
                octave: 3,
                ..Voice::default()
            };
        }

        // Starting notes; followers get a minimum-octave floor so they
        // never open below their register
        self.set_initial_note(VoiceRole::Root, 0, 3, None);
        self.set_initial_note(VoiceRole::Mirror, 4, 3, Some(4));
        self.set_initial_note(VoiceRole::Third, 2, 3, None);
        self.set_initial_note(VoiceRole::Wanderer, 5, 3, Some(4));
        self.set_initial_note(VoiceRole::ScaleWalker, 0, 4, None);
        self.set_initial_note(VoiceRole::Echo, 3, 4, Some(4));
    }

    fn set_initial_note(
        &mut self,
        role: VoiceRole,
        degree: i32,
        octave: i32,
        min_octave: Option<i32>,
    ) {
        let midi = degree_to_midi(0, degree, octave, min_octave);
        let voice = &mut self.voices[role.index()];
        voice.midi_note = midi;
        voice.freq = midi_to_freq(midi);
        let (note_index, final_octave) = midi_to_note_info(midi);
        voice.note_index = note_index;
        voice.final_octave = final_octave;
    }

    /// Advance the sequencer by one cycle.
    ///
    /// Order within a tick matters and must not be rearranged: gates are
    /// computed from the pre-tick `prev_gate` snapshot, the ScaleWalker
    /// settles before the Mirror reads its direction, and the Echo's
    /// snapshot of the Wanderer is taken before the Wanderer updates.
    pub fn tick(&mut self) {
        let cycle = self.cycle;

        // Save previous gates before anything is recomputed
        for voice in &mut self.voices {
            voice.prev_gate = voice.gate;
        }

        // Current root, purely a function of the cycle counter
        self.root_cycle_index = ((cycle / 12) % 12) as usize;
        self.root_chromatic = CIRCLE_OF_FIFTHS[self.root_cycle_index];

        // --- Gates, all from the same pre-tick snapshot ---

        let mut gates = [false; NUM_VOICES];

        // Root: 12-cycle period, ON for 0-9
        gates[VoiceRole::Root.index()] = cycle % 12 < 10;

        // Third: 7-cycle period, ON for 0-4
        gates[VoiceRole::Third.index()] = cycle % 7 < 5;

        // ScaleWalker: 5-cycle period, ON for 0-3
        gates[VoiceRole::ScaleWalker.index()] = cycle % 5 < 4;

        // Mirror: every 3 cycles, if the ScaleWalker was ON last cycle
        if cycle % 3 == 0 && self.voices[VoiceRole::ScaleWalker.index()].prev_gate {
            gates[VoiceRole::Mirror.index()] = true;
            self.last_mirror_trigger_cycle = cycle as i64;
        }

        // Wanderer: every 5 cycles, if the Mirror fired within the last
        // 2 cycles (a Mirror trigger this same cycle also counts)
        if cycle % 5 == 0 && cycle as i64 - self.last_mirror_trigger_cycle <= 2 {
            gates[VoiceRole::Wanderer.index()] = true;
        }

        // Echo: every 4 cycles, unconditional
        gates[VoiceRole::Echo.index()] = cycle % 4 == 0;

        for (voice, gate) in self.voices.iter_mut().zip(gates) {
            voice.gate = gate;
        }

        // --- Drone pitches ---

        self.resolve_pitch(VoiceRole::Root, 0, 3, None);
        self.resolve_pitch(VoiceRole::Third, 2, 3, None);

        // ScaleWalker: walks degrees 0-6, one step every 3 cycles.
        // Rides an octave up while the Third is gated on.
        let walker_step = ((cycle / 3) % 7) as i32;
        let walker_octave = if gates[VoiceRole::Third.index()] { 4 } else { 3 };
        self.resolve_pitch(VoiceRole::ScaleWalker, walker_step, walker_octave, Some(3));
        self.clamp_below(VoiceRole::ScaleWalker, 72); // keep under C5

        let prev_walker_step = self.walker_history[0];
        self.walker_history[1] = prev_walker_step;
        self.walker_history[0] = walker_step;

        // --- Followers (degree only moves on the voice's own trigger) ---

        // Mirror moves opposite to the ScaleWalker's direction
        if gates[VoiceRole::Mirror.index()] {
            self.frozen_mirror_degree += match walker_step.cmp(&prev_walker_step) {
                std::cmp::Ordering::Greater => -1,
                std::cmp::Ordering::Less => 1,
                std::cmp::Ordering::Equal => 0,
            };
        }
        self.resolve_pitch(VoiceRole::Mirror, self.frozen_mirror_degree, 3, Some(4));

        // Wanderer, steered by the previous-cycle gates of Third and
        // Mirror. Snapshot the degree first so Echo sees the pre-update
        // value.
        self.wanderer_degree_for_echo = self.frozen_wanderer_degree;

        if gates[VoiceRole::Wanderer.index()] {
            let third_was_on = self.voices[VoiceRole::Third.index()].prev_gate;
            let mirror_was_on = self.voices[VoiceRole::Mirror.index()].prev_gate;

            self.frozen_wanderer_degree += match (third_was_on, mirror_was_on) {
                (true, true) => 1,
                (true, false) => -2,
                (false, true) => 0, // hold
                (false, false) => 3, // rare
            };
        }
        self.resolve_pitch(VoiceRole::Wanderer, self.frozen_wanderer_degree, 3, Some(4));

        // Echo copies the Wanderer's pre-update degree, one cycle late
        if gates[VoiceRole::Echo.index()] {
            self.frozen_echo_degree = self.wanderer_degree_for_echo;
        }
        // Sits an octave higher while the Root rests
        let echo_octave = if self.voices[VoiceRole::Root.index()].prev_gate {
            4
        } else {
            5
        };
        self.resolve_pitch(VoiceRole::Echo, self.frozen_echo_degree, echo_octave, Some(4));
        self.clamp_below(VoiceRole::Echo, 84); // keep under C6

        // Refresh display fields
        for voice in &mut self.voices {
            let (note_index, final_octave) = midi_to_note_info(voice.midi_note);
            voice.note_index = note_index;
            voice.final_octave = final_octave;
        }

        self.cycle += 1;
    }

    /// Force the cycle counter to the next root-rotation boundary, so the
    /// following `tick` lands on a key change. Derived fields are not
    /// recomputed here; only `tick` produces those.
    pub fn nudge_root(&mut self) {
        self.cycle = (self.cycle / 12 + 1) * 12;
    }

    fn resolve_pitch(
        &mut self,
        role: VoiceRole,
        degree: i32,
        octave: i32,
        min_octave: Option<i32>,
    ) {
        let midi = degree_to_midi(self.root_chromatic, degree, octave, min_octave);
        let voice = &mut self.voices[role.index()];
        voice.degree = degree;
        voice.octave = octave;
        voice.midi_note = midi;
        voice.freq = midi_to_freq(midi);
    }

    /// Drop the voice an octave if it reached the given MIDI ceiling.
    fn clamp_below(&mut self, role: VoiceRole, ceiling: i32) {
        let voice = &mut self.voices[role.index()];
        if voice.midi_note >= ceiling {
            voice.midi_note -= 12;
            voice.freq = midi_to_freq(voice.midi_note);
        }
    }

    /// Current cycle counter
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Chromatic index (0-11) of the current key center
    pub fn root_chromatic(&self) -> i32 {
        self.root_chromatic
    }

    /// Position of the current root in the circle of fifths (0-11)
    pub fn root_cycle_index(&self) -> usize {
        self.root_cycle_index
    }

    /// Read one voice's settled output
    pub fn voice(&self, role: VoiceRole) -> &Voice {
        &self.voices[role.index()]
    }

    /// All six voices in storage order
    pub fn voices(&self) -> &[Voice; NUM_VOICES] {
        &self.voices
    }
}

impl Default for SequencerState {
    fn default() -> Self {
        Self::new()
    }
}
