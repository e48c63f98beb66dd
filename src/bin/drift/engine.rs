//! Engine thread - runs the sequencer against a wall clock
//!
//! Owns the `SequencerState` and its cycle clock, applies deferred
//! nudge requests at cycle boundaries, and streams Copy snapshots to
//! the UI thread over a ring buffer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rtrb::{Consumer, Producer};

use drift_seq::driver::{CycleClock, FollowerTriggers, NudgeLatch};
use drift_seq::sequencer::NUM_VOICES;
use drift_seq::{SequencerState, VoiceRole};

use super::ui::state::{ControlMessage, UiUpdate};

/// Tempo range matching a hardware pot sweep
const BPM_MIN: f64 = 30.0;
const BPM_MAX: f64 = 120.0;
const BPM_STEP: f64 = 5.0;

/// Engine loop granularity; fine enough that follower trigger points
/// land within a few milliseconds of their progress fraction
const LOOP_SLEEP: Duration = Duration::from_millis(5);

/// Activity meter smoothing: fast attack, slow trail-off
const ATTACK_TAU_SECS: f64 = 0.04;
const DECAY_TAU_SECS: f64 = 1.2;

pub struct Engine {
    seq: SequencerState,
    clock: CycleClock,
    triggers: FollowerTriggers,
    nudge: Arc<NudgeLatch>,
    activity: [f32; NUM_VOICES],
    paused: bool,
}

impl Engine {
    pub fn new(bpm: f64, nudge: Arc<NudgeLatch>) -> Self {
        Self {
            seq: SequencerState::new(),
            clock: CycleClock::new(bpm),
            triggers: FollowerTriggers::new(),
            nudge,
            activity: [0.0; NUM_VOICES],
            paused: false,
        }
    }

    /// Run until a `Quit` message arrives.
    pub fn run(
        mut self,
        mut control_rx: Consumer<ControlMessage>,
        mut state_tx: Producer<UiUpdate>,
    ) {
        let mut last = Instant::now();

        loop {
            std::thread::sleep(LOOP_SLEEP);
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64();
            last = now;

            while let Ok(msg) = control_rx.pop() {
                match msg {
                    ControlMessage::TogglePause => self.paused = !self.paused,
                    ControlMessage::NudgeRoot => self.nudge.request(),
                    ControlMessage::BpmUp => {
                        self.clock.set_bpm((self.clock.bpm() + BPM_STEP).min(BPM_MAX))
                    }
                    ControlMessage::BpmDown => {
                        self.clock.set_bpm((self.clock.bpm() - BPM_STEP).max(BPM_MIN))
                    }
                    ControlMessage::Quit => return,
                }
            }

            if !self.paused {
                for _ in 0..self.clock.advance(dt) {
                    // Pending nudge lands on the boundary, before the tick
                    if self.nudge.take() {
                        self.seq.nudge_root();
                    }
                    self.seq.tick();
                    self.triggers.begin_cycle();
                }

                let seq = &self.seq;
                let activity = &mut self.activity;
                self.triggers.poll(self.clock.progress(), |role| {
                    // A follower only sounds if its gate is on this cycle
                    if seq.voice(role).gate {
                        activity[role.index()] = 1.0;
                    }
                });
            }

            self.update_activity(dt);

            // Drop the frame if the UI is behind; the next one supersedes it
            let _ = state_tx.push(self.snapshot());
        }
    }

    /// Smooth per-voice levels toward their gate state: instant-ish
    /// attack, long decay, so short gates still leave a visible trail.
    fn update_activity(&mut self, dt: f64) {
        for role in VoiceRole::ALL {
            let i = role.index();
            // Followers are driven by their trigger points above; the
            // drones follow their gate directly
            let target = if !role.is_follower() && self.seq.voice(role).gate {
                1.0f32
            } else {
                0.0
            };

            let level = self.activity[i];
            let tau = if target > level {
                ATTACK_TAU_SECS
            } else {
                DECAY_TAU_SECS
            };
            let coeff = 1.0 - (-dt / tau).exp();
            self.activity[i] = level + (target - level) * coeff as f32;
        }
    }

    fn snapshot(&self) -> UiUpdate {
        UiUpdate {
            cycle: self.seq.cycle(),
            root_chromatic: self.seq.root_chromatic(),
            root_cycle_index: self.seq.root_cycle_index(),
            bpm: self.clock.bpm(),
            progress: self.clock.progress(),
            paused: self.paused,
            voices: *self.seq.voices(),
            activity: self.activity,
        }
    }
}
