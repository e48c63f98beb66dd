/*
Sequencer Core
==============

A deterministic state machine that derives gate patterns and pitches for
six fixed-role voices from a global cycle counter. Once per musical cycle
the driver calls `tick`, then reads per-voice gate/frequency state to
decide what to render. The core owns no clock and produces no audio; it
is pure in-memory computation.

The six roles:
- Root, Third: drones at fixed scale degrees
- ScaleWalker: walks degrees 0-6, one step every 3 cycles
- Mirror, Wanderer, Echo: followers whose degree only changes on their
  own trigger, driven by the recent history of the other voices

`tick` is allocation-free and constant-time so it can share a thread with
strict-deadline audio or control work.
*/

pub mod state;
pub mod voice;

pub use state::SequencerState;
pub use voice::{Voice, VoiceRole, NUM_VOICES};
