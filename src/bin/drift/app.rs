//! Drift - main application builder and runner

use std::sync::Arc;

use color_eyre::eyre::Result as EyreResult;
use rtrb::RingBuffer;

use drift_seq::driver::NudgeLatch;

use super::engine::Engine;
use super::ui::{UiApp, UiUpdate};

/// Ring buffer capacities; snapshots flow at the engine loop rate, so a
/// second's worth of slack is plenty
const STATE_RING_CAPACITY: usize = 256;
const CONTROL_RING_CAPACITY: usize = 64;

/// Main application builder
pub struct Drift {
    bpm: f64,
}

impl Drift {
    pub fn new() -> Self {
        Self { bpm: 50.0 }
    }

    /// Set the starting tempo in beats per minute
    pub fn bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Run the application: engine thread plus TUI on this thread.
    pub fn run(self) -> EyreResult<()> {
        let (state_tx, state_rx) = RingBuffer::<UiUpdate>::new(STATE_RING_CAPACITY);
        let (control_tx, control_rx) = RingBuffer::new(CONTROL_RING_CAPACITY);

        let nudge = Arc::new(NudgeLatch::new());
        let engine = Engine::new(self.bpm, Arc::clone(&nudge));
        let engine_thread = std::thread::spawn(move || engine.run(control_rx, state_tx));

        let mut terminal = ratatui::init();
        let mut ui = UiApp::new(state_rx, control_tx, UiUpdate::new(self.bpm));
        let result = ui.run(&mut terminal);
        ratatui::restore();

        // UiApp sends Quit on the way out; the engine exits on receipt
        let _ = engine_thread.join();

        result
    }
}

impl Default for Drift {
    fn default() -> Self {
        Self::new()
    }
}
