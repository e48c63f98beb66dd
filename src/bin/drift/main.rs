//! drift - terminal monitor for the drone sequencer
//!
//! Run with: cargo run

mod app;
mod engine;
mod ui;

use app::Drift;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    Drift::new().bpm(50.0).run()
}
