//! Transport bar: tempo, cycle position, current root, next root

use drift_seq::theory::{note_name, CIRCLE_OF_FIFTHS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use super::state::UiUpdate;

pub fn render_transport(frame: &mut Frame, area: Rect, state: &UiUpdate) {
    let next_root = CIRCLE_OF_FIFTHS[(state.root_cycle_index + 1) % 12];

    // Cycle position within the current 12-cycle root block
    let phase = state.cycle % 12;

    let status = if state.paused { "PAUSED" } else { "RUN" };
    let label = format!(
        " {} | {:.0} BPM | cycle {} ({}/12) | root {} | next {} ",
        status,
        state.bpm,
        state.cycle,
        phase,
        note_name(state.root_chromatic),
        note_name(next_root),
    );

    let gauge = Gauge::default()
        .block(Block::default().title(" Transport ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if state.paused {
            Color::DarkGray
        } else {
            Color::Cyan
        }))
        .ratio(state.progress.clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}
