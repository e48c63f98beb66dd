//! Voice panel: one row per voice with gate, pitch, and activity trail

use drift_seq::theory::note_name;
use drift_seq::VoiceRole;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table},
    Frame,
};

use super::state::UiUpdate;

/// Width of the activity meter in characters
const METER_WIDTH: usize = 16;

pub fn render_voices(frame: &mut Frame, area: Rect, state: &UiUpdate) {
    let header = Row::new(["voice", "gate", "note", "degree", "freq", "activity"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = VoiceRole::ALL.map(|role| {
        let voice = &state.voices[role.index()];
        let activity = state.activity[role.index()];

        let gate = if voice.gate {
            Span::styled("●", Style::default().fg(Color::Green))
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        };

        let note = format!("{}{}", note_name(voice.note_index), voice.final_octave);

        let filled = (activity * METER_WIDTH as f32).round() as usize;
        let meter = format!(
            "{}{}",
            "█".repeat(filled.min(METER_WIDTH)),
            "·".repeat(METER_WIDTH - filled.min(METER_WIDTH))
        );

        Row::new([
            Cell::from(role.label()),
            Cell::from(gate),
            Cell::from(note),
            Cell::from(format!("{:+}", voice.degree)),
            Cell::from(format!("{:7.2} Hz", voice.freq)),
            Cell::from(Span::styled(meter, Style::default().fg(Color::Cyan))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Length(METER_WIDTH as u16 + 1),
        ],
    )
    .header(header)
    .column_spacing(2);

    frame.render_widget(table, area);
}
