//! TUI module for drift
//!
//! Real-time view of the sequencer: per-voice gates and pitches, the
//! current root, and the cycle clock.

pub mod state;
mod transport;
mod voices;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

pub use state::{ControlMessage, UiUpdate};

use transport::render_transport;
use voices::render_voices;

/// UI application state
pub struct UiApp {
    /// Ring buffer receiver for engine snapshots
    state_rx: Consumer<UiUpdate>,
    /// Ring buffer sender for control messages
    control_tx: Producer<ControlMessage>,
    /// Latest snapshot received
    current: UiUpdate,
    /// Whether the app should quit
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        state_rx: Consumer<UiUpdate>,
        control_tx: Producer<ControlMessage>,
        initial: UiUpdate,
    ) -> Self {
        Self {
            state_rx,
            control_tx,
            current: initial,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        // Let the engine thread wind down too
        let _ = self.control_tx.push(ControlMessage::Quit);
        Ok(())
    }

    /// Poll for snapshots, keeping only the latest
    fn poll_state(&mut self) {
        while let Ok(update) = self.state_rx.pop() {
            self.current = update;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let msg = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => ControlMessage::TogglePause,
            KeyCode::Char('n') | KeyCode::Char('N') => ControlMessage::NudgeRoot,
            KeyCode::Up | KeyCode::Char('+') => ControlMessage::BpmUp,
            KeyCode::Down | KeyCode::Char('-') => ControlMessage::BpmDown,
            _ => return,
        };
        // Dropped messages are acceptable; the ring is far larger than
        // a human can type
        let _ = self.control_tx.push(msg);
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(8),    // Voices
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_transport(frame, chunks[0], &self.current);

        let voices_block = Block::default().title(" Voices ").borders(Borders::ALL);
        let voices_inner = voices_block.inner(chunks[1]);
        frame.render_widget(voices_block, chunks[1]);
        render_voices(frame, voices_inner, &self.current);

        let help = Paragraph::new(" [Q] Quit  [Space] Pause  [N] Nudge root  [↑/↓] BPM")
            .style(ratatui::style::Style::default().fg(ratatui::style::Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
