//! src/panels/status.rs
//!
//! Status panel: per-pair visual state and animated style values.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::toggle::VisualState;
use crate::toggle::shared::SharedPanel;
use crate::toggle::style::Display;

/// Read-only overview of every pair's state.
pub struct StatusPanel {
    pub panels: Vec<SharedPanel>,
    pub focused: usize,
}

impl StatusPanel {
    pub fn new(panels: Vec<SharedPanel>, focused: usize) -> Self {
        Self { panels, focused }
    }
}

impl crate::ui::Panel for StatusPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .panels
            .iter()
            .enumerate()
            .map(|(i, shared)| {
                let p = shared.read().unwrap();
                let state_style = match p.state {
                    VisualState::Hidden => Style::default().fg(Color::DarkGray),
                    VisualState::Shown => Style::default().fg(Color::Green),
                    VisualState::Showing | VisualState::Hiding => {
                        Style::default().fg(Color::Yellow)
                    }
                };
                let id_style = if i == self.focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let display = match p.style.display {
                    Display::Block => "block",
                    Display::None => "none",
                };
                Line::from(vec![
                    Span::styled(format!("{:<9}", p.id), id_style),
                    Span::styled(format!("{:<8}", p.state.label()), state_style),
                    Span::raw(format!(
                        "display={:<6} opacity={:.2} scale={:.2}",
                        display, p.style.current.opacity, p.style.current.scale
                    )),
                ])
            })
            .collect();

        let block = Block::default().title("State").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
