//! src/panels/button.rs
//!
//! Toggle button row; `highlighted` marks the keyboard-focused pair.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::document::ButtonElement;
use crate::toggle::VisualState;

pub struct ButtonPanel {
    pub button: ButtonElement,
    pub state: VisualState,
    pub highlighted: bool,
}

impl ButtonPanel {
    pub fn new(button: ButtonElement, state: VisualState) -> Self {
        Self {
            button,
            state,
            highlighted: false,
        }
    }
}

impl crate::ui::Panel for ButtonPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let marker = match self.state {
            VisualState::Hidden => "+",
            VisualState::Shown => "-",
            VisualState::Showing | VisualState::Hiding => "~",
        };
        let mut label_style = Style::default().add_modifier(Modifier::BOLD);
        if self.highlighted {
            label_style = label_style.fg(Color::Yellow).add_modifier(Modifier::REVERSED);
        }
        let line = Line::from(vec![
            Span::styled(format!("[{marker}] "), Style::default().fg(Color::DarkGray)),
            Span::styled(self.button.label.clone(), label_style),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
