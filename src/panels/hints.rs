//! src/panels/hints.rs
//!
//! Key-hint panel: the controls block under the status sidebar. Each hint is
//! a reversed key cap followed by a short action label.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// One line of (key, action) hints.
pub struct HintsPanel {
    pub hints: Vec<(String, String)>,
}

impl HintsPanel {
    pub fn new(hints: &[(&str, &str)]) -> Self {
        Self {
            hints: hints
                .iter()
                .map(|(key, action)| (key.to_string(), action.to_string()))
                .collect(),
        }
    }
}

impl crate::ui::Panel for HintsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::REVERSED);
        let action_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (key, action) in &self.hints {
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(format!(" {action}  "), action_style));
        }

        let p = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
