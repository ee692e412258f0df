//! src/panels/title.rs
//!
//! Header panel: app title plus an open/total pair summary.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel {
    pub title: String,
    pub open: usize,
    pub total: usize,
}

impl TitlePanel {
    pub fn new(title: &str, open: usize, total: usize) -> Self {
        Self {
            title: title.to_string(),
            open,
            total,
        }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {}/{} open", self.open, self.total),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
