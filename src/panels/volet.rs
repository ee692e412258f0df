//! src/panels/volet.rs
//!
//! Volet panel: renders one collapsible panel's content, dimmed by its
//! current opacity. Scale drives the slot height (computed by the tree
//! builder), so this panel only handles what fits in the area it is given.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::toggle::shared::SharedPanel;
use crate::toggle::style::Display;

/// Render surface for a shared panel.
pub struct VoletPanel {
    pub shared: SharedPanel,
}

impl VoletPanel {
    pub fn new(shared: SharedPanel) -> Self {
        Self { shared }
    }

    /// Map the animated opacity onto terminal-capable dimming.
    fn text_style(opacity: f64, accent: Color) -> (Style, Style) {
        let border = if opacity < 0.5 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(accent)
        };
        let body = if opacity < 0.34 {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else if opacity < 0.67 {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        (border, body)
    }
}

impl crate::ui::Panel for VoletPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = self.shared.read().unwrap();
        if p.style.display != Display::Block || area.height == 0 {
            return;
        }

        let (border_style, body_style) = Self::text_style(p.style.current.opacity, p.accent);
        let block = Block::default()
            .title(p.title.clone())
            .borders(Borders::ALL)
            .border_style(border_style);
        let par = Paragraph::new(p.body.clone())
            .style(body_style)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(par, area);
    }
}
