//! src/document.rs
//!
//! Id-addressed element registry: the host document the toggler resolves its
//! button/panel pairs from. Elements are registered before initialization and
//! never created or destroyed afterward.

use std::collections::HashMap;

use rand::Rng;
use ratatui::style::Color;

use crate::toggle::TogglerConfig;
use crate::toggle::shared::{PanelShared, SharedPanel, shared};

/// A clickable toggle control registered under an id.
#[derive(Clone, Debug)]
pub struct ButtonElement {
    pub id: String,
    pub label: String,
}

impl ButtonElement {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Registry of button and panel elements keyed by id.
#[derive(Default)]
pub struct Document {
    buttons: HashMap<String, ButtonElement>,
    panels: HashMap<String, SharedPanel>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            buttons: HashMap::new(),
            panels: HashMap::new(),
        }
    }

    pub fn insert_button(&mut self, button: ButtonElement) {
        self.buttons.insert(button.id.clone(), button);
    }

    pub fn insert_panel(&mut self, panel: PanelShared) {
        self.panels.insert(panel.id.clone(), shared(panel));
    }

    /// Look up a button by id.
    pub fn button(&self, id: &str) -> Option<&ButtonElement> {
        self.buttons.get(id)
    }

    /// Look up a panel by id.
    pub fn panel(&self, id: &str) -> Option<&SharedPanel> {
        self.panels.get(id)
    }

    /// Build a demo document following the `more{i}` / `hidden{i}` naming
    /// convention for every index the config covers.
    pub fn demo(cfg: &TogglerConfig) -> Self {
        const ACCENTS: [Color; 6] = [
            Color::Cyan,
            Color::Magenta,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Red,
        ];

        let mut rng = rand::rng();
        let mut doc = Document::new();
        for i in 0..cfg.pair_count {
            let button_id = cfg.button_id(i);
            let panel_id = cfg.panel_id(i);
            doc.insert_button(ButtonElement::new(&button_id, &format!("more {i}")));

            let accent = ACCENTS[rng.random_range(0..ACCENTS.len())];
            doc.insert_panel(PanelShared::new(
                &panel_id,
                &format!("Section {i}"),
                &format!(
                    "Collapsible content for section {i}. Toggle it again to fold it away."
                ),
                accent,
            ));
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_registers_every_conventional_id() {
        let cfg = TogglerConfig::default();
        let doc = Document::demo(&cfg);
        for i in 0..cfg.pair_count {
            assert!(doc.button(&cfg.button_id(i)).is_some());
            assert!(doc.panel(&cfg.panel_id(i)).is_some());
        }
        assert!(doc.button("more13").is_none());
        assert!(doc.panel("hidden13").is_none());
    }
}
