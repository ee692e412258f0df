//! src/toggle/shared.rs
//!
//! Shared per-panel state: element id, content, visual state, and style.

use std::sync::{Arc, RwLock};

use super::style::{PanelStyle, VisualState};
use ratatui::style::Color;

/// The authoritative shared panel object referenced by the toggler and by
/// every render surface drawing it.
#[derive(Debug)]
pub struct PanelShared {
    /// Element id this panel was registered under ("hidden3").
    pub id: String,
    pub title: String,
    pub body: String,
    pub accent: Color,

    /// Explicit visual state driving toggle decisions.
    pub state: VisualState,
    pub style: PanelStyle,

    /// Bumped on every toggle; deferred actions carrying an older value are
    /// stale and must not be applied.
    pub generation: u64,
}

impl PanelShared {
    /// Construct a hidden `PanelShared`.
    pub fn new(id: &str, title: &str, body: &str, accent: Color) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            accent,
            state: VisualState::Hidden,
            style: PanelStyle::hidden(),
            generation: 0,
        }
    }
}

/// Alias: Arc<RwLock<PanelShared>>
pub type SharedPanel = Arc<RwLock<PanelShared>>;

/// Alias for a write guard.
pub type PanelGuard<'a> = std::sync::RwLockWriteGuard<'a, PanelShared>;

/// Wrap a `PanelShared` for sharing.
pub fn shared(panel: PanelShared) -> SharedPanel {
    Arc::new(RwLock::new(panel))
}
