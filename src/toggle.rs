//! src/toggle.rs
//!
//! Top-level `toggle` module exposing configuration, style, and toggler types.

pub mod config;
pub mod scheduler;
pub mod shared;
pub mod style;
pub mod toggler;

/// Re-exports
pub use config::TogglerConfig;
pub use scheduler::{Deferred, DeferredAction, DeferredQueue};
pub use shared::{PanelShared, SharedPanel};
pub use style::{Display, PanelStyle, VisualState};
pub use toggler::{Pair, PanelToggler};
