//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod button;
pub mod hints;
pub mod status;
pub mod title;
pub mod volet;

pub use button::ButtonPanel;
pub use hints::HintsPanel;
pub use status::StatusPanel;
pub use title::TitlePanel;
pub use volet::VoletPanel;
