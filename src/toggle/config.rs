//! src/toggle/config.rs
//!
//! Configuration values for panel toggling and transition timing.
//!
//! Centralized parameters for pair count, hide delay, and the id naming
//! convention binding buttons to panels.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct TogglerConfig {
    /// Number of button/panel pairs resolved at initialization.
    pub pair_count: usize,

    /// Delay between starting a scale-down and removing the panel from layout.
    pub hide_delay: Duration,

    /// Length of the opacity/scale animation toward endpoint values.
    pub transition: Duration,

    /// Id prefix for toggle buttons ("more" + index).
    pub button_prefix: String,

    /// Id prefix for panels ("hidden" + index).
    pub panel_prefix: String,
}

impl TogglerConfig {
    /// Create a new `TogglerConfig` with the conventional id prefixes.
    pub fn new(pair_count: usize, hide_delay: Duration, transition: Duration) -> Self {
        Self {
            pair_count,
            hide_delay,
            transition,
            button_prefix: "more".to_string(),
            panel_prefix: "hidden".to_string(),
        }
    }

    /// Button id for a pair index, e.g. "more3".
    pub fn button_id(&self, index: usize) -> String {
        format!("{}{}", self.button_prefix, index)
    }

    /// Panel id for a pair index, e.g. "hidden3".
    pub fn panel_id(&self, index: usize) -> String {
        format!("{}{}", self.panel_prefix, index)
    }
}

impl Default for TogglerConfig {
    fn default() -> Self {
        Self::new(
            13,
            Duration::from_millis(700),
            Duration::from_millis(700),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_source_layout() {
        let cfg = TogglerConfig::default();
        assert_eq!(cfg.pair_count, 13);
        assert_eq!(cfg.hide_delay, Duration::from_millis(700));
        assert_eq!(cfg.button_id(0), "more0");
        assert_eq!(cfg.panel_id(12), "hidden12");
    }
}
