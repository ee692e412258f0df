//! src/toggle/style.rs
//!
//! Panel visual style: layout display switch, endpoint values written by the
//! toggler, and animated current values advanced each frame.
//!
//! The toggler only ever writes endpoints; `tick` moves the current values
//! toward them over the configured transition length. This mirrors a style
//! system where transitions are declared once and the code just assigns
//! endpoint properties.

use std::time::Duration;

/// Whether a panel participates in layout at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

/// Explicit visual state of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualState {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

impl VisualState {
    /// Short label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            VisualState::Hidden => "Hidden",
            VisualState::Showing => "Showing",
            VisualState::Shown => "Shown",
            VisualState::Hiding => "Hiding",
        }
    }
}

/// Opacity/scale value pair, both in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleValues {
    pub opacity: f64,
    pub scale: f64,
}

impl StyleValues {
    pub const ZERO: StyleValues = StyleValues {
        opacity: 0.0,
        scale: 0.0,
    };

    pub const FULL: StyleValues = StyleValues {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Animatable panel style.
#[derive(Clone, Copy, Debug)]
pub struct PanelStyle {
    /// Layout on/off switch, flipped immediately by the toggler.
    pub display: Display,

    /// Endpoint values the current style animates toward.
    pub target: StyleValues,

    /// Current animated values, advanced by `tick`.
    pub current: StyleValues,
}

impl PanelStyle {
    /// Initial style: removed from layout, fully collapsed.
    pub fn hidden() -> Self {
        Self {
            display: Display::None,
            target: StyleValues::ZERO,
            current: StyleValues::ZERO,
        }
    }

    /// Endpoint assignment performed by the deferred show callback:
    /// opacity 1, scale 1.
    pub fn begin_show(&mut self) {
        self.target = StyleValues::FULL;
    }

    /// Endpoint assignment performed synchronously on hide: scale 0.
    /// Opacity is left untouched, matching the original toggle.
    pub fn begin_hide(&mut self) {
        self.target.scale = 0.0;
    }

    /// True when the current values have reached the endpoints.
    pub fn settled(&self) -> bool {
        (self.current.opacity - self.target.opacity).abs() < f64::EPSILON
            && (self.current.scale - self.target.scale).abs() < f64::EPSILON
    }

    /// Advance current values toward the endpoints by `dt` out of a full
    /// `transition` length. Returns true once the style has settled.
    pub fn tick(&mut self, dt: Duration, transition: Duration) -> bool {
        if transition.is_zero() {
            self.current = self.target;
            return true;
        }
        let step = dt.as_secs_f64() / transition.as_secs_f64();
        self.current.opacity = step_toward(self.current.opacity, self.target.opacity, step);
        self.current.scale = step_toward(self.current.scale, self.target.scale, step);
        self.settled()
    }
}

/// Move `from` toward `to` by at most `step`, clamping at the endpoint.
fn step_toward(from: f64, to: f64, step: f64) -> f64 {
    let delta = to - from;
    if delta.abs() <= step {
        to
    } else if delta > 0.0 {
        from + step
    } else {
        from - step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reaches_endpoints_within_transition() {
        let mut style = PanelStyle::hidden();
        style.display = Display::Block;
        style.begin_show();
        assert!(!style.settled());

        let transition = Duration::from_millis(700);
        let frame = Duration::from_millis(100);
        for _ in 0..7 {
            style.tick(frame, transition);
        }
        assert!(style.settled());
        assert_eq!(style.current, StyleValues::FULL);
    }

    #[test]
    fn hide_scales_down_without_touching_opacity() {
        let mut style = PanelStyle {
            display: Display::Block,
            target: StyleValues::FULL,
            current: StyleValues::FULL,
        };
        style.begin_hide();
        assert_eq!(style.target.opacity, 1.0);
        assert_eq!(style.target.scale, 0.0);

        assert!(style.tick(Duration::from_millis(700), Duration::from_millis(700)));
        assert_eq!(style.current.scale, 0.0);
        assert_eq!(style.current.opacity, 1.0);
    }

    #[test]
    fn zero_transition_snaps() {
        let mut style = PanelStyle::hidden();
        style.begin_show();
        assert!(style.tick(Duration::from_millis(1), Duration::ZERO));
        assert_eq!(style.current, StyleValues::FULL);
    }

    #[test]
    fn partial_tick_is_between_endpoints() {
        let mut style = PanelStyle::hidden();
        style.begin_show();
        style.tick(Duration::from_millis(350), Duration::from_millis(700));
        assert!(style.current.scale > 0.0 && style.current.scale < 1.0);
        assert!(!style.settled());
    }
}
