//! src/toggle/toggler.rs
//!
//! The panel toggler: resolves button/panel pairs from the document once at
//! initialization, then drives each panel's style through show/hide
//! transitions on toggle requests.
//!
//! Show path: flip `display` to Block immediately, then a zero-delay deferred
//! action raises the opacity/scale endpoints to full, so the layout change
//! lands before the transition starts. Hide path: drop the scale endpoint to
//! zero immediately, then a deferred action removes the panel from layout
//! after the configured hide delay.
//!
//! Every toggle bumps the panel's generation, cancelling whatever deferred
//! action is still pending for it. Re-toggling mid-hide therefore revives the
//! panel instead of letting the stale finalizer blank it.

use std::time::{Duration, Instant};

use color_eyre::eyre::{Result, eyre};

use super::config::TogglerConfig;
use super::scheduler::{Deferred, DeferredAction, DeferredQueue};
use super::shared::{PanelGuard, SharedPanel};
use super::style::{Display, VisualState};
use crate::document::{ButtonElement, Document};

/// One resolved button/panel pair.
#[derive(Debug)]
pub struct Pair {
    pub index: usize,
    pub button: ButtonElement,
    pub panel: SharedPanel,
}

/// Owns the ordered pair collection and the deferred action queue.
#[derive(Debug)]
pub struct PanelToggler {
    pairs: Vec<Pair>,
    queue: DeferredQueue,
    config: TogglerConfig,
}

impl PanelToggler {
    /// Resolve every `more{i}` / `hidden{i}` pair from the document.
    ///
    /// Missing elements are reported up front, all of them at once, rather
    /// than failing at the first interaction.
    pub fn initialize(doc: &Document, config: TogglerConfig) -> Result<Self> {
        let mut pairs = Vec::with_capacity(config.pair_count);
        let mut missing: Vec<String> = Vec::new();

        for index in 0..config.pair_count {
            let button_id = config.button_id(index);
            let panel_id = config.panel_id(index);
            let button = doc.button(&button_id).cloned();
            let panel = doc.panel(&panel_id).cloned();

            if button.is_none() {
                missing.push(button_id);
            }
            if panel.is_none() {
                missing.push(panel_id);
            }
            if let (Some(button), Some(panel)) = (button, panel) {
                pairs.push(Pair {
                    index,
                    button,
                    panel,
                });
            }
        }

        if !missing.is_empty() {
            return Err(eyre!("missing document elements: {}", missing.join(", ")));
        }
        Ok(Self {
            pairs,
            queue: DeferredQueue::new(),
            config,
        })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn config(&self) -> &TogglerConfig {
        &self.config
    }

    /// Number of deferred actions still pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Toggle the panel paired with `index`.
    pub fn toggle(&mut self, index: usize, now: Instant) -> Result<()> {
        let pair = self
            .pairs
            .get(index)
            .ok_or_else(|| eyre!("no pair at index {index}"))?;
        let mut p: PanelGuard<'_> = pair.panel.write().unwrap();

        // Invalidate whatever deferred action is still pending for this panel.
        p.generation += 1;
        let generation = p.generation;

        match p.state {
            VisualState::Hidden | VisualState::Hiding => {
                p.style.display = Display::Block;
                p.state = VisualState::Showing;
                self.queue.schedule(Deferred {
                    due: now,
                    index,
                    generation,
                    action: DeferredAction::BeginShow,
                });
            }
            VisualState::Shown | VisualState::Showing => {
                p.style.begin_hide();
                p.state = VisualState::Hiding;
                self.queue.schedule(Deferred {
                    due: now + self.config.hide_delay,
                    index,
                    generation,
                    action: DeferredAction::FinalizeHide,
                });
            }
        }
        Ok(())
    }

    /// Apply every deferred action due at `now`, dropping stale ones.
    pub fn pump(&mut self, now: Instant) {
        for d in self.queue.drain_due(now) {
            let Some(pair) = self.pairs.get(d.index) else {
                continue;
            };
            let mut p = pair.panel.write().unwrap();
            if d.generation != p.generation {
                // cancelled by a later toggle
                continue;
            }
            match d.action {
                DeferredAction::BeginShow => p.style.begin_show(),
                DeferredAction::FinalizeHide => {
                    p.style.display = Display::None;
                    p.state = VisualState::Hidden;
                }
            }
        }
    }

    /// Advance every displayed panel's animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for pair in &self.pairs {
            let mut p = pair.panel.write().unwrap();
            if p.style.display != Display::Block {
                continue;
            }
            let settled = p.style.tick(dt, self.config.transition);
            if settled && p.state == VisualState::Showing {
                p.state = VisualState::Shown;
            }
        }
    }
}
