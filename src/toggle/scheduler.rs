//! src/toggle/scheduler.rs
//!
//! Deferred action queue: the cancellable replacement for fire-and-forget
//! timers. Actions are drained by the frame loop once their deadline passes,
//! in the order they were scheduled. Cancellation is by generation: a toggle
//! bumps its panel's generation, and a drained action whose generation no
//! longer matches is dropped instead of applied.

use std::time::Instant;

/// What a deferred action does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Set opacity/scale endpoints to full, starting the show transition.
    /// Scheduled with a zero delay so the display flip lands first.
    BeginShow,

    /// Remove the panel from layout after the hide delay.
    FinalizeHide,
}

/// One scheduled action against a pair index.
#[derive(Clone, Copy, Debug)]
pub struct Deferred {
    pub due: Instant,
    pub index: usize,
    pub generation: u64,
    pub action: DeferredAction,
}

/// FIFO queue of deferred actions.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    entries: Vec<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an action; scheduling order is preserved across drains.
    pub fn schedule(&mut self, deferred: Deferred) {
        self.entries.push(deferred);
    }

    /// Remove and return every action due at `now`, in scheduled order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<Deferred> {
        let mut due = Vec::new();
        self.entries.retain(|d| {
            if d.due <= now {
                due.push(*d);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(due: Instant, index: usize, action: DeferredAction) -> Deferred {
        Deferred {
            due,
            index,
            generation: 0,
            action,
        }
    }

    #[test]
    fn drain_returns_due_entries_in_scheduled_order() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(entry(t0, 2, DeferredAction::BeginShow));
        queue.schedule(entry(t0, 0, DeferredAction::FinalizeHide));
        queue.schedule(entry(t0 + Duration::from_millis(700), 1, DeferredAction::FinalizeHide));

        let due = queue.drain_due(t0);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].index, 2);
        assert_eq!(due[1].index, 0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn future_entries_stay_queued_until_deadline() {
        let t0 = Instant::now();
        let mut queue = DeferredQueue::new();
        queue.schedule(entry(t0 + Duration::from_millis(700), 0, DeferredAction::FinalizeHide));

        assert!(queue.drain_due(t0 + Duration::from_millis(699)).is_empty());
        let due = queue.drain_due(t0 + Duration::from_millis(700));
        assert_eq!(due.len(), 1);
        assert!(queue.is_empty());
    }
}
