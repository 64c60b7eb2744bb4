//! Single-slot cancellable timer
//!
//! A `DelayedAction` owns at most one pending action together with the
//! instant it becomes due. Scheduling replaces whatever was pending, so a
//! new trigger always cancels the stale one. Nothing here sleeps: the owner
//! polls with the current instant on every animation tick.

use std::time::Duration;

use iced::time::Instant;

/// An action that fired, with the deadline it was scheduled for
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<A> {
    pub action: A,
    /// Scheduled deadline (not the instant the poll happened)
    pub due: Instant,
}

#[derive(Debug, Clone)]
struct Pending<A> {
    action: A,
    due: Instant,
}

/// Owned, restartable timer holding one pending action
#[derive(Debug, Clone)]
pub struct DelayedAction<A> {
    pending: Option<Pending<A>>,
}

impl<A> Default for DelayedAction<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> DelayedAction<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire at `due`, cancelling anything pending
    pub fn schedule_at(&mut self, action: A, due: Instant) {
        self.pending = Some(Pending { action, due });
    }

    /// Schedule `action` to fire `delay` after `from`
    pub fn schedule(&mut self, action: A, delay: Duration, from: Instant) {
        self.schedule_at(action, from + delay);
    }

    /// Cancel the pending action. Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending action if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<Fired<A>> {
        match &self.pending {
            Some(p) if p.due <= now => self.pending.take().map(|p| Fired {
                action: p.action,
                due: p.due,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_only_after_deadline() {
        let t0 = Instant::now();
        let mut timer = DelayedAction::new();
        timer.schedule("reveal", ms(100), t0);

        assert!(timer.poll(t0 + ms(99)).is_none());
        let fired = timer.poll(t0 + ms(100)).expect("due at 100ms");
        assert_eq!(fired.action, "reveal");
        assert_eq!(fired.due, t0 + ms(100));
        assert!(!timer.is_pending());
    }

    #[test]
    fn fires_once() {
        let t0 = Instant::now();
        let mut timer = DelayedAction::new();
        timer.schedule(1, ms(10), t0);

        assert!(timer.poll(t0 + ms(50)).is_some());
        assert!(timer.poll(t0 + ms(60)).is_none());
    }

    #[test]
    fn rescheduling_replaces_pending_action() {
        let t0 = Instant::now();
        let mut timer = DelayedAction::new();
        timer.schedule(1, ms(100), t0);
        timer.schedule(2, ms(100), t0 + ms(80));

        // The first deadline passes without firing anything
        assert!(timer.poll(t0 + ms(120)).is_none());
        assert_eq!(timer.poll(t0 + ms(180)).map(|f| f.action), Some(2));
    }

    #[test]
    fn cancel_drops_pending_action() {
        let t0 = Instant::now();
        let mut timer = DelayedAction::new();
        assert!(!timer.cancel());

        timer.schedule((), ms(5), t0);
        assert!(timer.cancel());
        assert!(timer.poll(t0 + ms(10)).is_none());
        assert_eq!(timer.deadline(), None);
    }
}
