//! Debounced title visibility
//!
//! The panel title hides as soon as the query has text and comes back only
//! after the query has stayed empty for the whole reveal delay.

use std::time::Duration;

use iced::time::Instant;

use super::timer::DelayedAction;

/// Default delay before the title reappears
pub const TITLE_REVEAL_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct TitleVisibility {
    visible: bool,
    reveal: DelayedAction<()>,
    delay: Duration,
}

impl Default for TitleVisibility {
    fn default() -> Self {
        Self::new(TITLE_REVEAL_DELAY)
    }
}

impl TitleVisibility {
    pub fn new(delay: Duration) -> Self {
        Self {
            visible: true,
            reveal: DelayedAction::new(),
            delay,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.reveal.deadline()
    }

    /// Record an edit of the watched query.
    ///
    /// Every edit cancels the pending reveal. An edit that leaves the query
    /// empty schedules a fresh one.
    pub fn query_changed(&mut self, query: &str, now: Instant) {
        self.reveal.cancel();
        if query.is_empty() {
            self.reveal.schedule((), self.delay, now);
        } else {
            self.visible = false;
        }
    }

    /// Advance the timer. Returns true if the title became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reveal.poll(now).is_some() && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }

    /// Drop any pending reveal and show the title
    pub fn reset(&mut self) {
        self.reveal.cancel();
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn visible_initially() {
        let title = TitleVisibility::default();
        assert!(title.is_visible());
        assert_eq!(title.deadline(), None);
    }

    #[test]
    fn typing_hides_immediately() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::default();
        title.query_changed("c", t0);
        assert!(!title.is_visible());
        title.query_changed("cat", t0 + ms(50));
        assert!(!title.is_visible());
        assert_eq!(title.deadline(), None);
    }

    #[test]
    fn reappears_after_empty_for_full_delay() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::default();
        title.query_changed("cat", t0);
        title.query_changed("", t0 + ms(100));

        assert!(!title.tick(t0 + ms(1099)));
        assert!(!title.is_visible());
        assert!(title.tick(t0 + ms(1100)));
        assert!(title.is_visible());
    }

    #[test]
    fn typing_before_delay_cancels_reveal() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::default();
        title.query_changed("cat", t0);
        title.query_changed("", t0 + ms(100));
        title.query_changed("d", t0 + ms(600));

        title.tick(t0 + ms(5000));
        assert!(!title.is_visible());
    }

    #[test]
    fn clearing_again_restarts_delay() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::default();
        title.query_changed("a", t0);
        title.query_changed("", t0 + ms(100));
        title.query_changed("b", t0 + ms(900));
        title.query_changed("", t0 + ms(950));

        // 1000ms after the first clear is not enough anymore
        title.tick(t0 + ms(1100));
        assert!(!title.is_visible());
        title.tick(t0 + ms(1950));
        assert!(title.is_visible());
    }

    #[test]
    fn whitespace_counts_as_text() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::default();
        title.query_changed(" ", t0);
        title.tick(t0 + ms(2000));
        assert!(!title.is_visible());
    }

    #[test]
    fn custom_delay() {
        let t0 = Instant::now();
        let mut title = TitleVisibility::new(ms(250));
        title.query_changed("x", t0);
        title.query_changed("", t0);
        assert!(title.tick(t0 + ms(250)));
    }
}
