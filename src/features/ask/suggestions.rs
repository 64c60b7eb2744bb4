//! Static suggestion sets and the "More" swap
//!
//! The list is always replaced wholesale. With the staged strategy the swap
//! runs through a short loading phase so the old rows can fade out before
//! the new ones slide in:
//!
//! ```text
//! More ─▶ loading ─(hide)─▶ install set ─(reveal)─▶ loading cleared
//! ```

use std::time::Duration;

use iced::time::Instant;
use serde::{Deserialize, Serialize};

use super::timer::DelayedAction;

/// Time the old rows get to fade out
pub const SWAP_HIDE: Duration = Duration::from_millis(300);
/// Time the new rows get to fade in before loading is cleared
pub const SWAP_REVEAL: Duration = Duration::from_millis(500);

pub const DEFAULT_SET: [&str; 3] = ["Top Stories", "Breaking News", "Generate a new Wordle"];
pub const MORE_SET: [&str; 3] = ["Today's Headlines", "World News", "Business Updates"];

/// Icon shown in front of a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionIcon {
    #[default]
    Sparkle,
    Zap,
    /// Literal text rendered in place of an image
    Glyph(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub icon: SuggestionIcon,
    pub text: String,
}

impl Suggestion {
    pub fn sparkle(text: impl Into<String>) -> Self {
        Self {
            icon: SuggestionIcon::Sparkle,
            text: text.into(),
        }
    }
}

/// Build a sparkle-decorated set from plain strings
pub fn sparkle_set(texts: &[&str]) -> Vec<Suggestion> {
    texts.iter().map(|t| Suggestion::sparkle(*t)).collect()
}

/// How "More" installs the replacement set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwapStrategy {
    /// Replace immediately
    Direct,
    /// Hide, install, reveal
    #[default]
    Staged,
}

#[derive(Debug, Clone, PartialEq)]
enum SwapStep {
    Install(Vec<Suggestion>),
    FinishLoading,
}

/// The suggestion rows under the search input
#[derive(Debug, Clone)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    initial: Vec<Suggestion>,
    more: Vec<Suggestion>,
    loading: bool,
    /// Bumped every time a set is installed; the view restarts row entrances on change
    revision: u64,
    strategy: SwapStrategy,
    swap: DelayedAction<SwapStep>,
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new(
            sparkle_set(&DEFAULT_SET),
            sparkle_set(&MORE_SET),
            SwapStrategy::default(),
        )
    }
}

impl SuggestionList {
    pub fn new(initial: Vec<Suggestion>, more: Vec<Suggestion>, strategy: SwapStrategy) -> Self {
        Self {
            items: initial.clone(),
            initial,
            more,
            loading: false,
            revision: 0,
            strategy,
            swap: DelayedAction::new(),
        }
    }

    /// Every installed suggestion, including while the list is hidden
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    /// Rows to render; empty while a staged swap is hiding the list
    pub fn visible(&self) -> &[Suggestion] {
        if self.loading { &[] } else { self.items() }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.swap.deadline()
    }

    /// Swap in the "More" set.
    ///
    /// A staged swap that is already running is restarted from the hide
    /// phase, so repeated presses never stack sets.
    pub fn load_more(&mut self, now: Instant) {
        let next = self.more.clone();
        match self.strategy {
            SwapStrategy::Direct => {
                self.swap.cancel();
                self.loading = false;
                self.install(next);
            }
            SwapStrategy::Staged => {
                if self.swap.is_pending() {
                    tracing::debug!("Restarting staged suggestion swap");
                }
                self.loading = true;
                self.swap.schedule(SwapStep::Install(next), SWAP_HIDE, now);
            }
        }
    }

    /// Advance a staged swap. Returns true if the visible rows changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(fired) = self.swap.poll(now) {
            match fired.action {
                SwapStep::Install(set) => {
                    self.install(set);
                    self.swap
                        .schedule(SwapStep::FinishLoading, SWAP_REVEAL, fired.due);
                }
                SwapStep::FinishLoading => {
                    self.loading = false;
                    changed = true;
                }
            }
        }
        changed
    }

    /// Cancel any swap and put the initial set back
    pub fn reset(&mut self) {
        self.swap.cancel();
        self.loading = false;
        if self.items != self.initial {
            let initial = self.initial.clone();
            self.install(initial);
        }
    }

    fn install(&mut self, set: Vec<Suggestion>) {
        self.items = set;
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(
            "Installed {} suggestions (revision {})",
            self.items.len(),
            self.revision
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn texts(list: &[Suggestion]) -> Vec<&str> {
        list.iter().map(|s| s.text.as_str()).collect()
    }

    fn list(strategy: SwapStrategy) -> SuggestionList {
        SuggestionList::new(sparkle_set(&DEFAULT_SET), sparkle_set(&MORE_SET), strategy)
    }

    #[test]
    fn default_set() {
        let list = SuggestionList::default();
        assert_eq!(
            texts(list.visible()),
            vec!["Top Stories", "Breaking News", "Generate a new Wordle"]
        );
        assert!(list.items().iter().all(|s| s.icon == SuggestionIcon::Sparkle));
        assert!(!list.is_loading());
    }

    #[test]
    fn direct_swap_is_immediate() {
        let mut list = list(SwapStrategy::Direct);
        list.load_more(Instant::now());
        assert_eq!(texts(list.visible()), MORE_SET.to_vec());
        assert_eq!(list.deadline(), None);
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn direct_swap_twice_does_not_stack() {
        let mut list = list(SwapStrategy::Direct);
        let t0 = Instant::now();
        list.load_more(t0);
        list.load_more(t0);
        assert_eq!(texts(list.visible()), MORE_SET.to_vec());
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn staged_swap_phases() {
        let t0 = Instant::now();
        let mut list = list(SwapStrategy::Staged);
        list.load_more(t0);

        assert!(list.is_loading());
        assert!(list.visible().is_empty());
        assert_eq!(texts(list.items()), DEFAULT_SET.to_vec());

        list.tick(t0 + ms(300));
        assert_eq!(texts(list.items()), MORE_SET.to_vec());
        assert!(list.is_loading());

        assert!(list.tick(t0 + ms(800)));
        assert!(!list.is_loading());
        assert_eq!(texts(list.visible()), MORE_SET.to_vec());
        assert_eq!(list.deadline(), None);
    }

    #[test]
    fn staged_swap_twice_does_not_stack() {
        let t0 = Instant::now();
        let mut list = list(SwapStrategy::Staged);
        list.load_more(t0);
        list.load_more(t0 + ms(100));

        list.tick(t0 + ms(2000));
        assert_eq!(texts(list.visible()), MORE_SET.to_vec());
        assert_eq!(list.revision(), 1);
    }

    #[test]
    fn second_press_restarts_hide_phase() {
        let t0 = Instant::now();
        let mut list = list(SwapStrategy::Staged);
        list.load_more(t0);
        list.load_more(t0 + ms(200));

        // The first install deadline was cancelled
        list.tick(t0 + ms(300));
        assert_eq!(texts(list.items()), DEFAULT_SET.to_vec());
        list.tick(t0 + ms(500));
        assert_eq!(texts(list.items()), MORE_SET.to_vec());
    }

    #[test]
    fn press_after_completed_swap_reinstalls_same_set() {
        let t0 = Instant::now();
        let mut list = list(SwapStrategy::Staged);
        list.load_more(t0);
        list.tick(t0 + ms(800));
        list.load_more(t0 + ms(900));
        list.tick(t0 + ms(1700));

        assert_eq!(texts(list.visible()), MORE_SET.to_vec());
        assert_eq!(list.revision(), 2);
    }

    #[test]
    fn reset_restores_initial_set() {
        let t0 = Instant::now();
        let mut list = list(SwapStrategy::Staged);
        list.load_more(t0);
        list.tick(t0 + ms(300));
        list.reset();

        assert_eq!(list.deadline(), None);
        assert!(!list.is_loading());
        assert_eq!(texts(list.visible()), DEFAULT_SET.to_vec());
    }

    #[test]
    fn suggestion_deserializes_without_icon() {
        let s: Suggestion = serde_json::from_str(r#"{"text":"World News"}"#).unwrap();
        assert_eq!(s, Suggestion::sparkle("World News"));
    }

    #[test]
    fn glyph_icon_round_trips() {
        let s = Suggestion {
            icon: SuggestionIcon::Glyph("★".to_string()),
            text: "Stars".to_string(),
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
