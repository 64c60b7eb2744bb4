//! Ask widget state
//!
//! Everything the widget remembers lives in [`AskWidget`]: the shell state
//! machine, the query, the debounced title flag and the suggestion rows.
//! None of it depends on the UI toolkit; the app layer feeds it events and
//! the current instant and renders what it exposes.

pub mod mirror;
pub mod shell;
pub mod suggestions;
pub mod timer;
pub mod title;

use std::time::Duration;

use iced::time::Instant;

pub use mirror::{MirroredSuggestion, mirror};
pub use shell::{ShellEvent, ShellTimings, Transition, WidgetShell, WidgetState};
pub use suggestions::{Suggestion, SuggestionIcon, SuggestionList, SwapStrategy};
pub use title::TitleVisibility;

/// Construction parameters, normally derived from settings
#[derive(Debug, Clone)]
pub struct AskConfig {
    pub timings: ShellTimings,
    pub title_delay: Duration,
    pub swap: SwapStrategy,
    pub initial: Vec<Suggestion>,
    pub more: Vec<Suggestion>,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            timings: ShellTimings::default(),
            title_delay: title::TITLE_REVEAL_DELAY,
            swap: SwapStrategy::default(),
            initial: suggestions::sparkle_set(&suggestions::DEFAULT_SET),
            more: suggestions::sparkle_set(&suggestions::MORE_SET),
        }
    }
}

/// What changed during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub transition: Option<Transition>,
    pub title_revealed: bool,
    pub suggestions_changed: bool,
}

#[derive(Debug, Clone)]
pub struct AskWidget {
    shell: WidgetShell,
    query: String,
    title: TitleVisibility,
    suggestions: SuggestionList,
}

impl Default for AskWidget {
    fn default() -> Self {
        Self::new(AskConfig::default())
    }
}

impl AskWidget {
    pub fn new(config: AskConfig) -> Self {
        Self {
            shell: WidgetShell::new(config.timings),
            query: String::new(),
            title: TitleVisibility::new(config.title_delay),
            suggestions: SuggestionList::new(config.initial, config.more, config.swap),
        }
    }

    pub fn shell(&self) -> &WidgetShell {
        &self.shell
    }

    pub fn state(&self) -> WidgetState {
        self.shell.state()
    }

    pub fn is_animating(&self) -> bool {
        self.shell.is_animating()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_title(&self) -> bool {
        self.title.is_visible()
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// Mirrored entries for the current query
    pub fn mirrored(&self) -> Vec<MirroredSuggestion> {
        mirror(&self.query)
    }

    /// Feed a trigger into the shell state machine
    pub fn handle(&mut self, event: ShellEvent, now: Instant) -> Option<Transition> {
        let transition = self.shell.handle(event, now);
        if let Some(t) = transition {
            tracing::debug!("Widget {:?} -> {:?} ({:?})", t.from, t.to, event);
        }
        transition
    }

    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.title.query_changed(&self.query, now);
    }

    /// The query to hand to the submit hook, or `None` when it is blank
    pub fn submission(&self) -> Option<&str> {
        if self.query.trim().is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// Copy a picked suggestion into the query and return the submission
    pub fn pick(&mut self, text: &str, now: Instant) -> Option<&str> {
        self.set_query(text, now);
        self.submission()
    }

    pub fn load_more(&mut self, now: Instant) {
        self.suggestions.load_more(now);
    }

    /// True while any timer is waiting to fire
    pub fn has_pending_timers(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Earliest pending deadline across all timers
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.shell.deadline(),
            self.title.deadline(),
            self.suggestions.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Fire everything due at `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let transition = self.shell.tick(now);
        if let Some(t) = transition {
            tracing::debug!("Widget {:?} -> {:?}", t.from, t.to);
        }
        TickOutcome {
            transition,
            title_revealed: self.title.tick(now),
            suggestions_changed: self.suggestions.tick(now),
        }
    }

    /// Return to the freshly mounted state, cancelling every timer
    pub fn reset(&mut self) {
        self.shell.reset();
        self.title.reset();
        self.suggestions.reset();
        self.query.clear();
    }
}
