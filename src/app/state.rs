// src/app/state.rs
//! Application state definitions

use std::sync::Arc;

use iced::keyboard::Modifiers;
use iced::time::Instant;
use iced::{Point, Size};

use crate::app::message::HoverId;
use crate::features::ask::AskWidget;
use crate::features::{SearchHooks, Settings};
use crate::ui::animation::fade::{self, Fade, FadeTiming, Stagger};
use crate::ui::animation::{HoverAnimations, ShellGeometry};

/// Initial window size
pub const WINDOW_SIZE: Size = Size::new(800.0, 600.0);

/// Main application state
pub struct App {
    /// Settings, host hooks and window tracking
    pub core: CoreState,
    /// Widget state machine plus everything that animates it
    pub ui: UiState,
}

pub struct CoreState {
    pub settings: Settings,
    pub hooks: Arc<dyn SearchHooks>,
    pub window_size: Size,
    /// Last cursor position reported by the window
    pub cursor: Option<Point>,
    /// Modifiers currently held, as last reported by the keyboard
    pub modifiers: Modifiers,
}

impl CoreState {
    pub fn new(settings: Settings, hooks: Arc<dyn SearchHooks>) -> Self {
        Self {
            settings,
            hooks,
            window_size: WINDOW_SIZE,
            cursor: None,
            modifiers: Modifiers::default(),
        }
    }
}

/// What the suggestion rows were last started for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct RowsKey {
    panel_visible: bool,
    revision: u64,
    loading: bool,
}

pub struct UiState {
    pub ask: AskWidget,
    pub geometry: ShellGeometry,
    pub pill_fade: Fade,
    pub panel_fade: Fade,
    pub title_fade: Fade,
    pub rows: Stagger,
    pub mirrored_rows: Stagger,
    pub hover: HoverAnimations<HoverId>,
    /// Instant of the latest update; the view renders against it
    pub now: Instant,
    reduced_motion: bool,
    rows_key: RowsKey,
    mirrored_shown: bool,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        let reduced_motion = settings.display.reduced_motion;
        let timing = |t: FadeTiming| if reduced_motion { t.instant() } else { t };
        let ask = AskWidget::new(settings.to_ask_config());
        Self {
            pill_fade: Fade::symmetric(true, timing(fade::PILL_FADE)),
            panel_fade: Fade::new(
                false,
                timing(fade::PANEL_FADE_IN),
                timing(fade::PANEL_FADE_OUT),
            ),
            title_fade: Fade::symmetric(ask.show_title(), timing(fade::TITLE_FADE)),
            ask,
            geometry: ShellGeometry::new(),
            rows: Stagger::suggestion_rows(),
            mirrored_rows: Stagger::mirrored_rows(),
            hover: HoverAnimations::new(),
            now: Instant::now(),
            reduced_motion,
            rows_key: RowsKey::default(),
            mirrored_shown: false,
        }
    }

    /// True while anything needs frames: pending timers or running animations
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.ask.is_animating()
            || self.ask.has_pending_timers()
            || self.geometry.is_animating()
            || self.pill_fade.is_animating(now)
            || self.panel_fade.is_animating(now)
            || self.title_fade.is_animating(now)
            || self.rows.is_animating(now)
            || self.mirrored_rows.is_animating(now)
            || self.hover.is_animating()
    }

    /// Fire due timers and advance every animation to `now`
    pub fn tick(&mut self, now: Instant) {
        let outcome = self.ask.tick(now);
        if outcome.transition.is_some() || outcome.title_revealed || outcome.suggestions_changed {
            tracing::trace!("Widget timers fired: {:?}", outcome);
        }
        self.geometry.tick(now);
        self.hover.tick(now);
        self.sync(now);
    }

    /// Tear the widget down: cancel every timer and settle back to the pill
    pub fn reset(&mut self, now: Instant) {
        self.ask.reset();
        self.hover.clear();
        self.sync(now);
    }

    /// Point the animations at the widget's current flags
    pub fn sync(&mut self, now: Instant) {
        self.now = now;
        let shell = self.ask.shell();
        let show_collapsed = shell.show_collapsed();
        let show_expanded = shell.show_expanded();
        let geometry_expanded = shell.geometry_expanded();

        self.pill_fade.set_visible(show_collapsed, now);
        self.panel_fade.set_visible(show_expanded, now);
        self.geometry
            .set_expanded(geometry_expanded, now, self.reduced_motion);
        self.title_fade.set_visible(self.ask.show_title(), now);

        let suggestions = self.ask.suggestions();
        let key = RowsKey {
            panel_visible: show_expanded,
            revision: suggestions.revision(),
            loading: suggestions.is_loading(),
        };
        if key != self.rows_key {
            self.rows_key = key;
            let count = suggestions.visible().len();
            if show_expanded && count > 0 {
                self.rows.restart(count, now);
            } else {
                self.rows.clear();
            }
            self.hover.clear();
        }

        let mirrored = self.ask.mirrored();
        if mirrored.is_empty() {
            self.mirrored_shown = false;
            self.mirrored_rows.clear();
        } else if !self.mirrored_shown {
            self.mirrored_shown = true;
            self.mirrored_rows.restart(mirrored.len(), now);
        }
    }
}
