//! Opacity fades and staggered row entrances
//!
//! Thin wrappers over `iced::animation::Animation<bool>` that carry a
//! separate timing for each direction, since the panel fades in slowly after
//! a delay but disappears almost at once.

use std::time::Duration;

use iced::animation::{Animation, Easing};
use iced::time::Instant;

/// Timing of one fade direction
#[derive(Debug, Clone, Copy)]
pub struct FadeTiming {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl FadeTiming {
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing,
        }
    }

    pub const fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }

    /// Near-instant variant for reduced motion
    pub const fn instant(mut self) -> Self {
        self.duration = Duration::from_millis(1);
        self.delay = Duration::ZERO;
        self
    }
}

/// Collapsed pill: 100ms ease-out both ways
pub const PILL_FADE: FadeTiming = FadeTiming::new(100, Easing::EaseOut);
/// Expanded panel: waits for the container to grow, then fades in
pub const PANEL_FADE_IN: FadeTiming = FadeTiming::new(200, Easing::EaseIn).delayed(400);
pub const PANEL_FADE_OUT: FadeTiming = FadeTiming::new(100, Easing::EaseOut);
/// Panel title
pub const TITLE_FADE: FadeTiming = FadeTiming::new(200, Easing::EaseInOut);

/// A visibility flag with an animated opacity
#[derive(Debug, Clone)]
pub struct Fade {
    animation: Animation<bool>,
    show: FadeTiming,
    hide: FadeTiming,
}

impl Fade {
    pub fn new(visible: bool, show: FadeTiming, hide: FadeTiming) -> Self {
        Self {
            animation: Animation::new(visible)
                .duration(show.duration)
                .easing(show.easing),
            show,
            hide,
        }
    }

    /// Same timing in both directions
    pub fn symmetric(visible: bool, timing: FadeTiming) -> Self {
        Self::new(visible, timing, timing)
    }

    pub fn is_visible(&self) -> bool {
        self.animation.value()
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if self.animation.value() == visible {
            return;
        }
        let timing = if visible { self.show } else { self.hide };
        let current = std::mem::replace(&mut self.animation, Animation::new(visible));
        self.animation = current
            .duration(timing.duration)
            .delay(timing.delay)
            .easing(timing.easing)
            .go(visible, now);
    }

    /// Opacity in `0.0..=1.0`
    pub fn opacity(&self, now: Instant) -> f32 {
        self.animation.interpolate(0.0_f32, 1.0_f32, now)
    }

    /// Still worth drawing: visible, or fading out
    pub fn is_drawn(&self, now: Instant) -> bool {
        self.is_visible() || self.is_animating(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }
}

/// Per-row entrance animations that start one after another
#[derive(Debug, Clone)]
pub struct Stagger {
    rows: Vec<Animation<bool>>,
    timing: FadeTiming,
    step: Duration,
}

impl Stagger {
    pub fn new(timing: FadeTiming, step: Duration) -> Self {
        Self {
            rows: Vec::new(),
            timing,
            step,
        }
    }

    /// Suggestion rows: 400ms ease-out, first after 100ms, 100ms apart
    pub fn suggestion_rows() -> Self {
        Self::new(
            FadeTiming::new(400, Easing::EaseOut).delayed(100),
            Duration::from_millis(100),
        )
    }

    /// Mirrored rows: 200ms ease-out, 50ms apart
    pub fn mirrored_rows() -> Self {
        Self::new(
            FadeTiming::new(200, Easing::EaseOut),
            Duration::from_millis(50),
        )
    }

    /// Start the entrance of `count` rows at `now`
    pub fn restart(&mut self, count: usize, now: Instant) {
        self.rows = (0..count)
            .map(|i| {
                Animation::new(false)
                    .duration(self.timing.duration)
                    .delay(self.timing.delay + self.step * i as u32)
                    .easing(self.timing.easing)
                    .go(true, now)
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Entrance progress of row `index`; rows past the started set are shown
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        self.rows
            .get(index)
            .map(|a| a.interpolate(0.0_f32, 1.0_f32, now))
            .unwrap_or(1.0)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.rows.iter().any(|a| a.is_animating(now))
    }
}
