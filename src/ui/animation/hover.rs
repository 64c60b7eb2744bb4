//! Hover highlights for rows and buttons inside the panel
//!
//! The pointer can only be over one element at a time, so two slots are
//! enough: the element gaining the highlight and the one losing it.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

fn rising() -> Animated<f32> {
    let mut anim = Animated::transition(0.0, hover_easing());
    anim.update(1.0.into());
    anim
}

fn falling(from: f32) -> Animated<f32> {
    let mut anim = Animated::transition(from, hover_easing());
    anim.update(0.0.into());
    anim
}

#[derive(Debug)]
pub struct HoverAnimations<K: PartialEq + Clone> {
    entering: Option<(K, Animated<f32>)>,
    leaving: Option<(K, Animated<f32>)>,
}

impl<K: PartialEq + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }

    pub fn hovered(&self) -> Option<&K> {
        self.entering.as_ref().map(|(key, _)| key)
    }

    /// Move the highlight to `key`, or drop it with `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.hovered() == key.as_ref() {
            return;
        }
        if let Some((old, anim)) = self.entering.take() {
            self.leaving = Some((old, falling(*anim.value())));
        }
        self.entering = key.map(|k| (k, rising()));
    }

    /// Highlight strength of `key` in `0.0..=1.0`
    pub fn progress(&self, key: &K) -> f32 {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|(k, _)| k == key)
            .map(|(_, anim)| *anim.value())
            .unwrap_or(0.0)
    }

    pub fn is_animating(&self) -> bool {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .any(|(_, anim)| anim.is_animating())
    }

    pub fn tick(&mut self, now: Instant) {
        for (_, anim) in [&mut self.entering, &mut self.leaving].into_iter().flatten() {
            anim.tick(now);
        }
        if self
            .leaving
            .as_ref()
            .is_some_and(|(_, anim)| !anim.is_animating())
        {
            self.leaving = None;
        }
    }

    /// Forget every highlight, e.g. when the rows are replaced
    pub fn clear(&mut self) {
        self.entering = None;
        self.leaving = None;
    }
}
