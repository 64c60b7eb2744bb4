//! Animated container geometry of the Ask widget
//!
//! Width, height and both corner radii follow the shell's geometry flag
//! with the same spring. The outer radius belongs to the 1px gradient ring,
//! the inner radius to the dark surface inside it.

use iced::time::Instant;
use iced::{Point, Rectangle, Size};

use super::spring::{Spring, SpringParams};

/// Target dimensions for one geometry state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryTarget {
    pub width: f32,
    pub height: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

pub const COLLAPSED: GeometryTarget = GeometryTarget {
    width: 101.18,
    height: 49.0,
    outer_radius: 41.0,
    inner_radius: 40.0,
};

pub const EXPANDED: GeometryTarget = GeometryTarget {
    width: 346.0,
    height: 370.0,
    outer_radius: 30.0,
    inner_radius: 29.0,
};

/// Width of the gradient ring drawn around the surface
pub const RING_WIDTH: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct ShellGeometry {
    width: Spring,
    height: Spring,
    outer_radius: Spring,
    inner_radius: Spring,
    expanded: bool,
    last_tick: Option<Instant>,
}

impl Default for ShellGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellGeometry {
    pub fn new() -> Self {
        let spring = |v: f32| Spring::new(v as f64, SpringParams::GEOMETRY);
        Self {
            width: spring(COLLAPSED.width),
            height: spring(COLLAPSED.height),
            outer_radius: spring(COLLAPSED.outer_radius),
            inner_radius: spring(COLLAPSED.inner_radius),
            expanded: false,
            last_tick: None,
        }
    }

    /// Retarget all springs. With `instant` set they jump instead of animating.
    pub fn set_expanded(&mut self, expanded: bool, now: Instant, instant: bool) {
        if self.expanded == expanded {
            return;
        }
        self.expanded = expanded;
        let target = if expanded { EXPANDED } else { COLLAPSED };
        let pairs = [
            (&mut self.width, target.width),
            (&mut self.height, target.height),
            (&mut self.outer_radius, target.outer_radius),
            (&mut self.inner_radius, target.inner_radius),
        ];
        for (spring, value) in pairs {
            if instant {
                spring.set_position(value as f64);
            } else {
                spring.set_target(value as f64);
            }
        }
        self.last_tick = Some(now);
    }

    /// Advance the springs to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(last) = self.last_tick else {
            return;
        };
        let dt = now.saturating_duration_since(last).as_secs_f64();
        self.last_tick = Some(now);
        for spring in [
            &mut self.width,
            &mut self.height,
            &mut self.outer_radius,
            &mut self.inner_radius,
        ] {
            spring.update(dt);
        }
        if !self.is_animating() {
            self.last_tick = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        ![
            &self.width,
            &self.height,
            &self.outer_radius,
            &self.inner_radius,
        ]
        .iter()
        .all(|s| s.arrived())
    }

    /// Current surface size (inside the ring)
    pub fn size(&self) -> Size {
        Size::new(self.width.position() as f32, self.height.position() as f32)
    }

    /// Current size including the ring
    pub fn outer_size(&self) -> Size {
        let size = self.size();
        Size::new(size.width + 2.0 * RING_WIDTH, size.height + 2.0 * RING_WIDTH)
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius.position() as f32
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius.position() as f32
    }

    /// Bounds of the widget when centred in a viewport of `viewport` size
    pub fn centered_bounds(&self, viewport: Size) -> Rectangle {
        let outer = self.outer_size();
        Rectangle::new(
            Point::new(
                (viewport.width - outer.width) / 2.0,
                (viewport.height - outer.height) / 2.0,
            ),
            outer,
        )
    }

    /// Whether `point` falls inside the centred widget
    pub fn contains(&self, viewport: Size, point: Point) -> bool {
        self.centered_bounds(viewport).contains(point)
    }
}
