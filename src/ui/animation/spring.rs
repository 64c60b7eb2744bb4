//! Spring physics for the container geometry
//!
//! Uses time-based analytical solutions rather than frame-by-frame
//! integration, so a long gap between frames lands exactly where a
//! sequence of short ones would.
//!
//! Overdamped condition: `1.0 <= damping / (2.0 * sqrt(stiffness * mass))`
//!
//! ### Overdamped
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::sync::Arc;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Distance and velocity under which the spring snaps to its target
const REST_EPSILON: Num = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Container size and corner radius (damping 25, stiffness 200)
    pub const GEOMETRY: Self = Self {
        mass: 1.0,
        damping: 25.0,
        stiffness: 200.0,
    };

    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::GEOMETRY
    }
}

type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let SpringParams {
        mass,
        damping,
        stiffness,
    } = *params;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| {
            if t < 0.0 {
                return from;
            }
            to - (delta + t * leftover) * (t * angular_frequency).exp()
        })
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            if t < 0.0 {
                return from;
            }
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp()
        })
    }
}

fn derivative(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// One animated scalar that follows its target with spring motion
pub struct Spring {
    position: Num,
    target: Num,
    elapsed: Num,
    params: SpringParams,
    solver: SolverFn,
    velocity_fn: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("position", &self.position)
            .field("target", &self.target)
            .field("elapsed", &self.elapsed)
            .field("params", &self.params)
            .finish()
    }
}

impl Clone for Spring {
    fn clone(&self) -> Self {
        Self {
            position: self.position,
            target: self.target,
            elapsed: self.elapsed,
            params: self.params,
            solver: Arc::clone(&self.solver),
            velocity_fn: Arc::clone(&self.velocity_fn),
        }
    }
}

impl Spring {
    /// A spring resting at `position`
    pub fn new(position: Num, params: SpringParams) -> Self {
        Self {
            position,
            target: position,
            elapsed: 0.0,
            params,
            solver: Arc::new(move |_| position),
            velocity_fn: Arc::new(|_| 0.0),
        }
    }

    pub fn position(&self) -> Num {
        self.position
    }

    pub fn velocity(&self) -> Num {
        (self.velocity_fn)(self.elapsed)
    }

    pub fn arrived(&self) -> bool {
        (self.target - self.position).abs() < REST_EPSILON && self.velocity().abs() < REST_EPSILON
    }

    /// Jump to `position` without animating
    pub fn set_position(&mut self, position: Num) {
        self.position = position;
        self.target = position;
        self.elapsed = 0.0;
        self.solver = Arc::new(move |_| position);
        self.velocity_fn = Arc::new(|_| 0.0);
    }

    /// Retarget, carrying over the current velocity
    pub fn set_target(&mut self, target: Num) {
        if target == self.target {
            return;
        }
        let velocity = self.velocity();
        self.target = target;
        self.elapsed = 0.0;
        self.solver = solve_spring(self.position, velocity, target, &self.params);
        self.velocity_fn = derivative(Arc::clone(&self.solver));
    }

    /// Advance by `delta` seconds
    pub fn update(&mut self, delta: Num) {
        self.elapsed += delta;
        self.position = (self.solver)(self.elapsed);
        if self.arrived() {
            self.set_position(self.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_toward_target() {
        let mut spring = Spring::new(0.0, SpringParams::GEOMETRY);
        spring.set_target(100.0);

        for _ in 0..5 {
            spring.update(0.01);
        }

        let pos = spring.position();
        assert!(pos > 0.0, "spring should move from 0");
        assert!(pos < 100.0, "spring should not reach target yet");
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring::new(49.0, SpringParams::GEOMETRY);
        spring.set_target(370.0);
        for _ in 0..300 {
            spring.update(1.0 / 60.0);
        }
        assert_eq!(spring.position(), 370.0);
        assert!(spring.arrived());
    }

    #[test]
    fn settles_when_shrinking() {
        let mut spring = Spring::new(346.0, SpringParams::GEOMETRY);
        spring.set_target(101.18);
        for _ in 0..300 {
            spring.update(1.0 / 60.0);
        }
        assert_eq!(spring.position(), 101.18);
    }

    #[test]
    fn one_long_step_matches_many_short_ones() {
        let mut a = Spring::new(0.0, SpringParams::GEOMETRY);
        let mut b = a.clone();
        a.set_target(10.0);
        b.set_target(10.0);

        a.update(0.2);
        for _ in 0..20 {
            b.update(0.01);
        }
        assert!((a.position() - b.position()).abs() < 1e-6);
    }

    #[test]
    fn retarget_mid_flight_keeps_position() {
        let mut spring = Spring::new(0.0, SpringParams::GEOMETRY);
        spring.set_target(100.0);
        spring.update(0.05);
        let before = spring.position();
        spring.set_target(0.0);
        assert_eq!(spring.position(), before);
        assert!(spring.velocity() > 0.0, "velocity carries over");
    }

    #[test]
    fn geometry_params_are_underdamped() {
        assert!(!SpringParams::GEOMETRY.is_overdamped());
        let stiff = SpringParams {
            mass: 1.0,
            damping: 100.0,
            stiffness: 100.0,
        };
        assert!(stiff.is_overdamped());
    }

    #[test]
    fn set_position_is_immediate() {
        let mut spring = Spring::new(0.0, SpringParams::GEOMETRY);
        spring.set_target(50.0);
        spring.set_position(20.0);
        assert_eq!(spring.position(), 20.0);
        assert!(spring.arrived());
    }
}
