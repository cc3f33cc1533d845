//! Orbital state computation
//!
//! Positions are pure functions of `(body, time)`: the host hands the same
//! monotonically increasing clock value to every query each frame, and each
//! body's position is recomputed from scratch rather than integrated. That
//! keeps the system reproducible — evaluating at time `t` always yields the
//! same configuration, regardless of what was queried before.
//!
//! The orbital angle `t * angular_speed` is deliberately not reduced modulo
//! 2*PI before the trigonometric evaluation, so very large `t` values lose
//! periodicity precision along with f64 resolution. Callers needing exact
//! long-horizon periodicity should fold their clock themselves.

use crate::catalog::Body;
use crate::coordinates::Planar;

/// A body's orbital angle at simulation time `t`, in radians
///
/// Zero for the central body at any time. Negative `t` is valid and runs
/// the orbit backwards.
pub fn orbital_angle(body: &Body, t: f64) -> f64 {
    t * body.angular_speed
}

/// A body's planar position at simulation time `t`
///
/// The central body (`orbit_radius == 0`) is pinned at the origin; every
/// other body moves on the circle of its orbit radius with its precomputed
/// angular speed.
pub fn body_position(body: &Body, t: f64) -> Planar {
    if body.is_central() {
        return Planar::ZERO;
    }
    let angle = orbital_angle(body, t);
    Planar::new(
        body.orbit_radius * angle.cos(),
        body.orbit_radius * angle.sin(),
    )
}
