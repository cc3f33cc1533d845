//! Transfer trajectory planning
//!
//! Plans and animates a Hohmann-style transfer between two orbits. The
//! planner is a two-state machine: it idles until a departure is triggered,
//! then freezes a snapshot of the departure geometry — the sampled transfer
//! ellipse, the departure time, and the arrival body — and serves every
//! later query from that frozen snapshot. The probe fraction saturates at
//! the end of the flight and holds the final point forever; the planner
//! never returns to idle on its own.
//!
//! The transfer ellipse is seeded from the arrival body's position at
//! departure time, not a predicted rendezvous point, and the flight time is
//! a tunable constant rather than a Kepler-derived value. The rendezvous
//! error output exists to make the resulting miss visible.

pub mod spline;

pub use spline::CatmullRom;

use crate::catalog::Body;
use crate::constants::{RENDEZVOUS_ERROR_SCALE, TRANSFER_DURATION, TRANSFER_SEGMENTS};
use crate::coordinates::Planar;
use crate::ephemeris::{body_position, orbital_angle};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tunable transfer planner settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Flight time from departure to the end of the curve, in
    /// simulation-time units
    pub duration: f64,
    /// Segment count for sampling the ellipse; values below 1 are raised
    /// to 1
    pub segments: usize,
    /// Rendezvous distance at which the optimality signal reaches zero
    pub error_scale: f64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            duration: TRANSFER_DURATION,
            segments: TRANSFER_SEGMENTS,
            error_scale: RENDEZVOUS_ERROR_SCALE,
        }
    }
}

/// The frozen snapshot owned by a departed transfer
#[derive(Debug, Clone)]
pub struct Departure {
    /// Simulation time at which the departure was recorded
    pub departure_time: f64,
    /// Flight time over the frozen curve
    pub duration: f64,
    /// Error scale frozen from the config at departure
    pub error_scale: f64,
    /// The sampled transfer ellipse, departure end first
    pub curve: CatmullRom,
    /// The targeted arrival body, cloned at departure so steady-state
    /// queries never perform a fallible lookup
    pub arrival: Body,
}

/// Two-state transfer planner: idle, or departed with a frozen snapshot
#[derive(Debug, Clone, Default)]
pub enum TransferPlan {
    /// No departure recorded
    #[default]
    Idle,
    /// Departure frozen; all queries replay the owned snapshot
    Departed(Departure),
}

impl TransferPlan {
    /// Create an idle planner
    pub fn new() -> Self {
        TransferPlan::Idle
    }

    /// Whether a departure has been recorded
    pub fn is_departed(&self) -> bool {
        matches!(self, TransferPlan::Departed(_))
    }

    /// The frozen departure snapshot, if any
    pub fn departure(&self) -> Option<&Departure> {
        match self {
            TransferPlan::Idle => None,
            TransferPlan::Departed(dep) => Some(dep),
        }
    }

    /// Record a departure from `departure` toward `arrival` at time `t0`
    ///
    /// Freezes the sampled transfer ellipse and returns `true`. If a
    /// departure is already recorded this is a no-op returning `false`:
    /// the frozen curve is never rebuilt or mutated, and an explicit
    /// [`TransferPlan::reset`] is the only way back to idle.
    pub fn depart(&mut self, departure: &Body, arrival: &Body, t0: f64, config: &TransferConfig) -> bool {
        if let TransferPlan::Departed(dep) = self {
            debug!(
                "ignoring transfer trigger at t={}: already departed at t={}",
                t0, dep.departure_time
            );
            return false;
        }

        debug!(
            "transfer departure: {} -> {} at t={}",
            departure.name, arrival.name, t0
        );
        *self = TransferPlan::Departed(Departure {
            departure_time: t0,
            duration: config.duration,
            error_scale: config.error_scale,
            curve: transfer_curve(departure, arrival, t0, config.segments),
            arrival: arrival.clone(),
        });
        true
    }

    /// Probe position along the frozen curve at time `t`
    ///
    /// `None` while idle. The flight fraction is clamped to `[0, 1]`: the
    /// probe sits at the curve start for `t <= t0` and holds the final
    /// point for every `t >= t0 + duration`.
    pub fn probe_position(&self, t: f64) -> Option<Planar> {
        match self {
            TransferPlan::Idle => None,
            TransferPlan::Departed(dep) => Some(dep.curve.point_at(dep.fraction(t))),
        }
    }

    /// Distance from the probe to the arrival body's current position
    ///
    /// The arrival body keeps moving on its own orbit while the probe
    /// replays the frozen curve, so this is the live miss distance, not a
    /// frozen one. `None` while idle.
    pub fn rendezvous_error(&self, t: f64) -> Option<f64> {
        match self {
            TransferPlan::Idle => None,
            TransferPlan::Departed(dep) => {
                let probe = dep.curve.point_at(dep.fraction(t));
                let target = body_position(&dep.arrival, t);
                Some(probe.distance(&target))
            }
        }
    }

    /// Normalized rendezvous quality in `[0, 1]`: 1 at zero miss distance,
    /// 0 at or beyond the frozen error scale. `None` while idle.
    pub fn optimality(&self, t: f64) -> Option<f64> {
        match self {
            TransferPlan::Idle => None,
            TransferPlan::Departed(dep) => self
                .rendezvous_error(t)
                .map(|error| (1.0 - error / dep.error_scale).clamp(0.0, 1.0)),
        }
    }

    /// Discard any frozen departure and return to idle
    ///
    /// The next [`TransferPlan::depart`] freezes a fresh snapshot.
    pub fn reset(&mut self) {
        if let TransferPlan::Departed(dep) = self {
            debug!("resetting transfer departed at t={}", dep.departure_time);
        }
        *self = TransferPlan::Idle;
    }
}

impl Departure {
    /// Elapsed flight fraction at time `t`, clamped to `[0, 1]`
    pub fn fraction(&self, t: f64) -> f64 {
        ((t - self.departure_time) / self.duration).clamp(0.0, 1.0)
    }
}

/// Sample the transfer ellipse from `departure` toward `arrival` at `t0`
///
/// The ellipse has semi-major axis `(R1 + R2) / 2` and eccentricity
/// `(R2 - R1) / (R2 + R1)` for the departure distance `R1` and the arrival
/// orbit radius `R2`. The polar conic is sampled over half a revolution
/// starting at the departure body's angular position, so the curve begins
/// exactly at the departure body and ends diametrically opposite at the
/// arrival orbit radius. Inward transfers (`R2 < R1`) work the same way
/// with a negative eccentricity.
pub fn transfer_curve(departure: &Body, arrival: &Body, t0: f64, segments: usize) -> CatmullRom {
    let r1 = body_position(departure, t0).magnitude();
    let r2 = arrival.orbit_radius;
    let a = (r1 + r2) / 2.0;
    let e = (r2 - r1) / (r2 + r1);
    let phi = orbital_angle(departure, t0);

    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let theta = phi + PI * i as f64 / segments as f64;
        let r = a * (1.0 - e * e) / (1.0 + e * (theta - phi).cos());
        points.push(Planar::new(r * theta.cos(), r * theta.sin()));
    }
    CatmullRom::new(points).expect("sampled curve has segments + 1 >= 2 control points")
}
