//! Constants module for the orrery simulation

use std::f64::consts::PI;

// Scene scale
/// Scene-length units per astronomical unit
pub const AU_SCALE: f64 = 50.0;

// Angles
/// Tau (2*PI) for a full orbit
pub const TAU: f64 = 2.0 * PI;
/// cos(60 degrees), the along-track factor of the equilateral points
pub const COS_60: f64 = 0.5;
/// sin(60 degrees) = sqrt(3)/2, the cross-track factor of the equilateral points
pub const SIN_60: f64 = 0.866_025_403_784_438_6;

// Gravity-well field tuning
/// Mass scaling applied inside each body's field contribution
pub const FIELD_MASS_SCALE: f64 = 1.11;
/// Softening floor added to every contribution's distance
pub const FIELD_SOFTENING: f64 = 5.0;
/// Sensitivity of the saturating warp nonlinearity
pub const FIELD_SENSITIVITY: f64 = 0.08;

// Transfer trajectory tuning
/// Transfer flight time in simulation-time units (a tunable, not Keplerian)
pub const TRANSFER_DURATION: f64 = 1.0;
/// Segment count used to sample the transfer ellipse (points = segments + 1)
pub const TRANSFER_SEGMENTS: usize = 100;
/// Rendezvous distance at which the optimality signal reaches zero
pub const RENDEZVOUS_ERROR_SCALE: f64 = 50.0;

// Simulation clock scales
/// Default clock scale
pub const NORMAL_TIME_SCALE: f64 = 0.2;
/// Slowed clock scale
pub const SLOW_TIME_SCALE: f64 = 0.02;
