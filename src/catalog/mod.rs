//! Celestial body catalog
//!
//! The catalog is the static data the whole simulation is parameterized
//! over: one entry per body with its orbital radius, mass, and precomputed
//! angular speed. It is constructed once at startup, validated, and never
//! mutated; query layers borrow it rather than reaching for a global.

use crate::constants::{AU_SCALE, TAU};
use crate::{OrreryError, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

pub mod synthetic;

pub use synthetic::SyntheticCatalogConfig;

/// A simulated body on a fixed circular orbit
///
/// `angular_speed` is precomputed as `2*PI / period` when the body is
/// constructed; it is exactly 0 if and only if `orbit_radius` is 0 (the
/// central attractor, pinned at the origin).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique body name
    pub name: String,
    /// Orbit radius in scene-length units; 0 only for the central body
    pub orbit_radius: f64,
    /// Mass in arbitrary units (drives the gravity-well field and the
    /// Lagrange solver)
    pub mass: f64,
    /// Orbital angular speed in radians per simulation-time unit
    pub angular_speed: f64,
    /// Visual radius; carried for renderers, unused by the simulation math
    pub size: f64,
}

impl Body {
    /// Create the central attractor, stationary at the origin
    pub fn central(name: impl Into<String>, mass: f64, size: f64) -> Self {
        Self {
            name: name.into(),
            orbit_radius: 0.0,
            mass,
            angular_speed: 0.0,
            size,
        }
    }

    /// Create an orbiting body from its orbit radius in astronomical units
    /// and its orbital period in simulation-time units
    pub fn orbiting(
        name: impl Into<String>,
        orbit_radius_au: f64,
        period: f64,
        mass: f64,
        size: f64,
    ) -> Self {
        Self {
            name: name.into(),
            orbit_radius: orbit_radius_au * AU_SCALE,
            mass,
            angular_speed: TAU / period,
            size,
        }
    }

    /// Whether this is the central attractor
    pub fn is_central(&self) -> bool {
        self.orbit_radius == 0.0
    }

    /// Orbital period in simulation-time units, `None` for the central body
    pub fn period(&self) -> Option<f64> {
        if self.angular_speed == 0.0 {
            None
        } else {
            Some(TAU / self.angular_speed)
        }
    }
}

/// Ordered, immutable collection of bodies
///
/// Construction validates the catalog invariants: unique names, at most one
/// central body, strictly positive mass and size everywhere, and strictly
/// positive radius and angular speed for every orbiting body.
#[derive(Debug, Clone, Serialize)]
pub struct BodyCatalog {
    bodies: Vec<Body>,
}

impl BodyCatalog {
    /// Build a catalog, checking the catalog invariants
    pub fn new(bodies: Vec<Body>) -> Result<Self> {
        let mut central_count = 0;
        for (i, body) in bodies.iter().enumerate() {
            if body.name.is_empty() {
                return Err(OrreryError::InvalidCatalog(format!(
                    "body at index {} has an empty name",
                    i
                )));
            }
            if bodies[..i].iter().any(|other| other.name == body.name) {
                return Err(OrreryError::InvalidCatalog(format!(
                    "duplicate body name: {}",
                    body.name
                )));
            }
            if !(body.mass > 0.0) {
                return Err(OrreryError::InvalidCatalog(format!(
                    "{}: mass must be positive, got {}",
                    body.name, body.mass
                )));
            }
            if !(body.size > 0.0) {
                return Err(OrreryError::InvalidCatalog(format!(
                    "{}: size must be positive, got {}",
                    body.name, body.size
                )));
            }
            if body.is_central() {
                central_count += 1;
                if body.angular_speed != 0.0 {
                    return Err(OrreryError::InvalidCatalog(format!(
                        "{}: central body must have zero angular speed",
                        body.name
                    )));
                }
            } else if !(body.orbit_radius > 0.0) || !(body.angular_speed > 0.0) {
                return Err(OrreryError::InvalidCatalog(format!(
                    "{}: orbiting body needs positive radius and angular speed",
                    body.name
                )));
            }
        }
        if central_count > 1 {
            return Err(OrreryError::InvalidCatalog(format!(
                "at most one central body allowed, found {}",
                central_count
            )));
        }

        debug!("constructed body catalog with {} bodies", bodies.len());
        Ok(Self { bodies })
    }

    /// The compiled-in nine-body solar system catalog
    ///
    /// Orbit radii are scaled astronomical units, periods are Earth years
    /// as simulation-time units, and masses are the relative values the
    /// gravity-well field is tuned for.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Look up a body by name
    pub fn get(&self, name: &str) -> Result<&Body> {
        self.bodies
            .iter()
            .find(|body| body.name == name)
            .ok_or_else(|| OrreryError::BodyNotFound(name.to_string()))
    }

    /// The central attractor, if the catalog has one
    pub fn central(&self) -> Option<&Body> {
        self.bodies.iter().find(|body| body.is_central())
    }

    /// Iterate over the bodies in catalog order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Number of bodies in the catalog
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Filter bodies based on a predicate
    pub fn filter<F>(&self, predicate: F) -> Vec<&Body>
    where
        F: Fn(&Body) -> bool,
    {
        self.bodies.iter().filter(|body| predicate(body)).collect()
    }
}

lazy_static! {
    static ref STANDARD: BodyCatalog = BodyCatalog::new(vec![
        Body::central("Sun", 300.0, 10.0),
        Body::orbiting("Mercury", 0.39, 0.24, 0.055, 0.38),
        Body::orbiting("Venus", 0.72, 0.62, 0.815, 0.95),
        Body::orbiting("Earth", 1.0, 1.0, 1.0, 1.0),
        Body::orbiting("Mars", 1.52, 1.88, 0.107, 0.53),
        Body::orbiting("Jupiter", 5.2, 11.86, 317.8, 11.21),
        Body::orbiting("Saturn", 9.58, 29.46, 95.2, 9.45),
        Body::orbiting("Uranus", 19.2, 84.01, 14.5, 4.01),
        Body::orbiting("Neptune", 30.05, 164.8, 17.1, 3.88),
    ])
    .expect("standard catalog satisfies the catalog invariants");
}
