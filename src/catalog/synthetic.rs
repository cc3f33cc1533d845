//! Synthetic body catalog generator
//!
//! Generates randomized but valid catalogs for tests and benchmarks. The
//! generator is seeded, so a given configuration always produces the same
//! catalog.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Body, BodyCatalog};
use crate::Result;

/// Configuration for synthetic catalog generation
pub struct SyntheticCatalogConfig {
    /// Number of orbiting bodies to generate
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Orbit radius range in astronomical units
    pub orbit_au_range: (f64, f64),
    /// Orbital period range in simulation-time units
    pub period_range: (f64, f64),
    /// Body mass range
    pub mass_range: (f64, f64),
    /// Central attractor mass
    pub central_mass: f64,
}

impl Default for SyntheticCatalogConfig {
    fn default() -> Self {
        Self {
            count: 8,
            seed: 42,
            orbit_au_range: (0.3, 31.0),
            period_range: (0.24, 165.0),
            mass_range: (0.05, 320.0),
            central_mass: 300.0,
        }
    }
}

impl SyntheticCatalogConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of orbiting bodies to generate
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the orbit radius range in astronomical units
    pub fn with_orbit_au_range(mut self, min: f64, max: f64) -> Self {
        self.orbit_au_range = (min, max);
        self
    }

    /// Set the orbital period range
    pub fn with_period_range(mut self, min: f64, max: f64) -> Self {
        self.period_range = (min, max);
        self
    }

    /// Set the body mass range
    pub fn with_mass_range(mut self, min: f64, max: f64) -> Self {
        self.mass_range = (min, max);
        self
    }

    /// Generate a catalog with the configured parameters
    ///
    /// The catalog holds one central body named `central` followed by
    /// `count` orbiting bodies named `body-1` through `body-N`.
    pub fn generate(&self) -> Result<BodyCatalog> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let orbit_dist = Uniform::from(self.orbit_au_range.0..self.orbit_au_range.1);
        let period_dist = Uniform::from(self.period_range.0..self.period_range.1);
        let mass_dist = Uniform::from(self.mass_range.0..self.mass_range.1);
        let size_dist = Uniform::from(0.3..12.0);

        let mut bodies = Vec::with_capacity(self.count + 1);
        bodies.push(Body::central("central", self.central_mass, 10.0));

        for id in 1..=self.count {
            bodies.push(Body::orbiting(
                format!("body-{}", id),
                orbit_dist.sample(&mut rng),
                period_dist.sample(&mut rng),
                mass_dist.sample(&mut rng),
                size_dist.sample(&mut rng),
            ));
        }

        BodyCatalog::new(bodies)
    }
}
