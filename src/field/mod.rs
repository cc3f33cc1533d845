//! Gravitational potential field sampling
//!
//! The field is a scalar "depression" in `[0, 1)` describing how deeply a
//! query point sits inside the aggregate gravity well of all bodies. Each
//! body contributes `sqrt(mass * mass_scale) / (distance + softening)`; the
//! summed displacement is passed through the saturating nonlinearity
//! `sqrt(1 - exp(-displacement * sensitivity))`, which approaches but never
//! reaches 1 regardless of mass or proximity.
//!
//! The sampler runs on the per-frame hot path — a host typically queries it
//! once per deformation-grid vertex — so the single-point entry points are
//! allocation-free. [`FieldSampler`] refreshes its body-position snapshot
//! once per frame and serves any number of point queries against it.

use crate::catalog::BodyCatalog;
use crate::constants::{FIELD_MASS_SCALE, FIELD_SENSITIVITY, FIELD_SOFTENING};
use crate::coordinates::Planar;
use crate::ephemeris::body_position;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Tuning parameters of the field nonlinearity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Mass scaling applied inside each contribution
    pub mass_scale: f64,
    /// Softening floor added to every distance, keeps contributions finite
    /// at a body's center
    pub softening: f64,
    /// Sensitivity of the saturating warp
    pub sensitivity: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            mass_scale: FIELD_MASS_SCALE,
            softening: FIELD_SOFTENING,
            sensitivity: FIELD_SENSITIVITY,
        }
    }
}

fn contribution(point: &Planar, source: &Planar, mass: f64, params: &FieldParams) -> f64 {
    (mass * params.mass_scale).sqrt() / (point.distance(source) + params.softening)
}

fn warp(displacement: f64, sensitivity: f64) -> f64 {
    (1.0 - (-displacement * sensitivity).exp()).sqrt()
}

/// Field depression at `point` for explicit source positions and masses
///
/// `positions` and `masses` are paired by index; masses must be
/// non-negative (a zero mass contributes zero). Allocation-free.
pub fn field_depression(
    point: Planar,
    positions: &[Planar],
    masses: &[f64],
    params: &FieldParams,
) -> f64 {
    let mut displacement = 0.0;
    for (source, &mass) in positions.iter().zip(masses) {
        displacement += contribution(&point, source, mass, params);
    }
    warp(displacement, params.sensitivity)
}

/// Field depression at `point` aggregated over a catalog at time `t`
///
/// Computes body positions inline, so a one-off query needs no snapshot
/// buffers. Allocation-free.
pub fn catalog_depression(
    point: Planar,
    catalog: &BodyCatalog,
    t: f64,
    params: &FieldParams,
) -> f64 {
    let mut displacement = 0.0;
    for body in catalog.bodies() {
        displacement += contribution(&point, &body_position(body, t), body.mass, params);
    }
    warp(displacement, params.sensitivity)
}

/// Per-frame field sampler with reusable position buffers
///
/// Built once against a catalog, advanced once per frame, then sampled at
/// arbitrarily many points without further allocation:
///
/// ```rust
/// use orrery::catalog::BodyCatalog;
/// use orrery::coordinates::Planar;
/// use orrery::field::FieldSampler;
///
/// let catalog = BodyCatalog::standard();
/// let mut sampler = FieldSampler::new(&catalog);
/// sampler.advance(&catalog, 0.25);
/// let depth = sampler.sample(Planar::new(50.0, 0.0));
/// assert!(depth > 0.0 && depth < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSampler {
    params: FieldParams,
    positions: Vec<Planar>,
    masses: Vec<f64>,
}

impl FieldSampler {
    /// Create a sampler for the given catalog with default tuning
    pub fn new(catalog: &BodyCatalog) -> Self {
        Self::with_params(catalog, FieldParams::default())
    }

    /// Create a sampler for the given catalog with explicit tuning
    pub fn with_params(catalog: &BodyCatalog, params: FieldParams) -> Self {
        Self {
            params,
            positions: vec![Planar::ZERO; catalog.len()],
            masses: catalog.bodies().map(|body| body.mass).collect(),
        }
    }

    /// The sampler's tuning parameters
    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Refresh the body-position snapshot for simulation time `t`
    ///
    /// `catalog` must be the catalog the sampler was built from; positions
    /// are rewritten in place with no allocation.
    pub fn advance(&mut self, catalog: &BodyCatalog, t: f64) {
        debug_assert_eq!(catalog.len(), self.positions.len());
        for (slot, body) in self.positions.iter_mut().zip(catalog.bodies()) {
            *slot = body_position(body, t);
        }
    }

    /// Field depression at `point` against the current snapshot
    pub fn sample(&self, point: Planar) -> f64 {
        field_depression(point, &self.positions, &self.masses, &self.params)
    }

    /// Sample a square lattice centered on the origin
    ///
    /// Covers `[-half_extent, half_extent]` on both axes with `resolution`
    /// points per axis; element `[i][j]` holds the depression at the i-th x
    /// step and j-th z step.
    pub fn sample_grid(&self, half_extent: f64, resolution: usize) -> Array2<f64> {
        let step = if resolution > 1 {
            2.0 * half_extent / (resolution - 1) as f64
        } else {
            0.0
        };
        Array2::from_shape_fn((resolution, resolution), |(i, j)| {
            self.sample(Planar::new(
                -half_extent + i as f64 * step,
                -half_extent + j as f64 * step,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Body;
    use approx::assert_relative_eq;

    fn single_source(mass: f64) -> (Vec<Planar>, Vec<f64>) {
        (vec![Planar::ZERO], vec![mass])
    }

    #[test]
    fn test_decreases_with_distance() {
        let (positions, masses) = single_source(300.0);
        let params = FieldParams::default();

        let mut previous = f64::INFINITY;
        for i in 0..40 {
            let d = i as f64 * 25.0;
            let depth = field_depression(Planar::new(d, 0.0), &positions, &masses, &params);
            assert!(
                depth < previous,
                "depth {} did not decrease at distance {}",
                depth,
                d
            );
            previous = depth;
        }
    }

    #[test]
    fn test_bounded_below_one() {
        let params = FieldParams::default();

        // A huge mass right on top of the source saturates just under 1
        let (positions, masses) = single_source(1e6);
        let depth = field_depression(Planar::ZERO, &positions, &masses, &params);
        assert!(depth < 1.0);
        assert!(depth > 0.999);

        // Far away from a light source the field is tiny but non-negative
        let (positions, masses) = single_source(0.05);
        let depth = field_depression(Planar::new(1e6, 0.0), &positions, &masses, &params);
        assert!((0.0..1.0).contains(&depth));
    }

    #[test]
    fn test_zero_mass_contributes_nothing() {
        let params = FieldParams::default();
        let point = Planar::new(30.0, -10.0);

        let base = field_depression(
            point,
            &[Planar::new(50.0, 0.0)],
            &[1.0],
            &params,
        );
        let with_ghost = field_depression(
            point,
            &[Planar::new(50.0, 0.0), Planar::new(-20.0, 5.0)],
            &[1.0, 0.0],
            &params,
        );
        assert_relative_eq!(base, with_ghost, max_relative = 1e-15);

        // No sources at all means a flat field
        assert_eq!(field_depression(point, &[], &[], &params), 0.0);
    }

    #[test]
    fn test_sampler_matches_direct_aggregation() {
        let catalog = BodyCatalog::standard();
        let params = FieldParams::default();
        let mut sampler = FieldSampler::with_params(&catalog, params);

        for &t in &[0.0, 0.4, 17.3] {
            sampler.advance(&catalog, t);
            for &point in &[
                Planar::ZERO,
                Planar::new(50.0, 0.0),
                Planar::new(-300.0, 1200.0),
            ] {
                assert_relative_eq!(
                    sampler.sample(point),
                    catalog_depression(point, &catalog, t, &params),
                    max_relative = 1e-15
                );
            }
        }
    }

    #[test]
    fn test_sampler_snapshot_is_stable_between_advances() {
        let catalog = BodyCatalog::standard();
        let mut sampler = FieldSampler::new(&catalog);
        sampler.advance(&catalog, 1.0);

        let point = Planar::new(42.0, 42.0);
        let first = sampler.sample(point);
        assert_eq!(first, sampler.sample(point));

        sampler.advance(&catalog, 2.0);
        assert_ne!(first, sampler.sample(point));
    }

    #[test]
    fn test_grid_shape_and_symmetry() {
        // A lone central mass gives a grid symmetric under axis reflection
        let catalog = BodyCatalog::new(vec![Body::central("core", 100.0, 1.0)]).unwrap();
        let mut sampler = FieldSampler::new(&catalog);
        sampler.advance(&catalog, 0.0);

        let grid = sampler.sample_grid(100.0, 9);
        assert_eq!(grid.shape(), &[9, 9]);

        for i in 0..9 {
            for j in 0..9 {
                assert_relative_eq!(grid[[i, j]], grid[[8 - i, j]], max_relative = 1e-12);
                assert_relative_eq!(grid[[i, j]], grid[[i, 8 - j]], max_relative = 1e-12);
            }
        }

        // The well is deepest at the center of the grid
        let center = grid[[4, 4]];
        assert!(grid.iter().all(|&depth| depth <= center));
    }
}
