//! Restricted three-body Lagrange point solver
//!
//! Given the instantaneous positions and masses of a primary and a
//! secondary body, computes the L1, L2, L4, and L5 equilibrium points (L3
//! is not tracked). The collinear points use the standard small-mass-ratio
//! offset `delta = (m2 / (3 m1))^(1/3)` along the primary-secondary line;
//! L4 and L5 complete equilateral triangles with the pair.
//!
//! The solver is stateless: the points are rederived from the current
//! geometry on every call and sweep around with the orbiting bodies.

use crate::constants::{COS_60, SIN_60};
use crate::coordinates::Planar;
use serde::{Deserialize, Serialize};

/// The four tracked equilibrium points of a body pair at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagrangePoints {
    /// Collinear point between the bodies
    pub l1: Planar,
    /// Collinear point beyond the secondary
    pub l2: Planar,
    /// Leading triangular point
    pub l4: Planar,
    /// Trailing triangular point
    pub l5: Planar,
}

/// Solve the L1/L2/L4/L5 points for a primary-secondary pair
///
/// # Preconditions
///
/// The two positions must be distinct and `primary_mass` must be positive;
/// coincident bodies make the separation direction undefined and the result
/// is meaningless (not checked at runtime — callers derive both positions
/// from a validated catalog, where distinct orbit radii keep the pair
/// separated at every instant).
pub fn lagrange_points(
    primary_pos: Planar,
    secondary_pos: Planar,
    primary_mass: f64,
    secondary_mass: f64,
) -> LagrangePoints {
    let r_vec = secondary_pos - primary_pos;
    let r = r_vec.magnitude();
    let u = r_vec / r;
    let v = u.perpendicular();

    let delta = (secondary_mass / (3.0 * primary_mass)).cbrt();

    let l1 = primary_pos + r_vec * (1.0 - delta);
    let l2 = primary_pos + r_vec * (1.0 + delta);
    let l4 = primary_pos + u * (r * COS_60) + v * (r * SIN_60);
    let l5 = primary_pos + u * (r * COS_60) - v * (r * SIN_60);

    LagrangePoints { l1, l2, l4, l5 }
}
