//! Catmull-Rom spline interpolation for transfer curves
//!
//! The transfer planner samples its ellipse at a fixed resolution and needs
//! a smooth position-at-fraction query through those samples. A Catmull-Rom
//! spline fits: it interpolates through every control point in order, needs
//! no solver, and evaluates in constant time per query.

use crate::coordinates::Planar;
use crate::{OrreryError, Result};

/// Catmull-Rom spline through an ordered sequence of planar points
///
/// Tangents are the centered finite differences of neighboring control
/// points, clamped to one-sided differences at the two endpoints, so the
/// curve starts exactly at the first point and ends exactly at the last.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Planar>,
}

impl CatmullRom {
    /// Create a spline through the given control points, in order
    ///
    /// Fails with [`OrreryError::DegenerateCurve`] for fewer than two
    /// points; a curve needs at least one segment.
    pub fn new(points: Vec<Planar>) -> Result<Self> {
        if points.len() < 2 {
            return Err(OrreryError::DegenerateCurve(format!(
                "need at least 2 control points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Evaluate the curve at `fraction` of its arc, clamped to `[0, 1]`
    ///
    /// `0.0` is the first control point, `1.0` the last; integer multiples
    /// of `1 / (len - 1)` land exactly on the interior control points.
    pub fn point_at(&self, fraction: f64) -> Planar {
        let segments = self.points.len() - 1;
        let u = fraction.clamp(0.0, 1.0) * segments as f64;
        let i = (u.floor() as usize).min(segments - 1);
        let s = u - i as f64;

        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p3 = self.points[(i + 2).min(segments)];

        // Cubic Hermite basis with centered-difference tangents
        let t1 = (p2 - p0) * 0.5;
        let t2 = (p3 - p1) * 0.5;
        let s2 = s * s;
        let s3 = s2 * s;

        p1 * (2.0 * s3 - 3.0 * s2 + 1.0)
            + t1 * (s3 - 2.0 * s2 + s)
            + p2 * (-2.0 * s3 + 3.0 * s2)
            + t2 * (s3 - s2)
    }

    /// The first control point
    pub fn first(&self) -> Planar {
        self.points[0]
    }

    /// The last control point
    pub fn last(&self) -> Planar {
        self.points[self.points.len() - 1]
    }

    /// The control points, in curve order
    pub fn points(&self) -> &[Planar] {
        &self.points
    }
}
