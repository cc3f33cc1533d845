//! # Planar Coordinate Module
//!
//! The simulation is restricted to a single orbital plane, so every derived
//! position is a 2-D vector. This module provides that vector type.
//!
//! ## Coordinate System Convention
//!
//! Components are named `x` and `z` after the two in-plane axes; the
//! out-of-plane (vertical) coordinate is implicitly zero everywhere:
//! - **X-axis**: direction of a body at orbital angle 0
//! - **Z-axis**: direction of a body at orbital angle +90 degrees
//!
//! With this convention a body at angle `theta` sits at
//! `(r*cos(theta), r*sin(theta))`, and [`Planar::perpendicular`] rotates a
//! vector by +90 degrees so that `(u, u.perpendicular())` is right-handed
//! in the plane.
//!
//! ## Internal Storage
//!
//! Components are stored as two `f64` values with no normalization or
//! conversion on construction; positions, directions, and displacements all
//! share the type and the interpretation depends on context.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Two-dimensional position or direction in the orbital plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Planar {
    /// In-plane x-component (orbital angle 0)
    pub x: f64,
    /// In-plane z-component (orbital angle +90 degrees)
    pub z: f64,
}

impl Planar {
    /// The origin of the orbital plane
    pub const ZERO: Planar = Planar { x: 0.0, z: 0.0 };

    /// Creates a new planar coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::Planar;
    ///
    /// let p = Planar::new(3.0, -4.0);
    /// assert_eq!(p.x, 3.0);
    /// assert_eq!(p.z, -4.0);
    /// ```
    pub fn new(x: f64, z: f64) -> Self {
        Planar { x, z }
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::Planar;
    ///
    /// assert_eq!(Planar::new(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction, or `None` for the zero
    /// vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::Planar;
    ///
    /// let unit = Planar::new(3.0, 4.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert!(Planar::ZERO.normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Planar> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Planar {
                x: self.x / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another vector
    pub fn dot(&self, other: &Planar) -> f64 {
        self.x * other.x + self.z * other.z
    }

    /// Euclidean distance to another point
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::Planar;
    ///
    /// let a = Planar::new(1.0, 1.0);
    /// let b = Planar::new(4.0, 5.0);
    /// assert_eq!(a.distance(&b), 5.0);
    /// ```
    pub fn distance(&self, other: &Planar) -> f64 {
        (*self - *other).magnitude()
    }

    /// Rotates the vector by +90 degrees in the plane
    ///
    /// For a unit vector `u`, the pair `(u, u.perpendicular())` forms a
    /// right-handed in-plane basis: `(x, z)` maps to `(-z, x)`.
    pub fn perpendicular(&self) -> Planar {
        Planar {
            x: -self.z,
            z: self.x,
        }
    }

    /// Converts to a nalgebra `Vector2` for linear algebra operations
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.z)
    }

    /// Creates from a nalgebra `Vector2`
    pub fn from_vector2(vec: Vector2<f64>) -> Self {
        Planar { x: vec.x, z: vec.y }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Planar {
    type Output = Planar;

    fn add(self, other: Planar) -> Planar {
        Planar {
            x: self.x + other.x,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Planar {
    type Output = Planar;

    fn sub(self, other: Planar) -> Planar {
        Planar {
            x: self.x - other.x,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Planar {
    type Output = Planar;

    fn mul(self, scalar: f64) -> Planar {
        Planar {
            x: self.x * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Planar {
    type Output = Planar;

    fn div(self, scalar: f64) -> Planar {
        Planar {
            x: self.x / scalar,
            z: self.z / scalar,
        }
    }
}

impl std::ops::Neg for Planar {
    type Output = Planar;

    fn neg(self) -> Planar {
        Planar {
            x: -self.x,
            z: -self.z,
        }
    }
}
