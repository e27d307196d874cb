//! # Cartesian Coordinate Module
//!
//! This module provides the 3D Cartesian point type that every symmetry
//! operation consumes and produces.
//!
//! ## Coordinate System Convention
//!
//! Coordinates are stored in a standard right-handed Cartesian system. Rotations
//! are counter-clockwise when looking down an axis from its positive end, and the
//! canonical mirror plane used by reflections is the `xy`-plane (normal `+z`).
//!
//! ## Internal Storage
//!
//! Coordinates are stored as three `f64` values:
//! - Values maintain full IEEE 754 double precision
//! - No normalization or wrapping happens on construction
//! - The same type serves as a position, a direction, or a displacement
//!
//! Fractional unit-cell coordinates are represented by the same type; see
//! [`crate::fractional`] for folding them into `[0, 1)`.
//!
//! ## Examples
//!
//! ```rust
//! use symmop::coordinates::cartesian::Cartesian3;
//!
//! let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
//! let z_axis = Cartesian3::unit_z();
//!
//! // Perpendicular vectors
//! assert_eq!(x_axis.dot(&z_axis), 0.0);
//! ```

use crate::errors::{shape_err, Result, SymmetryError};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional Cartesian point or direction
///
/// Always exactly three components. Conversions from slices and vectors of
/// any other length fail with [`SymmetryError::InvalidShape`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use symmop::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 2.0);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The global origin `(0, 0, 0)`
    ///
    /// Used as the default axis origin and inversion centre. A fresh value is
    /// returned on every call.
    pub fn origin() -> Self {
        Cartesian3::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along `+z`, the normal of the canonical mirror plane
    pub fn unit_z() -> Self {
        Cartesian3::new(0.0, 0.0, 1.0)
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use symmop::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized (unit) vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use symmop::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// let unit = coord.normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert_eq!(unit.x, 0.6);
    /// assert_eq!(unit.y, 0.8);
    ///
    /// assert!(Cartesian3::origin().normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Calculates the dot product with another coordinate
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another coordinate
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use symmop::coordinates::cartesian::Cartesian3;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.cross(&y_axis), Cartesian3::unit_z());
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Cartesian3) -> f64 {
        (*other - *self).magnitude()
    }

    /// Components as an array `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// Largest absolute component-wise difference to another point
    pub fn max_abs_diff(&self, other: &Cartesian3) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.z - other.z).abs())
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(values: [f64; 3]) -> Self {
        Cartesian3::new(values[0], values[1], values[2])
    }
}

impl From<Cartesian3> for [f64; 3] {
    fn from(coord: Cartesian3) -> Self {
        coord.to_array()
    }
}

impl TryFrom<&[f64]> for Cartesian3 {
    type Error = SymmetryError;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z] => Ok(Cartesian3::new(*x, *y, *z)),
            _ => Err(shape_err(
                "vector",
                format!("expected 3 components, found {}", values.len()),
            )),
        }
    }
}

impl TryFrom<Vec<f64>> for Cartesian3 {
    type Error = SymmetryError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Cartesian3::try_from(values.as_slice())
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
