//! Symmop: crystallographic point symmetry transforms
//!
//! This crate applies the Euclidean point operations used in crystallographic
//! symmetry analysis: translation, rotation about an arbitrary axis,
//! inversion, rotoinversion, reflection through an arbitrary plane, glide and
//! screw, plus folding of fractional coordinates into the unit cell.
//!
//! Every operation is a pure function of its arguments. Points are
//! [`Cartesian3`] values and each call returns a new point.
//!
//! ```rust
//! use symmop::{reflect, rotate, Cartesian3, PlanePoints};
//! use std::f64::consts::PI;
//!
//! // Two-fold rotation about z
//! let point = Cartesian3::new(1.0, 2.0, 3.0);
//! let rotated = rotate(point, Cartesian3::unit_z(), PI, Cartesian3::origin())?;
//! assert!(rotated.max_abs_diff(&Cartesian3::new(-1.0, -2.0, 3.0)) < 1e-12);
//!
//! // Mirror through the plane z = 0
//! let plane = PlanePoints::new(
//!     Cartesian3::origin(),
//!     Cartesian3::new(1.0, 0.0, 0.0),
//!     Cartesian3::new(0.0, 1.0, 0.0),
//! );
//! assert_eq!(reflect(rotated, &plane)?.z, -3.0);
//! # Ok::<(), symmop::SymmetryError>(())
//! ```
//!
//! Arguments that arrive untyped (for example out of a JSON document) go
//! through [`dynamic`], which validates shapes and numeric types before
//! calling the typed operations.

pub mod coordinates;
pub mod dynamic;
pub mod errors;
pub mod fractional;
pub mod operation;
pub mod operations;
pub mod validation;

// Re-export commonly used types
pub use coordinates::Cartesian3;
pub use errors::{ErrorKind, Result, SymmetryError};
pub use fractional::{clean, FractionalCoordinate};
pub use operation::SymmetryOperation;
pub use operations::{
    glide, invert, reflect, rotate, rotoinvert, screw, translate, PlanePoints,
};
