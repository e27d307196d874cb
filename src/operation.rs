//! A single symmetry operation as a value
//!
//! [`SymmetryOperation`] bundles one of the geometric operations with its
//! parameters so it can be stored, serialized, and applied to many points.
//! Operations are applied one at a time; combining two operations into one is
//! out of scope.

use crate::coordinates::Cartesian3;
use crate::errors::Result;
use crate::operations::{self, PlanePoints};
use serde::{Deserialize, Serialize};

/// One symmetry operation and its parameters
///
/// Angles are in radians. Origins and centres are explicit; use
/// [`Cartesian3::origin`] for operations through the global origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymmetryOperation {
    Translation {
        offset: Cartesian3,
    },
    Rotation {
        axis_direction: Cartesian3,
        angle: f64,
        axis_origin: Cartesian3,
    },
    Inversion {
        center: Cartesian3,
    },
    Rotoinversion {
        axis_direction: Cartesian3,
        angle: f64,
        center: Cartesian3,
    },
    Reflection {
        plane: PlanePoints,
    },
    Glide {
        direction: Cartesian3,
        plane: PlanePoints,
    },
    Screw {
        axis_direction: Cartesian3,
        angle: f64,
        origin: Cartesian3,
    },
}

impl SymmetryOperation {
    /// Applies the operation to a single point
    pub fn apply(&self, point: Cartesian3) -> Result<Cartesian3> {
        match *self {
            SymmetryOperation::Translation { offset } => Ok(operations::translate(point, offset)),
            SymmetryOperation::Rotation {
                axis_direction,
                angle,
                axis_origin,
            } => operations::rotate(point, axis_direction, angle, axis_origin),
            SymmetryOperation::Inversion { center } => Ok(operations::invert(point, center)),
            SymmetryOperation::Rotoinversion {
                axis_direction,
                angle,
                center,
            } => operations::rotoinvert(point, axis_direction, angle, center),
            SymmetryOperation::Reflection { ref plane } => operations::reflect(point, plane),
            SymmetryOperation::Glide { direction, ref plane } => {
                operations::glide(point, direction, plane)
            }
            SymmetryOperation::Screw {
                axis_direction,
                angle,
                origin,
            } => operations::screw(point, axis_direction, angle, origin),
        }
    }

    /// Applies the operation to every point
    ///
    /// Returns the first error encountered and no partial output.
    pub fn apply_all(&self, points: &[Cartesian3]) -> Result<Vec<Cartesian3>> {
        points.iter().map(|point| self.apply(*point)).collect()
    }

    /// Whether the operation preserves handedness
    pub fn is_proper(&self) -> bool {
        matches!(
            self,
            SymmetryOperation::Translation { .. }
                | SymmetryOperation::Rotation { .. }
                | SymmetryOperation::Screw { .. }
        )
    }
}
