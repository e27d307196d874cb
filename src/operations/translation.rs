//! Affine translation in homogeneous coordinates

use crate::coordinates::Cartesian3;
use nalgebra::{Matrix4, Vector4};

/// Builds the 4×4 homogeneous translation matrix with `offset` in the last column
pub fn translation_matrix(offset: Cartesian3) -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, 0.0, offset.x, //
        0.0, 1.0, 0.0, offset.y, //
        0.0, 0.0, 1.0, offset.z, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Translates a point by `offset`
///
/// The point is lifted to `[x, y, z, 1]`, multiplied by the homogeneous
/// translation matrix and the homogeneous coordinate is dropped again.
///
/// # Examples
///
/// ```rust
/// use symmop::coordinates::Cartesian3;
/// use symmop::operations::translate;
///
/// let moved = translate(Cartesian3::new(1.0, 2.0, 3.0), Cartesian3::new(0.5, 0.0, -3.0));
/// assert_eq!(moved, Cartesian3::new(1.5, 2.0, 0.0));
/// ```
pub fn translate(point: Cartesian3, offset: Cartesian3) -> Cartesian3 {
    let homogeneous = Vector4::new(point.x, point.y, point.z, 1.0);
    let moved = translation_matrix(offset) * homogeneous;
    Cartesian3::new(moved.x, moved.y, moved.z)
}
