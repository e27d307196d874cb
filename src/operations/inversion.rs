//! Point inversion and rotoinversion

use super::rotation::rotate;
use super::translation::translate;
use crate::coordinates::Cartesian3;
use crate::errors::Result;
use nalgebra::Matrix3;

/// Inverts `point` through the inversion centre `center`
///
/// Total over all inputs: translate by `-center`, multiply by `-I₃`,
/// translate back.
pub fn invert(point: Cartesian3, center: Cartesian3) -> Cartesian3 {
    let shifted = translate(point, -center);
    let inverted = Cartesian3::from_vector3(-Matrix3::<f64>::identity() * shifted.to_vector3());
    translate(inverted, center)
}

/// Rotates `point` about an axis through `center`, then inverts the result
/// through the same `center`
///
/// Fails with [`crate::SymmetryError::DegenerateAxis`] for a zero-length axis.
pub fn rotoinvert(
    point: Cartesian3,
    axis_direction: Cartesian3,
    angle: f64,
    center: Cartesian3,
) -> Result<Cartesian3> {
    let rotated = rotate(point, axis_direction, angle, center)?;
    Ok(invert(rotated, center))
}
