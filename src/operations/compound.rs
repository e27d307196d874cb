//! Glide and screw operations
//!
//! Both are plain compositions of the primitive operations with a trailing
//! translation; no matrix math is repeated here.

use super::reflection::{reflect, PlanePoints};
use super::rotation::rotate;
use super::translation::translate;
use crate::coordinates::Cartesian3;
use crate::errors::Result;

/// Reflects `point` through `plane`, then translates by `direction`
///
/// `direction` is normally parallel to the plane but this is not enforced.
pub fn glide(point: Cartesian3, direction: Cartesian3, plane: &PlanePoints) -> Result<Cartesian3> {
    let reflected = reflect(point, plane)?;
    Ok(translate(reflected, direction))
}

/// Rotates `point` about the axis `axis_direction` through `origin`, then
/// translates along the axis
///
/// The translation is the raw `axis_direction` vector, not its unit vector,
/// so the axis length sets the pitch of the screw.
pub fn screw(
    point: Cartesian3,
    axis_direction: Cartesian3,
    angle: f64,
    origin: Cartesian3,
) -> Result<Cartesian3> {
    let rotated = rotate(point, axis_direction, angle, origin)?;
    Ok(translate(rotated, axis_direction))
}
