//! Rotation about an arbitrary axis
//!
//! Rotations use the Rodrigues form
//!
//! ```text
//! R = I·cosθ + (1 - cosθ)·n nᵗ + sinθ·[n]ₓ
//! ```
//!
//! where `n` is the normalized axis direction and `[n]ₓ` its cross-product
//! matrix. Angles are in radians and right-handed: a positive angle turns
//! counter-clockwise when looking down the axis from its positive end.
//!
//! An axis that does not pass through the global origin is handled by the
//! shift-rotate-shift pattern: translate by `-origin`, rotate, translate back.

use super::translation::translate;
use crate::coordinates::Cartesian3;
use crate::errors::{Result, SymmetryError};
use nalgebra::Matrix3;

/// Builds the Rodrigues rotation matrix for `axis_direction` and `angle`
///
/// The direction need not be normalized. Fails with
/// [`SymmetryError::DegenerateAxis`] if it has zero magnitude.
pub fn rotation_matrix(axis_direction: Cartesian3, angle: f64) -> Result<Matrix3<f64>> {
    let n = axis_direction
        .normalize()
        .ok_or(SymmetryError::DegenerateAxis)?
        .to_vector3();

    let (sin, cos) = angle.sin_cos();
    Ok(Matrix3::identity() * cos + n * n.transpose() * (1.0 - cos) + n.cross_matrix() * sin)
}

/// Rotates `point` by `angle` radians about the axis with direction
/// `axis_direction` passing through `axis_origin`
///
/// A zero-length axis is rejected for every angle, zero included. A zero angle
/// with a valid axis returns `point` unchanged, bit for bit.
///
/// # Examples
///
/// ```rust
/// use symmop::coordinates::Cartesian3;
/// use symmop::operations::rotate;
/// use std::f64::consts::FRAC_PI_2;
///
/// let rotated = rotate(
///     Cartesian3::new(1.0, 0.0, 0.0),
///     Cartesian3::unit_z(),
///     FRAC_PI_2,
///     Cartesian3::origin(),
/// )
/// .unwrap();
/// assert!(rotated.max_abs_diff(&Cartesian3::new(0.0, 1.0, 0.0)) < 1e-15);
/// ```
pub fn rotate(
    point: Cartesian3,
    axis_direction: Cartesian3,
    angle: f64,
    axis_origin: Cartesian3,
) -> Result<Cartesian3> {
    let matrix = rotation_matrix(axis_direction, angle)?;
    if angle == 0.0 {
        return Ok(point);
    }

    let shifted = translate(point, -axis_origin);
    let rotated = Cartesian3::from_vector3(matrix * shifted.to_vector3());
    Ok(translate(rotated, axis_origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Unit};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn random_point(rng: &mut StdRng) -> Cartesian3 {
        Cartesian3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        )
    }

    #[rstest]
    #[case(
        Cartesian3::new(1.0, 0.0, 0.0),
        Cartesian3::unit_z(),
        FRAC_PI_2,
        Cartesian3::new(0.0, 1.0, 0.0)
    )]
    #[case(
        Cartesian3::new(0.0, 1.0, 0.0),
        Cartesian3::new(1.0, 0.0, 0.0),
        FRAC_PI_2,
        Cartesian3::new(0.0, 0.0, 1.0)
    )]
    #[case(
        Cartesian3::new(0.0, 0.0, 1.0),
        Cartesian3::new(0.0, 1.0, 0.0),
        FRAC_PI_2,
        Cartesian3::new(1.0, 0.0, 0.0)
    )]
    #[case(
        Cartesian3::new(1.0, 2.0, 3.0),
        Cartesian3::new(0.0, 0.0, 7.0),
        PI,
        Cartesian3::new(-1.0, -2.0, 3.0)
    )]
    #[case(
        Cartesian3::new(1.0, 0.0, 0.0),
        Cartesian3::new(1.0, 1.0, 1.0),
        2.0 * PI / 3.0,
        Cartesian3::new(0.0, 1.0, 0.0)
    )]
    fn test_rotate_about_origin(
        #[case] point: Cartesian3,
        #[case] axis: Cartesian3,
        #[case] angle: f64,
        #[case] expected: Cartesian3,
    ) {
        let rotated = rotate(point, axis, angle, Cartesian3::origin()).unwrap();
        assert_relative_eq!(rotated.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_about_offset_axis() {
        // Quarter turn about a z-parallel axis through (1, 1, 0)
        let rotated = rotate(
            Cartesian3::new(2.0, 1.0, 5.0),
            Cartesian3::unit_z(),
            FRAC_PI_2,
            Cartesian3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, 5.0, epsilon = 1e-12);

        // Points on the axis stay put
        let on_axis = Cartesian3::new(1.0, 1.0, -3.0);
        let axis_origin = Cartesian3::new(1.0, 1.0, 0.0);
        let rotated = rotate(on_axis, Cartesian3::unit_z(), 1.234, axis_origin).unwrap();
        assert!(rotated.max_abs_diff(&on_axis) < 1e-12);
    }

    #[test]
    fn test_zero_axis_is_rejected() {
        for angle in [0.0, 0.5, PI, -3.0] {
            let result = rotate(
                Cartesian3::new(1.0, 2.0, 3.0),
                Cartesian3::origin(),
                angle,
                Cartesian3::new(1.0, 0.0, 0.0),
            );
            assert_eq!(result, Err(SymmetryError::DegenerateAxis));
        }
        assert!(rotation_matrix(Cartesian3::origin(), 1.0).is_err());
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let point = Cartesian3::new(0.3, -1.7, 2.2);
        let axis = Cartesian3::new(1.0, 2.0, -0.5);
        let rotated = rotate(point, axis, 0.0, Cartesian3::new(4.0, 4.0, 4.0)).unwrap();
        assert_eq!(rotated, point);

        // Shifting to an off-origin axis and back would round 0.3 to 0.29999999999999993
        let point = Cartesian3::new(0.1, 0.2, 0.3);
        let origin = Cartesian3::new(0.3, 0.7, 0.9);
        assert_eq!(rotate(point, Cartesian3::unit_z(), 0.0, origin).unwrap(), point);
        assert_eq!(rotate(point, Cartesian3::unit_z(), -0.0, origin).unwrap(), point);
    }

    #[test]
    fn test_matrix_matches_nalgebra_rotation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let axis = random_point(&mut rng);
            let angle = rng.gen_range(-2.0 * PI..2.0 * PI);
            let ours = rotation_matrix(axis, angle).unwrap();
            let theirs = Rotation3::from_axis_angle(&Unit::new_normalize(axis.to_vector3()), angle);
            assert_relative_eq!(ours, *theirs.matrix(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matrix_is_proper_orthogonal() {
        let matrix = rotation_matrix(Cartesian3::new(0.2, -3.0, 1.1), 0.77).unwrap();
        assert_relative_eq!(matrix * matrix.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(matrix.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_round_trip_rand() {
        let mut rng = StdRng::seed_from_u64(23423);
        for _ in 0..100 {
            let point = random_point(&mut rng);
            let axis = random_point(&mut rng);
            let origin = random_point(&mut rng);
            let angle = rng.gen_range(-PI..PI);

            let there = rotate(point, axis, angle, origin).unwrap();
            let back = rotate(there, axis, -angle, origin).unwrap();
            assert_relative_eq!(back.x, point.x, epsilon = 1e-9);
            assert_relative_eq!(back.y, point.y, epsilon = 1e-9);
            assert_relative_eq!(back.z, point.z, epsilon = 1e-9);

            // Distance to the axis origin is preserved
            assert_relative_eq!(there.distance(&origin), point.distance(&origin), epsilon = 1e-9);
        }
    }
}
