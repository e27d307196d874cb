//! Operations on dynamically-typed arguments
//!
//! Each function mirrors one of the typed operations in
//! [`crate::operations`] and [`crate::fractional`], but accepts
//! [`serde_json::Value`] arguments as they would come out of a decoded
//! document: numbers, numeric strings, or arrays of those. All arguments are
//! validated up front (shapes first, then numeric leaves) before any
//! arithmetic runs. Optional origins and centres default to the global origin.
//!
//! ```rust
//! use serde_json::json;
//! use symmop::{dynamic, coordinates::Cartesian3, ErrorKind};
//!
//! let moved = dynamic::translate(&json!([1, "2", 3.0]), &json!([0.5, 0, 0])).unwrap();
//! assert_eq!(moved, Cartesian3::new(1.5, 2.0, 3.0));
//!
//! let err = dynamic::translate(&json!([1, 2]), &json!([0, 0, 0])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidShape);
//! ```

use crate::coordinates::Cartesian3;
use crate::errors::Result;
use crate::fractional;
use crate::operations;
use crate::validation::{self, validate_all, Argument};
use serde_json::Value;

fn optional_vector(argument: &str, value: Option<&Value>) -> Result<Cartesian3> {
    match value {
        Some(value) => validation::vector3(argument, value),
        None => Ok(Cartesian3::origin()),
    }
}

fn optional_argument<'a>(argument: &'a str, value: Option<&'a Value>) -> Vec<Argument<'a>> {
    value
        .map(|value| Argument::Vector(argument, value))
        .into_iter()
        .collect()
}

/// See [`operations::translate`]
pub fn translate(point: &Value, offset: &Value) -> Result<Cartesian3> {
    validate_all(&[Argument::Vector("point", point), Argument::Vector("offset", offset)])?;
    Ok(operations::translate(
        validation::vector3("point", point)?,
        validation::vector3("offset", offset)?,
    ))
}

/// See [`operations::rotate`]
pub fn rotate(
    point: &Value,
    axis_direction: &Value,
    angle: &Value,
    axis_origin: Option<&Value>,
) -> Result<Cartesian3> {
    let mut arguments = vec![
        Argument::Vector("point", point),
        Argument::Vector("axis_direction", axis_direction),
        Argument::Scalar("angle", angle),
    ];
    arguments.extend(optional_argument("axis_origin", axis_origin));
    validate_all(&arguments)?;

    operations::rotate(
        validation::vector3("point", point)?,
        validation::vector3("axis_direction", axis_direction)?,
        validation::scalar("angle", angle)?,
        optional_vector("axis_origin", axis_origin)?,
    )
}

/// See [`operations::invert`]
pub fn invert(point: &Value, center: Option<&Value>) -> Result<Cartesian3> {
    let mut arguments = vec![Argument::Vector("point", point)];
    arguments.extend(optional_argument("center", center));
    validate_all(&arguments)?;

    Ok(operations::invert(
        validation::vector3("point", point)?,
        optional_vector("center", center)?,
    ))
}

/// See [`operations::rotoinvert`]
pub fn rotoinvert(
    point: &Value,
    axis_direction: &Value,
    angle: &Value,
    center: Option<&Value>,
) -> Result<Cartesian3> {
    let mut arguments = vec![
        Argument::Vector("point", point),
        Argument::Vector("axis_direction", axis_direction),
        Argument::Scalar("angle", angle),
    ];
    arguments.extend(optional_argument("center", center));
    validate_all(&arguments)?;

    operations::rotoinvert(
        validation::vector3("point", point)?,
        validation::vector3("axis_direction", axis_direction)?,
        validation::scalar("angle", angle)?,
        optional_vector("center", center)?,
    )
}

/// See [`operations::reflect`]
pub fn reflect(point: &Value, plane_points: &Value) -> Result<Cartesian3> {
    validate_all(&[
        Argument::Vector("point", point),
        Argument::Plane("plane_points", plane_points),
    ])?;

    operations::reflect(
        validation::vector3("point", point)?,
        &validation::plane("plane_points", plane_points)?,
    )
}

/// See [`operations::glide`]
pub fn glide(point: &Value, direction: &Value, plane_points: &Value) -> Result<Cartesian3> {
    validate_all(&[
        Argument::Vector("point", point),
        Argument::Vector("direction", direction),
        Argument::Plane("plane_points", plane_points),
    ])?;

    operations::glide(
        validation::vector3("point", point)?,
        validation::vector3("direction", direction)?,
        &validation::plane("plane_points", plane_points)?,
    )
}

/// See [`operations::screw`]
pub fn screw(
    point: &Value,
    axis_direction: &Value,
    angle: &Value,
    origin: Option<&Value>,
) -> Result<Cartesian3> {
    let mut arguments = vec![
        Argument::Vector("point", point),
        Argument::Vector("axis_direction", axis_direction),
        Argument::Scalar("angle", angle),
    ];
    arguments.extend(optional_argument("origin", origin));
    validate_all(&arguments)?;

    operations::screw(
        validation::vector3("point", point)?,
        validation::vector3("axis_direction", axis_direction)?,
        validation::scalar("angle", angle)?,
        optional_vector("origin", origin)?,
    )
}

/// See [`fractional::clean`]
pub fn clean(fractional_point: &Value, precision: &Value) -> Result<Cartesian3> {
    validate_all(&[Argument::Vector("fractional_point", fractional_point)])?;
    let precision = validation::precision("precision", precision)?;

    fractional::clean(validation::vector3("fractional_point", fractional_point)?, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, SymmetryError};
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_translate_accepts_mixed_leaves() {
        let moved = translate(&json!([1, "2.5", -3.0]), &json!(["1", 1, 1])).unwrap();
        assert_eq!(moved, Cartesian3::new(2.0, 3.5, -2.0));
    }

    #[test]
    fn test_rotate_defaults_to_global_origin() {
        let point = json!([1, 0, 0]);
        let axis = json!([0, 0, 1]);
        let with_default = rotate(&point, &axis, &json!(1.0), None).unwrap();
        let explicit = rotate(&point, &axis, &json!("1.0"), Some(&json!([0, 0, 0]))).unwrap();
        assert_eq!(with_default, explicit);
        assert_relative_eq!(with_default.x, 1.0_f64.cos(), epsilon = 1e-12);
        assert_relative_eq!(with_default.y, 1.0_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_errors() {
        let point = json!([1, 0, 0]);
        let axis = json!([0, 0, 1]);
        let angle = json!(1.0);

        let err = rotate(&point, &json!([0, 0, 0]), &angle, None).unwrap_err();
        assert_eq!(err, SymmetryError::DegenerateAxis);

        let err = rotate(&point, &axis, &json!("quarter"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        // A bad origin is caught even though every earlier argument is fine
        let err = rotate(&point, &axis, &angle, Some(&json!([0, 0]))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        let err = rotate(&point, &axis, &angle, Some(&json!([0, 0, null]))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_invert_and_rotoinvert() {
        assert_eq!(
            invert(&json!([1, 2, 3]), None).unwrap(),
            Cartesian3::new(-1.0, -2.0, -3.0)
        );
        assert_eq!(
            invert(&json!([1, 2, 3]), Some(&json!([1, 1, 1]))).unwrap(),
            Cartesian3::new(1.0, 0.0, -1.0)
        );

        let quarter = json!(std::f64::consts::FRAC_PI_2);
        let result = rotoinvert(&json!([1, 0, 1]), &json!([0, 0, 1]), &quarter, None).unwrap();
        assert!(result.max_abs_diff(&Cartesian3::new(0.0, -1.0, -1.0)) < 1e-12);

        let err =
            rotoinvert(&json!([1, 0, 1]), &json!([0, 0, 1, 0]), &json!(1.0), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
    }

    #[test]
    fn test_reflect_and_glide() {
        let plane = json!([[0, 0, 0], [1, 0, 0], [0, 1, 0]]);
        assert_eq!(
            reflect(&json!([1, 2, 3]), &plane).unwrap(),
            Cartesian3::new(1.0, 2.0, -3.0)
        );
        assert_eq!(
            glide(&json!([1, 2, 3]), &json!([0.5, 0, 0]), &plane).unwrap(),
            Cartesian3::new(1.5, 2.0, -3.0)
        );

        let collinear = json!([[0, 0, 0], [0, 0, 0], [0, 1, 0]]);
        let err = reflect(&json!([1, 2, 3]), &collinear).unwrap_err();
        assert_eq!(err, SymmetryError::CollinearPlanePoints);

        let short_plane = json!([[0, 0, 0], [1, 0, 0]]);
        let err = glide(&json!([1, 2, 3]), &json!([1, 0, 0]), &short_plane).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);

        let text_plane = json!([[0, 0, 0], [1, 0, 0], [0, "y", 0]]);
        let err = reflect(&json!([1, 2, 3]), &text_plane).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[test]
    fn test_screw() {
        let half_turn = json!(std::f64::consts::PI);
        let result = screw(&json!([1, 0, 0]), &json!([0, 0, 2]), &half_turn, None).unwrap();
        assert!(result.max_abs_diff(&Cartesian3::new(-1.0, 0.0, 2.0)) < 1e-12);
    }

    #[test]
    fn test_clean() {
        let cleaned = clean(&json!([1.0, -0.25, 2.999999]), &json!(2)).unwrap();
        assert_eq!(cleaned, Cartesian3::new(0.0, 0.75, 0.0));

        let err = clean(&json!([1.0, -0.25]), &json!(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidShape);
        let err = clean(&json!([1.0, "x", 0.0]), &json!(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);
        let err = clean(&json!([1.0, 0.5, 0.0]), &json!("two")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        // Numeric strings for infinities and NaN parse, but cannot be folded
        for text in ["inf", "-inf", "NaN"] {
            let err = clean(&json!([text, 0, 0]), &json!(2)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidType);
        }
    }
}
