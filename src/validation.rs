//! Input validation for dynamically-typed arguments
//!
//! Arguments arrive as [`serde_json::Value`]s. A leaf is accepted when it is
//! a JSON number or a string holding a number; `null`, booleans, arrays and
//! objects are rejected. Vector arguments must be arrays of exactly three
//! leaves and plane arguments arrays of exactly three vectors.
//!
//! Callers check the shape of every argument before converting any leaf, so
//! an arity problem is always reported as [`SymmetryError::InvalidShape`]
//! even if a later argument also holds a non-numeric value.
//!
//! [`SymmetryError::InvalidShape`]: crate::errors::SymmetryError::InvalidShape

use crate::coordinates::Cartesian3;
use crate::errors::{shape_err, type_err, Result};
use crate::operations::PlanePoints;
use log::debug;
use serde_json::Value;

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Converts a single leaf value to `f64`
pub fn scalar(argument: &str, value: &Value) -> Result<f64> {
    let converted = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    converted.ok_or_else(|| {
        debug!("Rejected {} for '{}': {}", describe(value), argument, value);
        type_err(argument, value)
    })
}

fn elements<'a>(argument: &str, value: &'a Value, what: &str) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) if items.len() == 3 => Ok(items),
        Value::Array(items) => Err(shape_err(
            argument,
            format!("expected 3 {}, found {}", what, items.len()),
        )),
        other => Err(shape_err(
            argument,
            format!("expected an array of 3 {}, found {}", what, describe(other)),
        )),
    }
}

/// Checks that `value` is an array of exactly three elements
pub fn check_vector_shape(argument: &str, value: &Value) -> Result<()> {
    elements(argument, value, "components").map(|_| ())
}

/// Checks that `value` is an array of exactly three three-element arrays
pub fn check_plane_shape(argument: &str, value: &Value) -> Result<()> {
    for (index, point) in elements(argument, value, "points")?.iter().enumerate() {
        check_vector_shape(&format!("{}[{}]", argument, index), point)?;
    }
    Ok(())
}

/// Converts a three-element array to a [`Cartesian3`]
pub fn vector3(argument: &str, value: &Value) -> Result<Cartesian3> {
    let items = elements(argument, value, "components")?;
    Ok(Cartesian3::new(
        scalar(argument, &items[0])?,
        scalar(argument, &items[1])?,
        scalar(argument, &items[2])?,
    ))
}

/// Converts an array of three points to [`PlanePoints`]
pub fn plane(argument: &str, value: &Value) -> Result<PlanePoints> {
    let items = elements(argument, value, "points")?;
    let mut points = [Cartesian3::origin(); 3];
    for (index, (slot, item)) in points.iter_mut().zip(items).enumerate() {
        *slot = vector3(&format!("{}[{}]", argument, index), item)?;
    }
    Ok(PlanePoints(points))
}

/// Converts a decimal precision: a finite, integral, non-negative number
pub fn precision(argument: &str, value: &Value) -> Result<u32> {
    let digits = scalar(argument, value)?;
    if digits.is_finite() && digits.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&digits) {
        Ok(digits as u32)
    } else {
        Err(type_err(argument, value))
    }
}

/// An argument to be validated, tagged with the shape it must have
#[derive(Debug, Clone, Copy)]
pub enum Argument<'a> {
    /// A single number or numeric string
    Scalar(&'a str, &'a Value),
    /// An array of exactly three numeric leaves
    Vector(&'a str, &'a Value),
    /// An array of exactly three vectors
    Plane(&'a str, &'a Value),
}

/// Validates every argument: shapes of all arguments first, then the
/// numeric leaves of all arguments
///
/// Stops at the first failure.
pub fn validate_all(arguments: &[Argument<'_>]) -> Result<()> {
    for argument in arguments {
        match *argument {
            Argument::Scalar(..) => {}
            Argument::Vector(name, value) => check_vector_shape(name, value)?,
            Argument::Plane(name, value) => check_plane_shape(name, value)?,
        }
    }
    for argument in arguments {
        match *argument {
            Argument::Scalar(name, value) => {
                scalar(name, value)?;
            }
            Argument::Vector(name, value) => {
                vector3(name, value)?;
            }
            Argument::Plane(name, value) => {
                plane(name, value)?;
            }
        }
    }
    Ok(())
}
