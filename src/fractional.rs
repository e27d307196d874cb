//! Fractional coordinate normalization
//!
//! Folds fractional unit-cell coordinates into `[0, 1)` at a given decimal
//! precision, so that symmetry-equivalent positions compare equal after
//! rounding.

use crate::coordinates::Cartesian3;
use crate::errors::{type_err, Result};

/// A [`Cartesian3`] read as fractional unit-cell coordinates
pub type FractionalCoordinate = Cartesian3;

/// Every finite `f64` is exactly representable with this many decimals, so
/// larger precisions format identically.
const MAX_DECIMALS: u32 = 1074;

/// Rounds `value` to `precision` decimal digits
///
/// Rounding goes through decimal formatting, so ties are resolved on the
/// exact binary value rather than on a scaled approximation.
fn round_to(value: f64, precision: u32) -> Result<f64> {
    let decimals = precision.min(MAX_DECIMALS) as usize;
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .map_err(|_| type_err("fractional_point", value))
}

/// Reduces modulo 1 into `[0, 1]`, folding `-0.0` to `0.0`
fn wrap_unit(value: f64) -> f64 {
    value.rem_euclid(1.0) + 0.0
}

fn clean_component(value: f64, precision: u32) -> Result<f64> {
    // Infinities and NaN have no position in the unit cell
    if !value.is_finite() {
        return Err(type_err("fractional_point", value));
    }
    // Wrapping a tiny negative value can land on exactly 1.0; the second
    // round-and-wrap pass folds that back to 0.
    let first = wrap_unit(round_to(value, precision)?);
    Ok(wrap_unit(round_to(first, precision)?))
}

/// Rounds each component of `fractional_point` to `precision` decimals and
/// reduces it modulo 1
///
/// Components come back in `[0, 1)`. A non-finite component fails with
/// [`crate::SymmetryError::InvalidType`].
///
/// # Examples
///
/// ```rust
/// use symmop::coordinates::Cartesian3;
/// use symmop::fractional::clean;
///
/// let cleaned = clean(Cartesian3::new(1.0, -0.25, 2.999999), 2).unwrap();
/// assert_eq!(cleaned, Cartesian3::new(0.0, 0.75, 0.0));
/// ```
pub fn clean(
    fractional_point: FractionalCoordinate,
    precision: u32,
) -> Result<FractionalCoordinate> {
    Ok(Cartesian3::new(
        clean_component(fractional_point.x, precision)?,
        clean_component(fractional_point.y, precision)?,
        clean_component(fractional_point.z, precision)?,
    ))
}
