//! Mirror reflection through an arbitrary plane
//!
//! A plane is given by three points lying on it. Reflection moves the plane
//! onto the canonical `xy`-plane, mirrors with `diag(1, 1, -1)`, and moves
//! everything back:
//!
//! 1. translate so the first plane point sits at the origin
//! 2. rotate the plane normal onto `+z`
//! 3. mirror through `xy`
//! 4. undo the rotation
//! 5. undo the translation

use super::rotation::rotate;
use super::translation::translate;
use crate::coordinates::Cartesian3;
use crate::errors::{shape_err, Result, SymmetryError};
use log::{debug, trace};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Three points that define a plane
///
/// The points are not checked at construction; collinear or coincident points
/// are reported as [`SymmetryError::CollinearPlanePoints`] when the plane is
/// used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanePoints(pub [Cartesian3; 3]);

impl PlanePoints {
    /// Collects three points without checking them; see [`PlanePoints::check_collinear`]
    pub fn new(a: Cartesian3, b: Cartesian3, c: Cartesian3) -> Self {
        PlanePoints([a, b, c])
    }

    /// Point the reflection frame is anchored to
    pub fn anchor(&self) -> Cartesian3 {
        self.0[0]
    }

    /// Fails if the points do not span a plane
    ///
    /// The sorted edge lengths `a <= b <= c` of the triangle formed by the
    /// points are compared with `a + b == c`; equality is the degenerate
    /// triangle, i.e. collinear or coincident points.
    pub fn check_collinear(&self) -> Result<()> {
        let [p0, p1, p2] = self.0;
        let mut edges = [p1.distance(&p0), p2.distance(&p0), p2.distance(&p1)];
        edges.sort_by(f64::total_cmp);

        if edges[0] + edges[1] == edges[2] {
            debug!("Plane points {:?} are collinear (edges {:?})", self.0, edges);
            return Err(SymmetryError::CollinearPlanePoints);
        }
        Ok(())
    }

    /// Unit normal of the plane, `(p1 - p0) × (p2 - p0)` normalized
    pub fn normal(&self) -> Result<Cartesian3> {
        self.check_collinear()?;
        let [p0, p1, p2] = self.0;
        // Nearly collinear points can pass the exact edge test and still
        // produce a zero cross product.
        (p1 - p0)
            .cross(&(p2 - p0))
            .normalize()
            .ok_or(SymmetryError::CollinearPlanePoints)
    }
}

impl From<[Cartesian3; 3]> for PlanePoints {
    fn from(points: [Cartesian3; 3]) -> Self {
        PlanePoints(points)
    }
}

impl TryFrom<&[Cartesian3]> for PlanePoints {
    type Error = SymmetryError;

    fn try_from(points: &[Cartesian3]) -> Result<Self> {
        match points {
            [a, b, c] => Ok(PlanePoints::new(*a, *b, *c)),
            _ => Err(shape_err(
                "plane_points",
                format!("expected 3 points, found {}", points.len()),
            )),
        }
    }
}

/// Reflects `point` through the plane defined by `plane`
///
/// # Examples
///
/// ```rust
/// use symmop::coordinates::Cartesian3;
/// use symmop::operations::{reflect, PlanePoints};
///
/// // The plane x = 1
/// let plane = PlanePoints::new(
///     Cartesian3::new(1.0, 0.0, 0.0),
///     Cartesian3::new(1.0, 1.0, 0.0),
///     Cartesian3::new(1.0, 0.0, 1.0),
/// );
/// let reflected = reflect(Cartesian3::new(3.0, 2.0, 5.0), &plane).unwrap();
/// assert!(reflected.max_abs_diff(&Cartesian3::new(-1.0, 2.0, 5.0)) < 1e-12);
/// ```
pub fn reflect(point: Cartesian3, plane: &PlanePoints) -> Result<Cartesian3> {
    let normal = plane.normal()?;
    let anchor = plane.anchor();
    let shifted = translate(point, -anchor);

    let z = Cartesian3::unit_z();
    let axis = z.cross(&normal);
    let angle = normal.dot(&z).clamp(-1.0, 1.0).acos();

    let mirror = Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, -1.0));

    let reflected = if axis.magnitude() == 0.0 {
        // Normal is already ±z: the rotation into the canonical frame is the
        // identity whatever the angle, so skip it instead of rotating about a
        // zero-length axis.
        debug!("Plane normal {:?} is parallel to z, mirroring without frame rotation", normal);
        Cartesian3::from_vector3(mirror * shifted.to_vector3())
    } else {
        trace!("Rotating plane normal {:?} onto z by {} rad", normal, angle);
        let canonical = rotate(shifted, axis, -angle, Cartesian3::origin())?;
        let mirrored = Cartesian3::from_vector3(mirror * canonical.to_vector3());
        rotate(mirrored, axis, angle, Cartesian3::origin())?
    };

    Ok(translate(reflected, anchor))
}
