//! Geometric symmetry operations on Cartesian points
//!
//! # Main Components
//!
//! - `translation`: homogeneous 4×4 translation, the building block every
//!   other operation uses to move its local origin
//! - `rotation`: Rodrigues rotation about an arbitrary axis
//! - `inversion`: inversion through a centre, and rotoinversion
//! - `reflection`: mirror through a plane given by three points
//! - `compound`: glide and screw

pub mod compound;
pub mod inversion;
pub mod reflection;
pub mod rotation;
pub mod translation;

// Re-export the operations for convenience
pub use self::compound::{glide, screw};
pub use self::inversion::{invert, rotoinvert};
pub use self::reflection::{reflect, PlanePoints};
pub use self::rotation::{rotate, rotation_matrix};
pub use self::translation::{translate, translation_matrix};
