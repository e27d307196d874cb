//! Error types for symmetry operations
//!
//! Every public operation reports failures through [`SymmetryError`]. The
//! variants are distinguishable so calling code can branch on the kind of
//! failure instead of parsing messages.

use thiserror::Error;

/// Main error type for symmetry operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// A vector argument does not have exactly 3 components, or a plane
    /// argument does not have exactly 3 points
    #[error("Invalid shape for argument '{argument}': {reason}")]
    InvalidShape {
        /// Name of the offending argument
        argument: String,
        /// What was wrong with it
        reason: String,
    },

    /// A supplied value cannot be converted to a floating-point number
    #[error("Invalid type for argument '{argument}': {value} is not a number")]
    InvalidType {
        /// Name of the offending argument
        argument: String,
        /// Rendering of the rejected value
        value: String,
    },

    /// The rotation axis direction has zero magnitude
    #[error("The magnitude of the rotation axis vector is zero")]
    DegenerateAxis,

    /// The three points given for a plane are collinear or coincident
    #[error("Provided plane points are collinear")]
    CollinearPlanePoints,
}

/// Discriminant of a [`SymmetryError`], for callers that only need the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SymmetryError::InvalidShape`]
    InvalidShape,
    /// See [`SymmetryError::InvalidType`]
    InvalidType,
    /// See [`SymmetryError::DegenerateAxis`]
    DegenerateAxis,
    /// See [`SymmetryError::CollinearPlanePoints`]
    CollinearPlanePoints,
}

impl SymmetryError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SymmetryError::InvalidShape { .. } => ErrorKind::InvalidShape,
            SymmetryError::InvalidType { .. } => ErrorKind::InvalidType,
            SymmetryError::DegenerateAxis => ErrorKind::DegenerateAxis,
            SymmetryError::CollinearPlanePoints => ErrorKind::CollinearPlanePoints,
        }
    }
}

/// Result type for symmetry operations
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Helper to build an [`SymmetryError::InvalidShape`]
pub fn shape_err(argument: impl Into<String>, reason: impl Into<String>) -> SymmetryError {
    SymmetryError::InvalidShape {
        argument: argument.into(),
        reason: reason.into(),
    }
}

/// Helper to build an [`SymmetryError::InvalidType`]
pub fn type_err(argument: impl Into<String>, value: impl ToString) -> SymmetryError {
    SymmetryError::InvalidType {
        argument: argument.into(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = shape_err("point", "expected 3 components, found 2");
        assert_eq!(
            err.to_string(),
            "Invalid shape for argument 'point': expected 3 components, found 2"
        );

        let err = type_err("offset", "\"abc\"");
        assert_eq!(
            err.to_string(),
            "Invalid type for argument 'offset': \"abc\" is not a number"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(shape_err("a", "b").kind(), ErrorKind::InvalidShape);
        assert_eq!(type_err("a", "b").kind(), ErrorKind::InvalidType);
        assert_eq!(SymmetryError::DegenerateAxis.kind(), ErrorKind::DegenerateAxis);
        assert_eq!(
            SymmetryError::CollinearPlanePoints.kind(),
            ErrorKind::CollinearPlanePoints
        );
    }
}
