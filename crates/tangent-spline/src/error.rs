//! Error types for spline operations.

use std::fmt;

/// Errors reported by [`BezierSpline`](crate::BezierSpline) operations.
///
/// These are contract violations on the caller's side. Nothing is retried
/// and a failed call leaves the spline untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// A point, mode or anchor index is outside its valid range.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of valid slots (valid indices are `0..len`).
        len: usize,
    },

    /// The operation or imported data would break the point/mode layout.
    InvalidStructure {
        /// Description of the violated constraint.
        reason: String,
    },

    /// A [`SplineConfig`](crate::SplineConfig) value is out of range.
    InvalidConfig {
        /// Description of the rejected field.
        reason: String,
    },

    /// A direction was requested where the curve velocity is zero.
    DegenerateTangent {
        /// The global curve parameter that was queried.
        t: f32,
    },
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range (len {})", index, len)
            }
            SplineError::InvalidStructure { reason } => {
                write!(f, "Invalid spline structure: {}", reason)
            }
            SplineError::InvalidConfig { reason } => {
                write!(f, "Invalid spline config: {}", reason)
            }
            SplineError::DegenerateTangent { t } => {
                write!(f, "Degenerate tangent at t = {}: velocity is zero", t)
            }
        }
    }
}

impl std::error::Error for SplineError {}

impl SplineError {
    pub(crate) fn invalid_structure(reason: impl Into<String>) -> Self {
        SplineError::InvalidStructure {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        SplineError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type alias for spline operations.
pub type SplineResult<T> = Result<T, SplineError>;
