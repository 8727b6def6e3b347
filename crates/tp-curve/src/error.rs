//! Curve construction errors.

use thiserror::Error;
use tp_core::CoreError;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised while building a boiling curve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Interpolation needs at least two knots.
    #[error("Curve needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },

    /// Pressure and temperature columns differ in length.
    #[error("Curve column length mismatch: {pressures} pressures vs {temperatures} temperatures")]
    LengthMismatch {
        pressures: usize,
        temperatures: usize,
    },

    /// A column is not strictly increasing.
    #[error("Curve {what} must be strictly increasing (violated at index {index})")]
    NotMonotonic { what: &'static str, index: usize },

    /// NaN or infinite entry.
    #[error("Non-finite curve value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Invalid generator argument.
    #[error("Invalid curve argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<CoreError> for CurveError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => CurveError::NonFinite { what, value },
            CoreError::InvalidArg { what } | CoreError::Invariant { what } => {
                CurveError::InvalidArg { what }
            }
        }
    }
}
