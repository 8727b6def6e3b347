//! Equation-of-state errors.

use thiserror::Error;
use tp_core::CoreError;

/// Result type for equation-of-state operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors raised by the correlations and the solver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Input or intermediate outside the correlation's valid range
    /// (T ≥ T_c, log of a non-positive argument, negative sound-speed radicand).
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Newton iteration hit its cap or stalled before meeting the tolerance.
    #[error("Newton iteration did not converge after {iterations} iterations (last step {last_step} Pa)")]
    NonConvergence { iterations: usize, last_step: f64 },

    /// Invalid argument (non-finite input, non-positive density, bad config).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl EosError {
    pub fn is_domain(&self) -> bool {
        matches!(self, EosError::Domain { .. })
    }
}

impl From<CoreError> for EosError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => EosError::Domain { what, value },
            CoreError::InvalidArg { what } | CoreError::Invariant { what } => {
                EosError::InvalidArg { what }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::Domain {
            what: "reduced temperature",
            value: 1.2,
        };
        assert!(err.to_string().contains("reduced temperature"));

        let err = EosError::NonConvergence {
            iterations: 100,
            last_step: 3.5,
        };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn non_finite_core_error_is_domain() {
        let err: EosError = CoreError::NonFinite {
            what: "molar volume",
            value: f64::NAN,
        }
        .into();
        assert!(matches!(err, EosError::Domain { what: "molar volume", .. }));
    }
}
