//! Fluid property errors.

use thiserror::Error;
use tp_curve::CurveError;
use tp_eos::EosError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Name matched none of the known fluids or aliases.
    #[error("Unsupported fluid '{name}' (expected acetone/ace or decafluoropentane/dfp)")]
    UnsupportedFluid { name: String },

    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the range covered by the fluid's data.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Equation-of-state failure (domain, non-convergence, bad argument).
    #[error("Equation of state error: {0}")]
    Eos(#[from] EosError),

    /// Boiling curve could not be built.
    #[error("Boiling curve error: {0}")]
    Curve(#[from] CurveError),
}

impl FluidError {
    /// True when the Newton pressure inversion gave up; callers may retry
    /// with a looser tolerance or a different starting guess.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, FluidError::Eos(EosError::NonConvergence { .. }))
    }

    /// True when an input drove a correlation outside its valid range.
    pub fn is_domain(&self) -> bool {
        matches!(self, FluidError::Eos(EosError::Domain { .. }))
    }
}
