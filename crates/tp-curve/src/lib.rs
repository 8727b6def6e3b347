//! tp-curve: boiling-point curves for tait-props.
//!
//! A boiling curve maps an absolute pressure [Pa] to the temperature [K] at
//! which the fluid boils. The equation-of-state solver only ever sees the
//! [`BoilingCurve`] trait; this crate supplies the monotonic tabulated
//! interpolator behind it and an Antoine-fit generator for fluids that are
//! described by a vapor-pressure equation instead of measured data.

pub mod antoine;
pub mod error;
pub mod table;

pub use antoine::AntoineCoefficients;
pub use error::{CurveError, CurveResult};
pub use table::{Extrapolation, TabulatedCurve};

/// Pressure → boiling temperature lookup.
///
/// Implementations must be pure lookups (no interior mutation) so that a
/// single curve can be queried from several threads at once. The solver may
/// submit any pressure while iterating, including negative or overshoot
/// values; implementations should answer with a temperature rather than
/// panic. Non-finite input may yield a non-finite output, which callers
/// treat as a domain failure.
pub trait BoilingCurve: Send + Sync {
    /// Boiling temperature [K] at `pressure_pa` [Pa].
    fn temperature_at(&self, pressure_pa: f64) -> f64;
}

impl<C: BoilingCurve + ?Sized> BoilingCurve for &C {
    fn temperature_at(&self, pressure_pa: f64) -> f64 {
        (**self).temperature_at(pressure_pa)
    }
}

impl<C: BoilingCurve + ?Sized> BoilingCurve for Box<C> {
    fn temperature_at(&self, pressure_pa: f64) -> f64 {
        (**self).temperature_at(pressure_pa)
    }
}
