//! tp-eos: Tait liquid equation of state for tait-props.
//!
//! Provides:
//! - Corresponding-states correlations (Tait B/C, Hankinson-Thomson, Tait
//!   saturated volume, Riedel vapor pressure)
//! - Forward density ρ(T, P)
//! - Newton inversion P(T, ρ) with a nested boiling-curve lookup
//! - Speed of sound from a centred finite difference of the inversion
//!
//! # Units
//!
//! Everything here is plain `f64` in SI: K, Pa, kg/mol, m³/mol, kg/m³, m/s.
//! Density is `M / V` with `M` in kg/mol and `V` in m³/mol, so it comes out
//! in kg/m³ (multiply g/cm³ by 1000 to compare).
//!
//! # Example
//!
//! ```
//! use tp_curve::{AntoineCoefficients, TabulatedCurve};
//! use tp_eos::{FluidConstants, TaitEos};
//!
//! let constants = FluidConstants::new(2_070_000.0, 457.0, 0.252055032, 0.62, 0.62).unwrap();
//! let coeffs = AntoineCoefficients::new(6.43876, 1242.510, 46.568);
//! let curve = TabulatedCurve::from_antoine(coeffs, 237.0, 350.0, 1000).unwrap();
//!
//! let eos = TaitEos::new(&constants, &curve);
//! let rho = eos.density(298.15, 101_325.0, constants.omega_density).unwrap();
//! let p = eos.pressure(298.15, rho, constants.omega_density).unwrap();
//! assert!((p - 101_325.0).abs() < 1.0);
//! ```

pub mod constants;
pub mod correlations;
pub mod error;
pub mod newton;
pub mod solver;

pub use constants::FluidConstants;
pub use correlations::{
    TaitParameters, hankinson_thomson_volume, riedel_vapor_pressure, tait_constants,
    tait_reduced_volume,
};
pub use error::{EosError, EosResult};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use solver::{ReducedState, SoundSpeedConfig, TaitEos};
