//! Liquid property pack and validation helpers.

use crate::error::{FluidError, FluidResult};
use tp_core::units::{Density, Pressure, Temperature, Velocity};

/// Properties evaluated together at one (T, P) state.
///
/// Built by [`crate::Fluid::property_pack`] so callers needing density,
/// sound speed and vapor pressure at the same state go through one call.
#[derive(Clone, Debug)]
pub struct LiquidPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Density [kg/m³]
    pub rho: Density,

    /// Speed of sound [m/s]
    pub a: Velocity,

    /// Saturation pressure at `t` [Pa]
    pub p_vap: Pressure,
}

impl LiquidPropertyPack {
    pub fn new(p: Pressure, t: Temperature, rho: Density, a: Velocity, p_vap: Pressure) -> Self {
        Self {
            p,
            t,
            rho,
            a,
            p_vap,
        }
    }

    /// True when the liquid sits above its saturation pressure.
    pub fn is_subcooled(&self) -> bool {
        self.p > self.p_vap
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.2}K,ρ={:.3}kg/m³,a={:.1}m/s,Pv={:.0}Pa)",
            self.p.value, self.t.value, self.rho.value, self.a.value, self.p_vap.value
        )
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: f64) -> FluidResult<f64> {
        if !p.is_finite() || p <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(p)
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: f64) -> FluidResult<f64> {
        if !t.is_finite() || t <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(t)
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: f64) -> FluidResult<f64> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(rho)
    }

    pub fn validate_speed_of_sound(a: f64) -> FluidResult<f64> {
        if !a.is_finite() || a <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "speed of sound must be positive and finite",
            });
        }
        Ok(a)
    }

    pub fn validate_omega(omega: f64) -> FluidResult<f64> {
        if !omega.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "acentric factor must be finite",
            });
        }
        Ok(omega)
    }
}
