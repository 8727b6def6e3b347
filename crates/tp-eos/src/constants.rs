//! Per-fluid constants consumed by the correlations.

use crate::error::EosResult;
use tp_core::{ensure_finite, ensure_positive};

/// Critical constants, molar mass and acentric factors of a pure fluid.
///
/// Immutable once built; the two acentric factors feed the density and
/// sound-speed paths respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidConstants {
    /// Critical pressure P_c [Pa]
    pub critical_pressure_pa: f64,
    /// Critical temperature T_c [K]
    pub critical_temperature_k: f64,
    /// Molar mass M [kg/mol]
    pub molar_mass_kg_per_mol: f64,
    /// Acentric factor used for density (ω_ρ)
    pub omega_density: f64,
    /// Acentric factor used for speed of sound (ω_c)
    pub omega_sound: f64,
}

impl FluidConstants {
    /// Validate and build a constant set.
    pub fn new(
        critical_pressure_pa: f64,
        critical_temperature_k: f64,
        molar_mass_kg_per_mol: f64,
        omega_density: f64,
        omega_sound: f64,
    ) -> EosResult<Self> {
        Ok(Self {
            critical_pressure_pa: ensure_positive(critical_pressure_pa, "critical pressure")?,
            critical_temperature_k: ensure_positive(
                critical_temperature_k,
                "critical temperature",
            )?,
            molar_mass_kg_per_mol: ensure_positive(molar_mass_kg_per_mol, "molar mass")?,
            omega_density: ensure_finite(omega_density, "density acentric factor")?,
            omega_sound: ensure_finite(omega_sound, "sound-speed acentric factor")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EosError;

    #[test]
    fn accepts_physical_constants() {
        let c = FluidConstants::new(4_690_000.0, 508.1, 0.0580791, 0.625, 0.347).unwrap();
        assert_eq!(c.critical_temperature_k, 508.1);
        assert_eq!(c.omega_sound, 0.347);
    }

    #[test]
    fn rejects_non_physical_constants() {
        assert!(matches!(
            FluidConstants::new(-1.0, 508.1, 0.058, 0.6, 0.3),
            Err(EosError::InvalidArg {
                what: "critical pressure"
            })
        ));
        assert!(FluidConstants::new(4.69e6, 0.0, 0.058, 0.6, 0.3).is_err());
        assert!(FluidConstants::new(4.69e6, 508.1, 0.058, f64::NAN, 0.3).is_err());
    }
}
