//! Per-fluid facade over the Tait solver.

use crate::catalog::{FluidCatalogEntry, VaporPressureModel, catalog_entry};
use crate::data::{
    ACETONE_BOILING_TEMPERATURES_K, ACETONE_CONSTANTS, DFP_ANTOINE, DFP_CONSTANTS,
    DFP_CURVE_SAMPLES, DFP_CURVE_SPAN_K, SPECIFIC_HEAT_J_PER_KG_K, SURFACE_TENSION_N_PER_M,
    acetone_boiling_pressures_pa,
};
use crate::error::{FluidError, FluidResult};
use crate::model::{LiquidPropertyPack, validation};
use crate::species::Species;
use tp_core::constants::{ATM_PA, T_AMBIENT_K};
use tp_core::units::{Pressure, SpecHeatCapacity, SurfaceTension, Temperature, kg_m3, mps, pa};
use tp_curve::{BoilingCurve, TabulatedCurve};
use tp_eos::{FluidConstants, NewtonConfig, NewtonResult, SoundSpeedConfig, TaitEos};
use tracing::debug;

/// A supported liquid: constants, boiling curve and solver settings.
///
/// Holds no mutable state after construction; every property call builds a
/// short-lived [`TaitEos`] over borrowed data.
#[derive(Debug, Clone)]
pub struct Fluid {
    species: Species,
    constants: FluidConstants,
    curve: TabulatedCurve,
    newton: NewtonConfig,
    sound: SoundSpeedConfig,
}

impl Fluid {
    /// Look a fluid up by name or alias (case-insensitive).
    pub fn new(name: &str) -> FluidResult<Self> {
        Self::from_species(name.parse()?)
    }

    pub fn from_species(species: Species) -> FluidResult<Self> {
        let (constants, curve) = match species {
            Species::Acetone => (
                ACETONE_CONSTANTS,
                TabulatedCurve::new(
                    acetone_boiling_pressures_pa(),
                    ACETONE_BOILING_TEMPERATURES_K.to_vec(),
                )?,
            ),
            Species::Decafluoropentane => {
                let (t_min, t_max) = DFP_CURVE_SPAN_K;
                (
                    DFP_CONSTANTS,
                    TabulatedCurve::from_antoine(DFP_ANTOINE, t_min, t_max, DFP_CURVE_SAMPLES)?,
                )
            }
        };
        let (p_lo, p_hi) = curve.pressure_range();
        debug!(
            fluid = species.key(),
            knots = curve.len(),
            p_lo,
            p_hi,
            "boiling curve ready"
        );

        Ok(Self {
            species,
            constants,
            curve,
            newton: NewtonConfig::default(),
            sound: SoundSpeedConfig::default(),
        })
    }

    pub fn with_newton_config(mut self, newton: NewtonConfig) -> FluidResult<Self> {
        newton.validate()?;
        self.newton = newton;
        Ok(self)
    }

    pub fn with_sound_speed_config(mut self, sound: SoundSpeedConfig) -> Self {
        self.sound = sound;
        self
    }

    /// Solver bound to this fluid's constants and curve.
    pub fn eos(&self) -> TaitEos<'_, TabulatedCurve> {
        TaitEos::new(&self.constants, &self.curve)
            .with_newton_config(self.newton)
            .with_sound_speed_config(self.sound)
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn catalog_entry(&self) -> &'static FluidCatalogEntry {
        catalog_entry(self.species)
    }

    pub fn constants(&self) -> &FluidConstants {
        &self.constants
    }

    pub fn curve(&self) -> &TabulatedCurve {
        &self.curve
    }

    pub fn newton_config(&self) -> &NewtonConfig {
        &self.newton
    }

    pub fn critical_pressure(&self) -> f64 {
        self.constants.critical_pressure_pa
    }

    pub fn critical_temperature(&self) -> f64 {
        self.constants.critical_temperature_k
    }

    pub fn molar_mass(&self) -> f64 {
        self.constants.molar_mass_kg_per_mol
    }

    /// Density [kg/m³] at (T, P) with the density acentric factor.
    pub fn density(&self, t_k: f64, p_pa: f64) -> FluidResult<f64> {
        self.density_at(t_k, p_pa, self.constants.omega_density)
    }

    /// Density [kg/m³] at (T, P) with an explicit acentric factor.
    pub fn density_at(&self, t_k: f64, p_pa: f64, omega: f64) -> FluidResult<f64> {
        validation::validate_temperature(t_k)?;
        validation::validate_pressure(p_pa)?;
        validation::validate_omega(omega)?;
        let rho = self.eos().density(t_k, p_pa, omega)?;
        validation::validate_density(rho)
    }

    /// Density with defaults: 298.15 K, 1 atm and the density acentric factor.
    pub fn density_with(
        &self,
        t_k: Option<f64>,
        p_pa: Option<f64>,
        omega: Option<f64>,
    ) -> FluidResult<f64> {
        self.density_at(
            t_k.unwrap_or(T_AMBIENT_K),
            p_pa.unwrap_or(ATM_PA),
            omega.unwrap_or(self.constants.omega_density),
        )
    }

    /// Pressure [Pa] at which the liquid reaches `rho` [kg/m³] at `t_k`.
    pub fn pressure(&self, t_k: f64, rho: f64) -> FluidResult<f64> {
        self.pressure_with_omega(t_k, rho, self.constants.omega_density)
    }

    pub fn pressure_with_omega(&self, t_k: f64, rho: f64, omega: f64) -> FluidResult<f64> {
        Ok(self.pressure_solve(t_k, rho, omega)?.x)
    }

    /// Pressure inversion with the Newton iteration count and final residual.
    pub fn pressure_solve(&self, t_k: f64, rho: f64, omega: f64) -> FluidResult<NewtonResult> {
        validation::validate_temperature(t_k)?;
        validation::validate_density(rho)?;
        validation::validate_omega(omega)?;
        let result = self.eos().pressure_solve(t_k, rho, omega)?;
        validation::validate_pressure(result.x)?;
        Ok(result)
    }

    /// Speed of sound [m/s] at (T, P).
    pub fn sound_speed(&self, t_k: f64, p_pa: f64) -> FluidResult<f64> {
        validation::validate_temperature(t_k)?;
        validation::validate_pressure(p_pa)?;
        let a = self.eos().sound_speed(t_k, p_pa)?;
        validation::validate_speed_of_sound(a)
    }

    /// Saturation pressure [Pa] at `t_k`.
    ///
    /// Tabulated fluids read their boiling table backwards and reject
    /// temperatures outside it; Antoine fluids evaluate the fit directly.
    pub fn vapor_pressure(&self, t_k: f64) -> FluidResult<f64> {
        validation::validate_temperature(t_k)?;
        let p = match self.catalog_entry().vapor_pressure {
            VaporPressureModel::Tabulated => {
                let (t_lo, t_hi) = self.curve.temperature_range();
                if t_k < t_lo || t_k > t_hi {
                    return Err(FluidError::OutOfRange {
                        what: "temperature outside the boiling table",
                    });
                }
                self.curve.pressure_at(t_k)
            }
            VaporPressureModel::Antoine => {
                if t_k <= DFP_ANTOINE.c {
                    return Err(FluidError::NonPhysical {
                        what: "temperature at or below the Antoine pole",
                    });
                }
                DFP_ANTOINE.pressure_pa(t_k)
            }
        };
        validation::validate_pressure(p)
    }

    /// Boiling temperature [K] at `p_pa`, read from the curve.
    pub fn boiling_temperature(&self, p_pa: f64) -> FluidResult<f64> {
        validation::validate_pressure(p_pa)?;
        validation::validate_temperature(self.curve.temperature_at(p_pa))
    }

    /// Surface tension [N/m]. Constant placeholder.
    pub fn surface_tension(&self, _t_k: f64) -> SurfaceTension {
        SURFACE_TENSION_N_PER_M
    }

    /// Specific heat [J/(kg·K)]. Constant placeholder.
    pub fn specific_heat(&self, _t_k: f64) -> SpecHeatCapacity {
        SPECIFIC_HEAT_J_PER_KG_K
    }

    /// Density, sound speed and vapor pressure at one state.
    pub fn property_pack(&self, t: Temperature, p: Pressure) -> FluidResult<LiquidPropertyPack> {
        let (t_k, p_pa) = (t.value, p.value);
        Ok(LiquidPropertyPack::new(
            p,
            t,
            kg_m3(self.density(t_k, p_pa)?),
            mps(self.sound_speed(t_k, p_pa)?),
            pa(self.vapor_pressure(t_k)?),
        ))
    }
}
