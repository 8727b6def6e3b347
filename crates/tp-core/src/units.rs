// tp-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

/// Surface tension [N/m].
///
/// Kept as a plain f64 alongside the uom types.
pub type SurfaceTension = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Density given in g/cm³, stored as kg/m³ (factor [`constants::G_PER_CM3_TO_KG_PER_M3`]).
#[inline]
pub fn g_cm3(v: f64) -> Density {
    kg_m3(v * constants::G_PER_CM3_TO_KG_PER_M3)
}

#[inline]
pub fn kg_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

pub mod constants {
    use super::*;

    /// Universal gas constant [J/(mol·K)], value used by the volume correlations.
    pub const R_J_PER_MOL_K: f64 = 8.3145;

    /// Standard atmosphere [Pa].
    pub const ATM_PA: f64 = 101_325.0;

    /// Standard ambient temperature [K].
    pub const T_AMBIENT_K: f64 = 298.15;

    /// 1 g/cm³ = 1000 kg/m³.
    pub const G_PER_CM3_TO_KG_PER_M3: f64 = 1000.0;

    #[inline]
    pub fn atm() -> Pressure {
        pa(ATM_PA)
    }

    #[inline]
    pub fn ambient() -> Temperature {
        k(T_AMBIENT_K)
    }
}
