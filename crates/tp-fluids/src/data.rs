//! Built-in fluid data.
//!
//! Critical constants, molar masses and acentric factors for the supported
//! fluids, plus the raw material for their boiling curves.

use tp_curve::AntoineCoefficients;
use tp_eos::FluidConstants;

pub const ACETONE_CONSTANTS: FluidConstants = FluidConstants {
    critical_pressure_pa: 4.69e6,
    critical_temperature_k: 508.1,
    molar_mass_kg_per_mol: 0.0580791,
    omega_density: 0.625,
    omega_sound: 0.347,
};

/// No separate sound-speed acentric factor is published for DFP; the
/// density value is reused.
pub const DFP_CONSTANTS: FluidConstants = FluidConstants {
    critical_pressure_pa: 2.07e6,
    critical_temperature_k: 457.0,
    molar_mass_kg_per_mol: 0.252055032,
    omega_density: 0.62,
    omega_sound: 0.62,
};

/// Surface tension placeholder [N/m], returned for every temperature.
pub const SURFACE_TENSION_N_PER_M: f64 = 0.0141;

/// Specific heat placeholder [J/(kg·K)], returned for every temperature.
pub const SPECIFIC_HEAT_J_PER_KG_K: f64 = 1130.0;

/// Acetone boiling temperatures [K] at 1, 2, ..., 200 kPa.
pub const ACETONE_BOILING_TEMPERATURES_K: [f64; 200] = [
    237.48, 247.36, 253.59, 258.25, 262.00, 265.17, 267.91, 270.35,
    272.54, 274.53, 276.36, 278.06, 279.65, 281.14, 282.54, 283.87,
    285.12, 286.32, 287.47, 288.57, 289.62, 290.63, 291.61, 292.55,
    293.45, 294.33, 295.19, 296.01, 296.82, 297.60, 298.36, 299.10,
    299.82, 300.52, 301.21, 301.88, 302.53, 303.18, 303.80, 304.42,
    305.02, 305.61, 306.19, 306.76, 307.32, 307.87, 308.41, 308.94,
    309.46, 309.97, 310.47, 310.97, 311.46, 311.94, 312.41, 312.88,
    313.34, 313.80, 314.24, 314.69, 315.12, 315.55, 315.98, 316.40,
    316.81, 317.22, 317.62, 318.02, 318.42, 318.81, 319.19, 319.57,
    319.95, 320.32, 320.69, 321.06, 321.42, 321.77, 322.13, 322.48,
    322.83, 323.17, 323.51, 323.85, 324.18, 324.51, 324.84, 325.16,
    325.48, 325.80, 326.12, 326.43, 326.74, 327.05, 327.35, 327.65,
    327.96, 328.25, 328.55, 328.84, 329.13, 329.42, 329.71, 329.99,
    330.27, 330.55, 330.83, 331.10, 331.38, 331.65, 331.92, 332.19,
    332.45, 332.71, 332.98, 333.24, 333.50, 333.75, 334.01, 334.26,
    334.51, 334.76, 335.01, 335.26, 335.50, 335.75, 335.99, 336.23,
    336.47, 336.71, 336.94, 337.18, 337.41, 337.64, 337.87, 338.10,
    338.33, 338.56, 338.78, 339.01, 339.23, 339.45, 339.67, 339.89,
    340.11, 340.33, 340.54, 340.76, 340.97, 341.18, 341.39, 341.60,
    341.81, 342.02, 342.23, 342.43, 342.64, 342.84, 343.04, 343.25,
    343.45, 343.65, 343.85, 344.04, 344.24, 344.44, 344.63, 344.83,
    345.02, 345.21, 345.40, 345.59, 345.78, 345.97, 346.16, 346.35,
    346.53, 346.72, 346.90, 347.09, 347.27, 347.45, 347.63, 347.82,
    348.00, 348.17, 348.35, 348.53, 348.71, 348.88, 349.06, 349.23,
    349.41, 349.58, 349.76, 349.93, 350.10, 350.27, 350.44, 350.61,
];

/// Pressure step of the acetone table [Pa]; entry `i` sits at `(i + 1) * step`.
pub const ACETONE_TABLE_STEP_PA: f64 = 1.0e3;

/// Decafluoropentane vapor-pressure fit (Loras et al., J. Chem. Eng. Data, 2001).
pub const DFP_ANTOINE: AntoineCoefficients = AntoineCoefficients::new(6.43876, 1242.510, 46.568);

/// Temperature span [K] and sample count used to tabulate the DFP fit.
pub const DFP_CURVE_SPAN_K: (f64, f64) = (237.0, 350.0);
pub const DFP_CURVE_SAMPLES: usize = 1000;

/// Acetone table pressures [Pa].
pub fn acetone_boiling_pressures_pa() -> Vec<f64> {
    (1..=ACETONE_BOILING_TEMPERATURES_K.len())
        .map(|i| i as f64 * ACETONE_TABLE_STEP_PA)
        .collect()
}
