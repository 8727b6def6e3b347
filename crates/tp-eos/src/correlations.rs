//! Corresponding-states correlations.
//!
//! Pure algebraic evaluations in reduced temperature `T_r = T / T_c`,
//! acentric factor `ω` and critical constants. No validation happens here:
//! callers keep `0 < T_r < 1` (fractional powers of `1 - T_r`) and
//! `0 < T_br < 1`. Out-of-range inputs propagate as NaN/inf, which
//! [`crate::TaitEos`] turns into [`crate::EosError::Domain`].
//!
//! Each correlation reads its coefficients from one named constant set.

use tp_core::constants::{ATM_PA, R_J_PER_MOL_K};

/// Tait B/C coefficients.
///
/// ```text
/// B = P_c (-1 + a τ^(1/3) + b τ^(2/3) + d τ + e τ^(4/3)),  τ = 1 - T_r
/// e = exp(f + g ω + h ω²)
/// C = j + k ω²
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaitCoefficients {
    pub a: f64,
    pub b: f64,
    pub d: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub j: f64,
    pub k: f64,
}

pub const TAIT: TaitCoefficients = TaitCoefficients {
    a: -9.070217,
    b: 62.45326,
    d: -135.1102,
    f: 4.79594,
    g: 0.250047,
    h: 1.14188,
    j: 0.0861488,
    k: 0.0344483,
};

/// Hankinson-Thomson characteristic volume: `V_o = R T_c (a + b ω + c ω²) / P_c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HankinsonThomsonCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

pub const HANKINSON_THOMSON: HankinsonThomsonCoefficients = HankinsonThomsonCoefficients {
    a: 0.2851686,
    b: -0.06379110,
    c: 0.01379173,
};

/// Saturated reduced-volume coefficients.
///
/// ```text
/// V_r0 = 1 + a τ^(1/3) + b τ^(2/3) + c τ + d τ^(4/3)
/// V_rδ = (e + f T_r + g T_r² + h T_r³) / (T_r - POLE_GUARD)
/// V_s  = V_o V_r0 (1 - ω V_rδ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedVolumeCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
}

pub const TAIT_REDUCED_VOLUME: ReducedVolumeCoefficients = ReducedVolumeCoefficients {
    a: -1.52816,
    b: 1.43907,
    c: -0.81446,
    d: 0.190454,
    e: -0.296123,
    f: 0.386914,
    g: -0.0427258,
    h: -0.0480645,
};

/// Offset in the `V_rδ` denominator. Keeps `T_r = 1` away from the pole;
/// must stay exactly 1.0001.
pub const REDUCED_VOLUME_POLE_GUARD: f64 = 1.0001;

/// Riedel vapor-pressure coefficients.
///
/// ```text
/// ψ_b = -c0 + c1/T_br + c2 ln T_br - T_br⁶
/// K   = k0 - k1 h,   h = T_br ln(P_c/1 atm) / (1 - T_br)
/// α_c = (θ K ψ_b + ln(P_c/1 atm)) / (K ψ_b - ln T_br)
/// Q   = K (θ - α_c)
/// ln(P_s/P_c) = -c0 Q + c1 Q / T_r + (c2 Q + α_c) ln T_r - Q T_r⁶
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiedelCoefficients {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub k0: f64,
    pub k1: f64,
    pub theta: f64,
}

pub const RIEDEL: RiedelCoefficients = RiedelCoefficients {
    c0: 35.0,
    c1: 36.0,
    c2: 42.0,
    k0: 0.373,
    k1: 0.030,
    theta: 3.758,
};

/// Tait pressure-like constant `B` [Pa] and dimensionless `C`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaitParameters {
    pub b: f64,
    pub c: f64,
}

/// Tait `(B, C)` at reduced temperature `t_r`.
///
/// Precondition: `t_r < 1`.
pub fn tait_constants(t_r: f64, omega: f64, critical_pressure_pa: f64) -> TaitParameters {
    let co = TAIT;
    let tau = 1.0 - t_r;
    let e = (co.f + co.g * omega + co.h * omega.powi(2)).exp();
    let b = critical_pressure_pa
        * (-1.0
            + co.a * tau.powf(1.0 / 3.0)
            + co.b * tau.powf(2.0 / 3.0)
            + co.d * tau
            + e * tau.powf(4.0 / 3.0));
    let c = co.j + co.k * omega.powi(2);
    TaitParameters { b, c }
}

/// Hankinson-Thomson characteristic molar volume `V_o` [m³/mol].
pub fn hankinson_thomson_volume(
    omega: f64,
    critical_temperature_k: f64,
    critical_pressure_pa: f64,
) -> f64 {
    let co = HANKINSON_THOMSON;
    R_J_PER_MOL_K * critical_temperature_k * (co.a + co.b * omega + co.c * omega.powi(2))
        / critical_pressure_pa
}

/// Saturated molar volume `V_s` [m³/mol] from the characteristic volume `v_o`.
///
/// Precondition: `t_r < 1` (the `τ^(1/3)` terms are NaN above it).
pub fn tait_reduced_volume(t_r: f64, v_o: f64, omega: f64) -> f64 {
    let co = TAIT_REDUCED_VOLUME;
    let tau = 1.0 - t_r;
    let v_r0 = 1.0
        + co.a * tau.powf(1.0 / 3.0)
        + co.b * tau.powf(2.0 / 3.0)
        + co.c * tau
        + co.d * tau.powf(4.0 / 3.0);
    let v_r_delta = (co.e + co.f * t_r + co.g * t_r.powi(2) + co.h * t_r.powi(3))
        / (t_r - REDUCED_VOLUME_POLE_GUARD);
    v_o * v_r0 * (1.0 - omega * v_r_delta)
}

/// Riedel vapor pressure `P_s` [Pa] at `t_r`, given the reduced normal
/// boiling temperature `t_br`.
///
/// The correlation is anchored so that `riedel_vapor_pressure(t_br, t_br, p_c)`
/// is one standard atmosphere.
///
/// Precondition: `0 < t_br < 1`, `t_r > 0`.
pub fn riedel_vapor_pressure(t_r: f64, t_br: f64, critical_pressure_pa: f64) -> f64 {
    let co = RIEDEL;
    let ln_pc_atm = (critical_pressure_pa / ATM_PA).ln();
    let ln_tbr = t_br.ln();

    let psi_b = -co.c0 + co.c1 / t_br + co.c2 * ln_tbr - t_br.powi(6);
    let h = t_br * ln_pc_atm / (1.0 - t_br);
    let k = co.k0 - co.k1 * h;
    let alpha_c = (co.theta * k * psi_b + ln_pc_atm) / (k * psi_b - ln_tbr);
    let q = k * (co.theta - alpha_c);

    let a_ant = -co.c0 * q;
    let b_ant = -co.c1 * q;
    let c_ant = co.c2 * q + alpha_c;
    let d_ant = -q;

    let ln_pr = a_ant - b_ant / t_r + c_ant * t_r.ln() + d_ant * t_r.powi(6);
    critical_pressure_pa * ln_pr.exp()
}
