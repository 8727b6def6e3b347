//! Tait equation-of-state solver.
//!
//! Chains the correlations with a boiling-curve lookup:
//!
//! ```text
//! V = V_s (1 - C ln((B + P) / (B + P_s))),   ρ = M / V
//! P_s = Riedel(T_r, T_b(P) / T_c)
//! ```
//!
//! and inverts it for pressure with Newton on
//! `f(P) = (B + P) / (B + P_s(P)) - k`, `k = exp((1 - V/V_s) / C)`.

use crate::constants::FluidConstants;
use crate::correlations::{
    TaitParameters, hankinson_thomson_volume, riedel_vapor_pressure, tait_constants,
    tait_reduced_volume,
};
use crate::error::{EosError, EosResult};
use crate::newton::{NewtonConfig, NewtonResult, newton_solve};
use tp_core::ensure_finite;
use tp_curve::BoilingCurve;
use tracing::trace;

/// Reduced temperature and reduced boiling temperature for one evaluation.
///
/// Rebuilt on every call; `t_br` follows whatever pressure is being probed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedState {
    pub t_r: f64,
    pub t_br: f64,
}

/// Speed-of-sound finite-difference settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundSpeedConfig {
    /// Absolute density perturbation δρ [kg/m³] on each side of the state.
    pub density_step: f64,
}

impl Default for SoundSpeedConfig {
    fn default() -> Self {
        Self {
            density_step: 1.0e-3,
        }
    }
}

/// Temperature-dependent liquid terms shared by density and pressure.
#[derive(Debug, Clone, Copy)]
struct LiquidTerms {
    t_r: f64,
    tait: TaitParameters,
    v_s: f64,
}

/// Tait liquid equation of state bound to one fluid's constants and boiling curve.
///
/// Borrowing both keeps the solver cheap to build per query and lets a
/// single fluid serve concurrent callers.
#[derive(Debug)]
pub struct TaitEos<'a, C: BoilingCurve + ?Sized> {
    constants: &'a FluidConstants,
    curve: &'a C,
    newton: NewtonConfig,
    sound: SoundSpeedConfig,
}

impl<'a, C: BoilingCurve + ?Sized> TaitEos<'a, C> {
    pub fn new(constants: &'a FluidConstants, curve: &'a C) -> Self {
        Self {
            constants,
            curve,
            newton: NewtonConfig::default(),
            sound: SoundSpeedConfig::default(),
        }
    }

    pub fn with_newton_config(mut self, newton: NewtonConfig) -> Self {
        self.newton = newton;
        self
    }

    pub fn with_sound_speed_config(mut self, sound: SoundSpeedConfig) -> Self {
        self.sound = sound;
        self
    }

    pub fn constants(&self) -> &FluidConstants {
        self.constants
    }

    pub fn newton_config(&self) -> &NewtonConfig {
        &self.newton
    }

    /// `T / T_c`, required to lie in (0, 1).
    pub fn reduced_temperature(&self, t_k: f64) -> EosResult<f64> {
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(EosError::InvalidArg {
                what: "temperature must be positive and finite",
            });
        }
        let t_r = t_k / self.constants.critical_temperature_k;
        if t_r >= 1.0 {
            return Err(EosError::Domain {
                what: "reduced temperature must be below 1",
                value: t_r,
            });
        }
        Ok(t_r)
    }

    /// `T_b(P) / T_c` from the boiling curve, required to lie in (0, 1).
    pub fn reduced_boiling_temperature(&self, p_pa: f64) -> EosResult<f64> {
        let t_b = self.curve.temperature_at(p_pa);
        let t_br = t_b / self.constants.critical_temperature_k;
        if !t_br.is_finite() || t_br <= 0.0 || t_br >= 1.0 {
            return Err(EosError::Domain {
                what: "reduced boiling temperature must lie in (0, 1)",
                value: t_br,
            });
        }
        Ok(t_br)
    }

    pub fn reduced_state(&self, t_k: f64, p_pa: f64) -> EosResult<ReducedState> {
        Ok(ReducedState {
            t_r: self.reduced_temperature(t_k)?,
            t_br: self.reduced_boiling_temperature(p_pa)?,
        })
    }

    /// Riedel vapor pressure [Pa] at `t_r`, anchored on the boiling
    /// temperature the curve reports for `p_pa`.
    pub fn saturation_pressure(&self, t_r: f64, p_pa: f64) -> EosResult<f64> {
        let t_br = self.reduced_boiling_temperature(p_pa)?;
        let p_s = riedel_vapor_pressure(t_r, t_br, self.constants.critical_pressure_pa);
        Ok(ensure_finite(p_s, "saturation pressure")?)
    }

    /// Centred finite-difference estimate of `dP_s/dP` at `p_pa`, half-width
    /// `NewtonConfig::derivative_step`.
    pub fn saturation_pressure_slope(&self, t_r: f64, p_pa: f64) -> EosResult<f64> {
        let h = self.newton.derivative_step;
        let hi = self.saturation_pressure(t_r, p_pa + h)?;
        let lo = self.saturation_pressure(t_r, p_pa - h)?;
        Ok((hi - lo) / (2.0 * h))
    }

    fn liquid_terms(&self, t_k: f64, omega: f64) -> EosResult<LiquidTerms> {
        if !omega.is_finite() {
            return Err(EosError::InvalidArg {
                what: "acentric factor must be finite",
            });
        }
        let t_r = self.reduced_temperature(t_k)?;
        let c = self.constants;

        let tait = tait_constants(t_r, omega, c.critical_pressure_pa);
        ensure_finite(tait.b, "Tait B")?;
        ensure_finite(tait.c, "Tait C")?;

        let v_o = hankinson_thomson_volume(
            omega,
            c.critical_temperature_k,
            c.critical_pressure_pa,
        );
        let v_s = tait_reduced_volume(t_r, v_o, omega);
        if !v_s.is_finite() || v_s <= 0.0 {
            return Err(EosError::Domain {
                what: "saturated molar volume",
                value: v_s,
            });
        }

        Ok(LiquidTerms { t_r, tait, v_s })
    }

    /// Molar volume V [m³/mol] at (T, P).
    pub fn molar_volume(&self, t_k: f64, p_pa: f64, omega: f64) -> EosResult<f64> {
        if !p_pa.is_finite() {
            return Err(EosError::InvalidArg {
                what: "pressure must be finite",
            });
        }
        let LiquidTerms { t_r, tait, v_s } = self.liquid_terms(t_k, omega)?;
        let p_s = self.saturation_pressure(t_r, p_pa)?;

        let ratio = (tait.b + p_pa) / (tait.b + p_s);
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(EosError::Domain {
                what: "Tait logarithm argument (B + P)/(B + P_s)",
                value: ratio,
            });
        }

        let v = v_s * (1.0 - tait.c * ratio.ln());
        if !v.is_finite() || v <= 0.0 {
            return Err(EosError::Domain {
                what: "molar volume",
                value: v,
            });
        }
        trace!(t_k, p_pa, omega, t_r, b = tait.b, c = tait.c, v_s, p_s, v, "tait volume");
        Ok(v)
    }

    /// Density ρ = M / V [kg/m³] at (T, P).
    pub fn density(&self, t_k: f64, p_pa: f64, omega: f64) -> EosResult<f64> {
        let v = self.molar_volume(t_k, p_pa, omega)?;
        Ok(self.constants.molar_mass_kg_per_mol / v)
    }

    /// Pressure [Pa] at which the liquid has density `rho` [kg/m³] at `t_k`.
    pub fn pressure(&self, t_k: f64, rho: f64, omega: f64) -> EosResult<f64> {
        Ok(self.pressure_solve(t_k, rho, omega)?.x)
    }

    /// Newton inversion of [`TaitEos::density`], returning iteration details.
    pub fn pressure_solve(&self, t_k: f64, rho: f64, omega: f64) -> EosResult<NewtonResult> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(EosError::InvalidArg {
                what: "density must be positive and finite",
            });
        }
        self.newton.validate()?;

        let LiquidTerms { t_r, tait, v_s } = self.liquid_terms(t_k, omega)?;
        let v = self.constants.molar_mass_kg_per_mol / rho;
        let k = ((1.0 - v / v_s) / tait.c).exp();
        if !k.is_finite() || k <= 0.0 {
            return Err(EosError::Domain {
                what: "Tait target ratio exp((1 - V/V_s)/C)",
                value: k,
            });
        }
        let b = tait.b;

        let residual = |p: f64| -> EosResult<f64> {
            let p_s = self.saturation_pressure(t_r, p)?;
            Ok((b + p) / (b + p_s) - k)
        };
        let derivative = |p: f64| -> EosResult<f64> {
            let p_s = self.saturation_pressure(t_r, p)?;
            let dp_s = self.saturation_pressure_slope(t_r, p)?;
            Ok(((b + p_s) - (b + p) * dp_s) / (b + p_s).powi(2))
        };

        let result = newton_solve(self.newton.initial_guess, residual, derivative, &self.newton)?;
        ensure_finite(result.x, "pressure")?;
        trace!(
            t_k,
            rho,
            omega,
            p = result.x,
            iterations = result.iterations,
            "tait pressure"
        );
        Ok(result)
    }

    /// Speed of sound [m/s] at (T, P), evaluated with the sound-speed
    /// acentric factor.
    ///
    /// `c = sqrt((p(ρ-δ) - p(ρ+δ)) / ((ρ-δ) - (ρ+δ)))` with a fixed absolute
    /// δ. This is the isothermal slope dP/dρ, not the isentropic one.
    pub fn sound_speed(&self, t_k: f64, p_pa: f64) -> EosResult<f64> {
        let step = self.sound.density_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(EosError::InvalidArg {
                what: "sound-speed density step must be positive",
            });
        }
        let omega = self.constants.omega_sound;

        let rho = self.density(t_k, p_pa, omega)?;
        let rho_lo = rho - step;
        let rho_hi = rho + step;
        let p_lo = self.pressure(t_k, rho_lo, omega)?;
        let p_hi = self.pressure(t_k, rho_hi, omega)?;

        let radicand = (p_lo - p_hi) / (rho_lo - rho_hi);
        if !radicand.is_finite() || radicand <= 0.0 {
            return Err(EosError::Domain {
                what: "sound-speed radicand dP/dρ",
                value: radicand,
            });
        }
        Ok(radicand.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_curve::{AntoineCoefficients, TabulatedCurve};

    // Decafluoropentane, self-contained via its Antoine fit.
    fn constants() -> FluidConstants {
        FluidConstants::new(2_070_000.0, 457.0, 0.252055032, 0.62, 0.62).unwrap()
    }

    fn curve() -> TabulatedCurve {
        let coeffs = AntoineCoefficients::new(6.43876, 1242.510, 46.568);
        TabulatedCurve::from_antoine(coeffs, 237.0, 350.0, 1000).unwrap()
    }

    #[test]
    fn density_reference_value() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let rho = eos.density(298.15, 101_325.0, c.omega_density).unwrap();
        assert!((rho - 1578.6459).abs() < 1e-3, "rho = {rho}");
    }

    #[test]
    fn density_times_volume_is_molar_mass() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let v = eos.molar_volume(298.15, 101_325.0, 0.62).unwrap();
        let rho = eos.density(298.15, 101_325.0, 0.62).unwrap();
        assert!((rho * v - c.molar_mass_kg_per_mol).abs() < 1e-15);
    }

    #[test]
    fn reduced_state_uses_curve() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let state = eos.reduced_state(298.15, 101_325.0).unwrap();
        assert!((state.t_r - 298.15 / 457.0).abs() < 1e-15);
        assert!((state.t_br * 457.0 - 326.8517).abs() < 1e-3);
    }

    #[test]
    fn supercritical_temperature_is_domain_error() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        for t in [457.0, 500.0] {
            assert!(matches!(
                eos.density(t, 101_325.0, 0.62),
                Err(EosError::Domain { .. })
            ));
        }
        assert!(matches!(
            eos.pressure(460.0, 1000.0, 0.62),
            Err(EosError::Domain { .. })
        ));
    }

    #[test]
    fn bad_inputs_are_rejected() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        assert!(matches!(
            eos.density(-5.0, 101_325.0, 0.62),
            Err(EosError::InvalidArg { .. })
        ));
        assert!(matches!(
            eos.density(300.0, f64::NAN, 0.62),
            Err(EosError::InvalidArg { .. })
        ));
        assert!(matches!(
            eos.pressure(300.0, 0.0, 0.62),
            Err(EosError::InvalidArg { .. })
        ));
        assert!(matches!(
            eos.density(300.0, 101_325.0, f64::INFINITY),
            Err(EosError::InvalidArg { .. })
        ));
    }

    #[test]
    fn curve_above_critical_is_domain_error() {
        let c = constants();
        let hot = TabulatedCurve::new(vec![1.0e3, 1.0e6], vec![300.0, 470.0]).unwrap();
        let eos = TaitEos::new(&c, &hot);
        assert!(matches!(
            eos.density(300.0, 1.0e6, 0.62),
            Err(EosError::Domain { .. })
        ));
    }

    #[test]
    fn pressure_inverts_density_at_one_atmosphere() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let rho = eos.density(298.15, 101_325.0, 0.62).unwrap();
        let result = eos.pressure_solve(298.15, rho, 0.62).unwrap();
        assert!((result.x - 101_325.0).abs() < 1.0, "p = {}", result.x);
        assert!(result.iterations >= 1);
    }

    #[test]
    fn saturation_slope_matches_fine_reference() {
        let (c, curve) = (constants(), curve());
        let t_r = 298.15 / 457.0;
        let coarse = TaitEos::new(&c, &curve);
        let fine = TaitEos::new(&c, &curve).with_newton_config(NewtonConfig {
            derivative_step: 1.0e-3,
            ..NewtonConfig::default()
        });

        // Pick a pressure at least 1 Pa from the nearest knot so both
        // stencils sample the same linear segment of the curve.
        let p = 50_000.0;
        let knots = curve.pressures();
        let i = knots.partition_point(|&k| k <= p);
        assert!(p - knots[i - 1] > 1.0 && knots[i] - p > 1.0);

        let s_coarse = coarse.saturation_pressure_slope(t_r, p).unwrap();
        let s_fine = fine.saturation_pressure_slope(t_r, p).unwrap();
        assert!(s_coarse != 0.0);
        assert!(
            ((s_coarse - s_fine) / s_fine).abs() < 1e-4,
            "coarse {s_coarse} vs fine {s_fine}"
        );
    }

    #[test]
    fn saturation_slope_vanishes_on_clamped_curve() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let slope = eos.saturation_pressure_slope(298.15 / 457.0, 2.0e6).unwrap();
        assert_eq!(slope, 0.0);
    }

    #[test]
    fn tiny_iteration_cap_reports_non_convergence() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve).with_newton_config(NewtonConfig {
            max_iterations: 1,
            ..NewtonConfig::default()
        });
        // Far from the 1 atm starting guess, one step cannot land within 0.1 Pa.
        let rho = TaitEos::new(&c, &curve).density(300.0, 3.0e6, 0.62).unwrap();
        assert!(matches!(
            eos.pressure(300.0, rho, 0.62),
            Err(EosError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn sound_speed_reference_value() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve);
        let a = eos.sound_speed(298.15, 101_325.0).unwrap();
        assert!((a - 530.22).abs() < 0.5, "a = {a}");
    }

    #[test]
    fn sound_speed_rejects_bad_step() {
        let (c, curve) = (constants(), curve());
        let eos = TaitEos::new(&c, &curve)
            .with_sound_speed_config(SoundSpeedConfig { density_step: 0.0 });
        assert!(matches!(
            eos.sound_speed(298.15, 101_325.0),
            Err(EosError::InvalidArg { .. })
        ));
    }
}
