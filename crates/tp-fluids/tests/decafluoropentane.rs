//! Decafluoropentane through the facade.

use proptest::prelude::*;
use tp_core::units::constants::{ATM_PA, T_AMBIENT_K};
use tp_fluids::{Fluid, FluidError, Species};

fn dfp() -> Fluid {
    Fluid::new("DFP").unwrap()
}

#[test]
fn ambient_density_matches_reference() {
    let rho = dfp().density(T_AMBIENT_K, ATM_PA).unwrap();
    assert!((rho - 1578.645_924_322_978).abs() < 1e-6, "rho = {rho}");
}

#[test]
fn sound_speed_positive_and_rising_with_pressure() {
    let fluid = dfp();
    let ambient = fluid.sound_speed(T_AMBIENT_K, ATM_PA).unwrap();
    assert!((ambient - 530.22).abs() < 1.0, "c = {ambient}");

    let low = fluid.sound_speed(320.0, 5.0e5).unwrap();
    let high = fluid.sound_speed(320.0, 5.0e6).unwrap();
    assert!(high > low);
}

#[test]
fn low_pressure_round_trip_converges() {
    // Steep Antoine curve at 1 kPa: needs the damped Newton step.
    let fluid = dfp();
    for t in [230.0, 300.0, 420.0] {
        let rho = fluid.density(t, 1.0e3).unwrap();
        let result = fluid
            .pressure_solve(t, rho, fluid.constants().omega_density)
            .unwrap();
        assert!((result.x - 1.0e3).abs() <= 1.0, "T = {t}: {}", result.x);
        assert!(result.iterations <= 100);
    }
}

#[test]
fn near_critical_is_domain_error() {
    let fluid = dfp();
    let t_c = fluid.critical_temperature();
    for frac in [0.99, 0.999, 0.9999] {
        match fluid.density(frac * t_c, ATM_PA) {
            Err(err) => assert!(err.is_domain(), "{err}"),
            Ok(rho) => assert!(rho.is_finite() && rho > 0.0),
        }
    }
}

#[test]
fn aliases_resolve_case_insensitively() {
    for name in ["dfp", "DFP", "Decafluoropentane", "  decafluoropentane "] {
        assert_eq!(Fluid::new(name).unwrap().species(), Species::Decafluoropentane);
    }
    for name in ["ace", "ACETONE"] {
        assert_eq!(Fluid::new(name).unwrap().species(), Species::Acetone);
    }
    assert!(matches!(
        Fluid::new("nitrogen"),
        Err(FluidError::UnsupportedFluid { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn pressure_inverts_density(t in 230.0_f64..420.0, log_p in 3.0_f64..6.69) {
        let fluid = dfp();
        let p = 10f64.powf(log_p);
        let rho = fluid.density(t, p).unwrap();
        let back = fluid.pressure(t, rho).unwrap();
        prop_assert!((back - p).abs() <= 1.0, "P = {} recovered {}", p, back);
    }

    #[test]
    fn density_non_increasing_in_temperature(
        t in 230.0_f64..410.0,
        dt in 0.5_f64..5.0,
        log_p in 3.0_f64..6.69,
    ) {
        let fluid = dfp();
        let p = 10f64.powf(log_p);
        prop_assert!(fluid.density(t + dt, p).unwrap() <= fluid.density(t, p).unwrap());
    }
}
