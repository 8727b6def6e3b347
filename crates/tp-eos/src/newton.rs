//! Scalar Newton solver with backtracking line search.

use crate::error::{EosError, EosResult};
use tp_core::constants::ATM_PA;
use tracing::{debug, warn};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonConfig {
    /// Starting iterate (Pa for the pressure inversion)
    pub initial_guess: f64,
    /// Converged once a full Newton step is no larger than this
    pub step_tolerance: f64,
    /// Maximum iterations before reporting non-convergence
    pub max_iterations: usize,
    /// Finite-difference half-width for derivative estimates
    pub derivative_step: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search halvings per iteration
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            initial_guess: ATM_PA,
            step_tolerance: 1.0e-1,
            max_iterations: 100,
            derivative_step: 1.0,
            line_search_beta: 0.5,
            max_line_search_iters: 30,
        }
    }
}

impl NewtonConfig {
    /// Reject settings that would make the loop meaningless.
    pub fn validate(&self) -> EosResult<()> {
        if !self.initial_guess.is_finite() {
            return Err(EosError::InvalidArg {
                what: "initial guess must be finite",
            });
        }
        if !(self.step_tolerance.is_finite() && self.step_tolerance > 0.0) {
            return Err(EosError::InvalidArg {
                what: "step tolerance must be positive",
            });
        }
        if self.max_iterations == 0 {
            return Err(EosError::InvalidArg {
                what: "max iterations must be at least 1",
            });
        }
        if !(self.derivative_step.is_finite() && self.derivative_step > 0.0) {
            return Err(EosError::InvalidArg {
                what: "derivative step must be positive",
            });
        }
        if !(self.line_search_beta > 0.0 && self.line_search_beta < 1.0) {
            return Err(EosError::InvalidArg {
                what: "line search factor must lie in (0, 1)",
            });
        }
        Ok(())
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Converged root
    pub x: f64,
    /// Residual at the last accepted iterate
    pub residual: f64,
    /// Number of Newton steps taken
    pub iterations: usize,
}

/// Accepted iterates on either side of the root.
#[derive(Debug, Clone, Copy, Default)]
struct Bracket {
    below: Option<f64>,
    above: Option<f64>,
}

impl Bracket {
    fn record(&mut self, x: f64, residual: f64) {
        if residual < 0.0 {
            self.below = Some(x);
        } else if residual > 0.0 {
            self.above = Some(x);
        }
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        match (self.below, self.above) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }
}

/// Solve `residual_fn(x) = 0` starting from `x0`.
///
/// At least one step is always taken. A step is accepted outright once the
/// full Newton update is within `config.step_tolerance`.
///
/// Until the residual has changed sign, each step is halved until `|f|`
/// decreases; trial points where the residual reports
/// [`EosError::Domain`] count as failed trials. A line search that cannot
/// reduce the residual is reported as [`EosError::NonConvergence`].
///
/// Once iterates straddle the root, Newton steps that leave the bracket
/// (or a derivative in [`EosError::Domain`]) fall back to bisection, so
/// the iteration cannot be drawn towards a spurious minimum of `|f|`.
/// Running out of iterations is [`EosError::NonConvergence`].
pub fn newton_solve<F, D>(
    x0: f64,
    residual_fn: F,
    derivative_fn: D,
    config: &NewtonConfig,
) -> EosResult<NewtonResult>
where
    F: Fn(f64) -> EosResult<f64>,
    D: Fn(f64) -> EosResult<f64>,
{
    let mut x = x0;
    let mut r = residual_fn(x)?;
    let mut bracket = Bracket::default();
    bracket.record(x, r);
    let mut last_step = f64::INFINITY;

    for iter in 0..config.max_iterations {
        let step = newton_step(x, r, &derivative_fn);

        if let Ok(step) = step
            && step.abs() <= config.step_tolerance
        {
            let x_new = x + step;
            debug!(iteration = iter + 1, x = x_new, step, "newton converged");
            return Ok(NewtonResult {
                x: x_new,
                residual: residual_fn(x_new)?,
                iterations: iter + 1,
            });
        }

        let (x_new, r_new) = match bracket.bounds() {
            Some((lo, hi)) => {
                let x_new = match step {
                    Ok(step) if x + step > lo && x + step < hi => x + step,
                    Ok(_) => 0.5 * (lo + hi),
                    Err(err) if err.is_domain() => 0.5 * (lo + hi),
                    Err(err) => return Err(err),
                };
                let r_new = residual_fn(x_new)?;
                if (x_new - x).abs() <= config.step_tolerance {
                    debug!(
                        iteration = iter + 1,
                        x = x_new,
                        lo,
                        hi,
                        "newton converged in bracket"
                    );
                    return Ok(NewtonResult {
                        x: x_new,
                        residual: r_new,
                        iterations: iter + 1,
                    });
                }
                (x_new, r_new)
            }
            None => line_search(x, r, step?, &residual_fn, config, iter + 1)?,
        };

        last_step = x_new - x;
        debug!(
            iteration = iter + 1,
            x = x_new,
            step = last_step,
            residual = r_new,
            "newton step"
        );
        x = x_new;
        r = r_new;
        bracket.record(x, r);
    }

    warn!(
        max_iterations = config.max_iterations,
        x, last_step, "newton iteration cap reached"
    );
    Err(EosError::NonConvergence {
        iterations: config.max_iterations,
        last_step,
    })
}

fn newton_step<D>(x: f64, r: f64, derivative_fn: &D) -> EosResult<f64>
where
    D: Fn(f64) -> EosResult<f64>,
{
    let slope = derivative_fn(x)?;
    if !slope.is_finite() || slope == 0.0 {
        return Err(EosError::Domain {
            what: "Newton derivative",
            value: slope,
        });
    }
    let step = -r / slope;
    if !step.is_finite() {
        return Err(EosError::Domain {
            what: "Newton step",
            value: step,
        });
    }
    Ok(step)
}

/// Backtrack from the full `step` until `|f|` drops below `|r|`.
fn line_search<F>(
    x: f64,
    r: f64,
    step: f64,
    residual_fn: &F,
    config: &NewtonConfig,
    iteration: usize,
) -> EosResult<(f64, f64)>
where
    F: Fn(f64) -> EosResult<f64>,
{
    let trial = |x: f64| match residual_fn(x) {
        Err(err) if err.is_domain() => Ok(f64::NAN),
        other => other,
    };

    let mut alpha = 1.0;
    let mut x_new = x + step;
    let mut r_new = trial(x_new)?;
    let mut halvings = 0;
    while r != 0.0 && (r_new.is_nan() || r_new.abs() >= r.abs()) {
        if halvings == config.max_line_search_iters {
            warn!(iteration, x, residual = r, "newton line search stalled");
            return Err(EosError::NonConvergence {
                iterations: iteration,
                last_step: alpha * step,
            });
        }
        alpha *= config.line_search_beta;
        x_new = x + alpha * step;
        r_new = trial(x_new)?;
        halvings += 1;
    }
    Ok((x_new, r_new))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NewtonConfig {
        NewtonConfig {
            initial_guess: 3.0,
            step_tolerance: 1e-10,
            ..NewtonConfig::default()
        }
    }

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, x > 0
        let result = newton_solve(3.0, |x| Ok(x * x - 4.0), |x| Ok(2.0 * x), &config()).unwrap();
        assert!((result.x - 2.0).abs() < 1e-9);
        assert!(result.iterations >= 1);
    }

    #[test]
    fn starting_at_the_root_still_takes_one_step() {
        let result = newton_solve(2.0, |x| Ok(x * x - 4.0), |x| Ok(2.0 * x), &config()).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.x, 2.0);
    }

    #[test]
    fn line_search_tames_overshoot() {
        // atan has a famously divergent undamped Newton iteration from |x0| > 1.39.
        let result = newton_solve(
            3.0,
            |x: f64| Ok(x.atan()),
            |x: f64| Ok(1.0 / (1.0 + x * x)),
            &config(),
        )
        .unwrap();
        assert!(result.x.abs() < 1e-9);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let cfg = NewtonConfig {
            max_iterations: 2,
            ..config()
        };
        // exp(x) = 0 has no root; each step moves left by exactly 1.
        let err = newton_solve(0.0, |x: f64| Ok(x.exp()), |x: f64| Ok(x.exp()), &cfg).unwrap_err();
        match err {
            EosError::NonConvergence {
                iterations,
                last_step,
            } => {
                assert_eq!(iterations, 2);
                assert!((last_step + 1.0).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stalled_line_search_reports_non_convergence() {
        // The supplied slope points uphill, so every trial step grows |x| + 1.
        let err = newton_solve(
            0.5,
            |x: f64| Ok(x.abs() + 1.0),
            |_| Ok(-1.0),
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, EosError::NonConvergence { iterations: 1, .. }));
    }

    #[test]
    fn domain_failures_at_trial_points_are_backtracked() {
        // The overshoot lands at x = -5 and x = -1, both outside the residual's domain.
        let residual = |x: f64| {
            if x > 0.0 {
                Ok(x - 1.0)
            } else {
                Err(EosError::Domain {
                    what: "x must be positive",
                    value: x,
                })
            }
        };
        let result = newton_solve(3.0, residual, |_| Ok(0.25), &config()).unwrap();
        assert!((result.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bracketed_iteration_survives_derivative_failures() {
        // The slope is wrong everywhere and unavailable below 0.75; once the
        // iterates straddle the root, bisection finishes the job.
        let derivative = |x: f64| {
            if x < 0.75 {
                Err(EosError::Domain {
                    what: "slope",
                    value: x,
                })
            } else {
                Ok(0.4)
            }
        };
        let result = newton_solve(3.0, |x| Ok(x - 1.0), derivative, &config()).unwrap();
        assert!((result.x - 1.0).abs() < 1e-9, "x = {}", result.x);
        assert!(result.iterations < 100);
    }

    #[test]
    fn bracket_keeps_iterates_away_from_spurious_minimum() {
        // Left of the root |f| decays towards x -> -inf; plain Newton follows it.
        let f = |x: f64| Ok(if x >= 0.0 { x } else { x * x.exp() / (1.0 - x) });
        let df = |x: f64| {
            Ok(if x >= 0.0 {
                0.5
            } else {
                x.exp() * ((1.0 + x) * (1.0 - x) + x) / (1.0 - x).powi(2)
            })
        };
        let result = newton_solve(2.0, f, df, &config()).unwrap();
        assert_eq!(result.x, 0.0);
    }

    #[test]
    fn zero_derivative_is_a_domain_error() {
        let err = newton_solve(1.0, |_| Ok(1.0), |_| Ok(0.0), &config()).unwrap_err();
        assert!(matches!(
            err,
            EosError::Domain {
                what: "Newton derivative",
                ..
            }
        ));
    }

    #[test]
    fn residual_errors_propagate() {
        let err = newton_solve(
            1.0,
            |_| Err(EosError::InvalidArg { what: "boom" }),
            |_| Ok(1.0),
            &config(),
        )
        .unwrap_err();
        assert_eq!(err, EosError::InvalidArg { what: "boom" });
    }

    #[test]
    fn default_config_is_valid() {
        assert!(NewtonConfig::default().validate().is_ok());
        let bad = NewtonConfig {
            max_iterations: 0,
            ..NewtonConfig::default()
        };
        assert!(bad.validate().is_err());
        let bad = NewtonConfig {
            line_search_beta: 1.0,
            ..NewtonConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
