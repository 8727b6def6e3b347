//! Monotonic tabulated curve with piecewise-linear interpolation.

use crate::BoilingCurve;
use crate::antoine::AntoineCoefficients;
use crate::error::{CurveError, CurveResult};
use tp_core::is_strictly_increasing;

/// Behaviour for queries outside the tabulated pressure range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Hold the end value (the boiling temperature saturates at the table edge).
    #[default]
    Clamp,
    /// Extend the first/last segment linearly.
    Linear,
}

/// Boiling curve backed by (pressure, temperature) knots.
///
/// Both columns are strictly increasing, so the table can be read in either
/// direction: [`BoilingCurve::temperature_at`] for P → T and
/// [`TabulatedCurve::pressure_at`] for T → P.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedCurve {
    pressures: Vec<f64>,
    temperatures: Vec<f64>,
    extrapolation: Extrapolation,
}

impl TabulatedCurve {
    /// Build a curve from pressure [Pa] and boiling temperature [K] columns.
    pub fn new(pressures: Vec<f64>, temperatures: Vec<f64>) -> CurveResult<Self> {
        if pressures.len() != temperatures.len() {
            return Err(CurveError::LengthMismatch {
                pressures: pressures.len(),
                temperatures: temperatures.len(),
            });
        }
        if pressures.len() < 2 {
            return Err(CurveError::TooFewPoints {
                len: pressures.len(),
            });
        }
        check_column(&pressures, "pressure")?;
        check_column(&temperatures, "temperature")?;

        Ok(Self {
            pressures,
            temperatures,
            extrapolation: Extrapolation::default(),
        })
    }

    /// Build a curve by sampling an Antoine fit at `samples` evenly spaced
    /// temperatures in `[t_min_k, t_max_k]`.
    pub fn from_antoine(
        coeffs: AntoineCoefficients,
        t_min_k: f64,
        t_max_k: f64,
        samples: usize,
    ) -> CurveResult<Self> {
        if samples < 2 {
            return Err(CurveError::TooFewPoints { len: samples });
        }
        if !(t_min_k.is_finite() && t_max_k.is_finite()) || t_max_k <= t_min_k {
            return Err(CurveError::InvalidArg {
                what: "temperature span must be finite and increasing",
            });
        }
        if t_min_k <= coeffs.c {
            return Err(CurveError::InvalidArg {
                what: "temperature span must lie above the Antoine C constant",
            });
        }

        let step = (t_max_k - t_min_k) / (samples - 1) as f64;
        let temperatures: Vec<f64> = (0..samples)
            .map(|i| t_min_k + step * i as f64)
            .collect();
        let pressures = temperatures
            .iter()
            .map(|&t| coeffs.pressure_pa(t))
            .collect();

        Self::new(pressures, temperatures)
    }

    /// Replace the out-of-range behaviour.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.pressures.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.pressures.is_empty()
    }

    /// Tabulated pressure span [Pa].
    pub fn pressure_range(&self) -> (f64, f64) {
        (self.pressures[0], self.pressures[self.pressures.len() - 1])
    }

    /// Tabulated temperature span [K].
    pub fn temperature_range(&self) -> (f64, f64) {
        (
            self.temperatures[0],
            self.temperatures[self.temperatures.len() - 1],
        )
    }

    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Inverse lookup: saturation pressure [Pa] at boiling temperature `t_k` [K].
    pub fn pressure_at(&self, t_k: f64) -> f64 {
        interpolate(&self.temperatures, &self.pressures, t_k, self.extrapolation)
    }
}

impl BoilingCurve for TabulatedCurve {
    fn temperature_at(&self, pressure_pa: f64) -> f64 {
        interpolate(
            &self.pressures,
            &self.temperatures,
            pressure_pa,
            self.extrapolation,
        )
    }
}

fn check_column(values: &[f64], what: &'static str) -> CurveResult<()> {
    if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(CurveError::NonFinite { what, value: bad });
    }
    if is_strictly_increasing(values) {
        return Ok(());
    }
    let index = values
        .windows(2)
        .position(|w| w[1] <= w[0])
        .map_or(0, |i| i + 1);
    Err(CurveError::NotMonotonic { what, index })
}

/// Piecewise-linear interpolation over strictly increasing `xs`.
fn interpolate(xs: &[f64], ys: &[f64], x: f64, extrapolation: Extrapolation) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let last = xs.len() - 1;

    let segment = if x <= xs[0] {
        if extrapolation == Extrapolation::Clamp {
            return ys[0];
        }
        0
    } else if x >= xs[last] {
        if extrapolation == Extrapolation::Clamp {
            return ys[last];
        }
        last - 1
    } else {
        // First knot strictly above x, minus one.
        xs.partition_point(|&v| v <= x) - 1
    };

    let (x0, x1) = (xs[segment], xs[segment + 1]);
    let (y0, y1) = (ys[segment], ys[segment + 1]);
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}
