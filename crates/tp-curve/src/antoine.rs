//! Antoine-form vapor-pressure fits.

/// Coefficients of `log10(P / kPa) = A - B / (T / K - C)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineCoefficients {
    const PA_PER_KPA: f64 = 1.0e3;

    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Vapor pressure [Pa] at `t_k` [K].
    ///
    /// Only meaningful for `t_k > c`; below that the fit has a pole.
    pub fn pressure_pa(&self, t_k: f64) -> f64 {
        10f64.powf(self.a - self.b / (t_k - self.c)) * Self::PA_PER_KPA
    }

    /// Boiling temperature [K] at `p_pa` [Pa] (closed-form inverse).
    pub fn temperature_k(&self, p_pa: f64) -> f64 {
        self.c + self.b / (self.a - (p_pa / Self::PA_PER_KPA).log10())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DFP: AntoineCoefficients = AntoineCoefficients::new(6.43876, 1242.510, 46.568);

    #[test]
    fn pressure_is_in_pascal() {
        // 10^(A - B/(T - C)) kPa at 298.15 K is about 31.6 kPa.
        let p = DFP.pressure_pa(298.15);
        assert!((p - 31_620.8).abs() < 1.0, "p = {p}");
    }

    #[test]
    fn inverse_round_trips() {
        for t in [240.0, 280.0, 320.0, 350.0] {
            let p = DFP.pressure_pa(t);
            assert!((DFP.temperature_k(p) - t).abs() < 1e-9);
        }
    }

    #[test]
    fn pressure_increases_with_temperature() {
        assert!(DFP.pressure_pa(300.0) > DFP.pressure_pa(290.0));
    }
}
