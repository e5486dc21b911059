//! Carter-style leak-off into the formation.

use crate::error::ModelError;

/// Simplified Carter leak-off model.
///
/// Per cell: `rate[i] = C * (1 + α * (p[i] - p_ref) / p_ref) / sqrt(t + ε)`
/// with negative results clamped to zero — leak-off removes fluid, never
/// adds it. The rate decays with `1/sqrt(t)` and grows with net pressure
/// above the reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarterLeakoff {
    reference_pressure: f64,
}

impl CarterLeakoff {
    /// Leak-off coefficient, m/s^0.5.
    pub const COEFFICIENT: f64 = 1.0e-6;
    /// Pressure sensitivity factor, dimensionless.
    pub const ALPHA: f64 = 0.1;
    /// Guards the `1/sqrt(t)` singularity at `t = 0`.
    pub const TIME_EPSILON: f64 = 1.0e-6;

    /// Create a leak-off model referenced to the closure pressure.
    ///
    /// Fails if `reference_pressure` is not positive and finite — the
    /// pressure-sensitivity term divides by it.
    pub fn new(reference_pressure: f64) -> Result<Self, ModelError> {
        if !reference_pressure.is_finite() || reference_pressure <= 0.0 {
            return Err(ModelError::NonPositiveReferencePressure {
                value: reference_pressure,
            });
        }
        Ok(Self { reference_pressure })
    }

    /// Leak-off rate at a single cell.
    pub fn rate(&self, pressure: f64, t: f64) -> f64 {
        let sensitivity =
            1.0 + Self::ALPHA * (pressure - self.reference_pressure) / self.reference_pressure;
        let rate = Self::COEFFICIENT * sensitivity / (t + Self::TIME_EPSILON).sqrt();
        rate.max(0.0)
    }

    /// Leak-off rates for a whole pressure vector, same length as input.
    pub fn rates(&self, pressure: &[f64], t: f64) -> Vec<f64> {
        pressure.iter().map(|&p| self.rate(p, t)).collect()
    }

    /// The configured reference pressure.
    pub fn reference_pressure(&self) -> f64 {
        self.reference_pressure
    }
}
