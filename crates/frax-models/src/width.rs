//! PKN-like fracture width from net pressure.

use std::f64::consts::PI;

use crate::error::ModelError;

/// Reverse-coupled width model: width is driven by net pressure above
/// the minimum horizontal stress through a PKN-like relation.
///
/// Per cell:
///
/// 1. `E' = E / (1 - ν²)` (plane-strain modulus, computed once)
/// 2. `p_net = p[i] - σ_min` (may be negative)
/// 3. `h = H0 + s * p_net` (pressure-dependent height; may itself go
///    negative for very negative net pressure — accepted simplification)
/// 4. `w[i] = 4 * p_net * h / (π * E')`
/// 5. `w[i] = max(w[i], 0)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PknWidth {
    plane_strain_modulus: f64,
    min_horizontal_stress: f64,
}

impl PknWidth {
    /// Base fracture height, metres.
    pub const BASE_HEIGHT: f64 = 10.0;
    /// Height growth per unit net pressure, m/psi.
    pub const HEIGHT_SENSITIVITY: f64 = 0.01;

    /// Create a width model from elastic and stress parameters.
    ///
    /// Fails if `poisson_ratio` is outside `[0, 1)`, which would make the
    /// plane-strain modulus zero, negative, or undefined.
    pub fn new(
        youngs_modulus: f64,
        poisson_ratio: f64,
        min_horizontal_stress: f64,
    ) -> Result<Self, ModelError> {
        if !poisson_ratio.is_finite() || !(0.0..1.0).contains(&poisson_ratio) {
            return Err(ModelError::PoissonRatioOutOfRange {
                value: poisson_ratio,
            });
        }
        Ok(Self {
            plane_strain_modulus: youngs_modulus / (1.0 - poisson_ratio * poisson_ratio),
            min_horizontal_stress,
        })
    }

    /// Fracture width at a single cell for the given pressure.
    pub fn width_at(&self, pressure: f64) -> f64 {
        let net_pressure = pressure - self.min_horizontal_stress;
        let height = Self::BASE_HEIGHT + Self::HEIGHT_SENSITIVITY * net_pressure;
        let width = (4.0 * net_pressure * height) / (PI * self.plane_strain_modulus);
        width.max(0.0)
    }

    /// Width vector for a whole pressure vector, same length as input.
    pub fn compute(&self, pressure: &[f64]) -> Vec<f64> {
        pressure.iter().map(|&p| self.width_at(p)).collect()
    }

    /// The plane-strain modulus `E / (1 - ν²)`.
    pub fn plane_strain_modulus(&self) -> f64 {
        self.plane_strain_modulus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_model() -> PknWidth {
        PknWidth::new(3.0e6, 0.25, 5000.0).unwrap()
    }

    #[test]
    fn poisson_out_of_range_rejected() {
        for bad in [-0.1, 1.0, 1.5, f64::NAN] {
            assert!(matches!(
                PknWidth::new(3.0e6, bad, 5000.0),
                Err(ModelError::PoissonRatioOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn plane_strain_modulus_value() {
        let model = reference_model();
        // E / (1 - 0.25²) = 3e6 / 0.9375
        assert!((model.plane_strain_modulus() - 3.2e6).abs() < 1.0);
    }

    #[test]
    fn zero_net_pressure_gives_zero_width() {
        let model = reference_model();
        assert_eq!(model.width_at(5000.0), 0.0);
    }

    #[test]
    fn positive_net_pressure_opens_fracture() {
        let model = reference_model();
        let width = model.width_at(5100.0);
        // 4 * 100 * (10 + 0.01*100) / (π * 3.2e6)
        let expected = 4.0 * 100.0 * 11.0 / (std::f64::consts::PI * 3.2e6);
        assert!((width - expected).abs() < 1e-12, "got {width}");
    }

    #[test]
    fn negative_net_pressure_clamps_to_zero() {
        let model = reference_model();
        assert_eq!(model.width_at(4000.0), 0.0);
    }

    #[test]
    fn vector_form_matches_scalar() {
        let model = reference_model();
        let pressure = [4900.0, 5000.0, 5250.0];
        let widths = model.compute(&pressure);
        assert_eq!(widths.len(), 3);
        for (i, &p) in pressure.iter().enumerate() {
            assert_eq!(widths[i], model.width_at(p));
        }
    }

    proptest! {
        #[test]
        fn width_never_negative(p in -1.0e6f64..1.0e6) {
            let model = reference_model();
            prop_assert!(model.width_at(p) >= 0.0);
        }

        #[test]
        fn width_monotone_in_pressure_above_closure(
            p in 5000.0f64..1.0e5,
            dp in 1.0f64..1000.0,
        ) {
            // Above closure both net pressure and height grow with p,
            // so width must not decrease.
            let model = reference_model();
            prop_assert!(model.width_at(p + dp) >= model.width_at(p));
        }

        #[test]
        fn evaluation_is_idempotent(p in -1.0e6f64..1.0e6) {
            let model = reference_model();
            prop_assert_eq!(model.width_at(p).to_bits(), model.width_at(p).to_bits());
        }
    }
}
