//! Proppant transport with a three-tier bridging threshold.

use crate::error::ModelError;

/// Bridging-threshold proppant transport.
///
/// Concentration is a step function of the width-to-diameter ratio,
/// evaluated independently per cell:
///
/// - `w < 1.5 d` → `0` (bridged, proppant cannot pass)
/// - `1.5 d <= w < 1.8 d` → `c_max / 2` (partial bridging)
/// - `w >= 1.8 d` → `c_max` (unobstructed)
///
/// The 1.5/1.8 thresholds are a bridging heuristic, not a physical law;
/// they are fixed constants and must be preserved exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BridgingTransport {
    diameter: f64,
    max_concentration: f64,
}

impl BridgingTransport {
    /// Width/diameter ratio below which the fracture is fully bridged.
    pub const BRIDGED_RATIO: f64 = 1.5;
    /// Width/diameter ratio above which transport is unobstructed.
    pub const OPEN_RATIO: f64 = 1.8;

    /// Create a transport model for the given particle diameter and
    /// maximum volume fraction.
    ///
    /// Fails if either is not positive and finite.
    pub fn new(diameter: f64, max_concentration: f64) -> Result<Self, ModelError> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(ModelError::NonPositiveDiameter { value: diameter });
        }
        if !max_concentration.is_finite() || max_concentration <= 0.0 {
            return Err(ModelError::NonPositiveConcentration {
                value: max_concentration,
            });
        }
        Ok(Self {
            diameter,
            max_concentration,
        })
    }

    /// Proppant concentration for the given fracture width.
    pub fn concentration(&self, width: f64) -> f64 {
        if width < Self::BRIDGED_RATIO * self.diameter {
            0.0
        } else if width < Self::OPEN_RATIO * self.diameter {
            0.5 * self.max_concentration
        } else {
            self.max_concentration
        }
    }

    /// The configured maximum concentration.
    pub fn max_concentration(&self) -> f64 {
        self.max_concentration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_model() -> BridgingTransport {
        BridgingTransport::new(0.0004, 0.3).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(matches!(
            BridgingTransport::new(0.0, 0.3),
            Err(ModelError::NonPositiveDiameter { .. })
        ));
        assert!(matches!(
            BridgingTransport::new(-0.0004, 0.3),
            Err(ModelError::NonPositiveDiameter { .. })
        ));
        assert!(matches!(
            BridgingTransport::new(0.0004, 0.0),
            Err(ModelError::NonPositiveConcentration { .. })
        ));
    }

    #[test]
    fn tier_boundaries() {
        let model = reference_model();
        let d = 0.0004;
        // Below 1.5d: bridged.
        assert_eq!(model.concentration(0.0), 0.0);
        assert_eq!(model.concentration(1.49 * d), 0.0);
        // [1.5d, 1.8d): partial.
        assert_eq!(model.concentration(1.5 * d), 0.15);
        assert_eq!(model.concentration(1.79 * d), 0.15);
        // >= 1.8d: full.
        assert_eq!(model.concentration(1.8 * d), 0.3);
        assert_eq!(model.concentration(1.0), 0.3);
    }

    proptest! {
        #[test]
        fn concentration_takes_only_three_values(w in 0.0f64..0.01) {
            let model = reference_model();
            let c = model.concentration(w);
            prop_assert!(
                c == 0.0 || c == 0.15 || c == 0.3,
                "unexpected concentration {c} for width {w}"
            );
        }

        #[test]
        fn concentration_monotone_in_width(
            w in 0.0f64..0.01,
            dw in 0.0f64..0.01,
        ) {
            let model = reference_model();
            prop_assert!(model.concentration(w + dw) >= model.concentration(w));
        }

        #[test]
        fn evaluation_is_idempotent(w in 0.0f64..0.01) {
            let model = reference_model();
            prop_assert_eq!(
                model.concentration(w).to_bits(),
                model.concentration(w).to_bits()
            );
        }
    }
}
