//! Model construction errors.

use std::error::Error;
use std::fmt;

/// Physically invalid model parameters, rejected at construction.
///
/// All validation happens when a model is built, so evaluation methods
/// are total for finite inputs and the step loop never re-checks
/// parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelError {
    /// Leak-off reference pressure must be positive (it divides the
    /// pressure-sensitivity term).
    NonPositiveReferencePressure {
        /// The offending value.
        value: f64,
    },
    /// Poisson ratio outside `[0, 1)` gives a zero or negative
    /// plane-strain modulus.
    PoissonRatioOutOfRange {
        /// The offending value.
        value: f64,
    },
    /// Proppant diameter must be positive (it divides the bridging ratio).
    NonPositiveDiameter {
        /// The offending value.
        value: f64,
    },
    /// Maximum proppant concentration must be positive.
    NonPositiveConcentration {
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveReferencePressure { value } => {
                write!(f, "reference pressure must be positive, got {value}")
            }
            Self::PoissonRatioOutOfRange { value } => {
                write!(f, "poisson ratio must be in [0, 1), got {value}")
            }
            Self::NonPositiveDiameter { value } => {
                write!(f, "proppant diameter must be positive, got {value}")
            }
            Self::NonPositiveConcentration { value } => {
                write!(f, "max concentration must be positive, got {value}")
            }
        }
    }
}

impl Error for ModelError {}
