//! Errors raised at the configuration boundary.

use std::error::Error;
use std::fmt;

/// Errors detected during [`SimConfig::validate()`](crate::SimConfig::validate).
///
/// Every variant carries the offending value so callers can report the
/// exact field that failed, not just that validation failed. An invalid
/// configuration aborts the run before the first step.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric field that must be strictly positive was zero or negative.
    NonPositiveField {
        /// Name of the failing field.
        field: &'static str,
        /// The configured value.
        value: f64,
    },
    /// A numeric field was NaN or infinite.
    NonFiniteField {
        /// Name of the failing field.
        field: &'static str,
        /// The configured value.
        value: f64,
    },
    /// Poisson ratio outside `[0, 0.5)`.
    PoissonRatioOutOfRange {
        /// The configured value.
        value: f64,
    },
    /// Proppant maximum concentration outside `(0, 1]`.
    ConcentrationOutOfRange {
        /// The configured value.
        value: f64,
    },
    /// The time step exceeds the total simulation time, so not even one
    /// step would execute.
    TimeStepExceedsTotal {
        /// The configured time step.
        time_step: f64,
        /// The configured total time.
        total_time: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveField { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::NonFiniteField { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            Self::PoissonRatioOutOfRange { value } => {
                write!(f, "poisson_ratio must be in [0, 0.5), got {value}")
            }
            Self::ConcentrationOutOfRange { value } => {
                write!(f, "max_concentration must be in (0, 1], got {value}")
            }
            Self::TimeStepExceedsTotal {
                time_step,
                total_time,
            } => {
                write!(
                    f,
                    "time_step ({time_step}) exceeds total_time ({total_time}); \
                     no steps would run"
                )
            }
        }
    }
}

impl Error for ConfigError {}
