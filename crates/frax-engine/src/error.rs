//! Engine construction and stepping errors.

use std::error::Error;
use std::fmt;

use frax_core::{ConfigError, StepId};
use frax_models::ModelError;

/// Errors from [`SimulationEngine::new`](crate::SimulationEngine::new).
///
/// Construction validates the configuration and builds all four models;
/// any invalid parameter aborts the run before the first step.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Configuration validation failed.
    Config(ConfigError),
    /// A model rejected its parameters.
    Model(ModelError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Model(e) => write!(f, "invalid model parameters: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Model(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ModelError> for EngineError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// The state vector a numeric anomaly was detected in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quantity {
    /// The pressure vector.
    Pressure,
    /// The width vector.
    Width,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "pressure"),
            Self::Width => write!(f, "width"),
        }
    }
}

/// Errors from [`SimulationEngine::execute_step`](crate::SimulationEngine::execute_step).
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// A non-finite value (NaN or infinity) appeared in a state vector.
    ///
    /// The engine fails fast at the first detection; `step` and `cell`
    /// identify where.
    NumericAnomaly {
        /// Which state vector went non-finite.
        quantity: Quantity,
        /// The step being executed when the anomaly appeared.
        step: StepId,
        /// Index of the first offending cell.
        cell: usize,
    },
    /// All configured steps have already executed; the run is complete.
    RunComplete {
        /// The configured step count.
        n_steps: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericAnomaly {
                quantity,
                step,
                cell,
            } => {
                write!(f, "non-finite {quantity} at step {step}, cell {cell}")
            }
            Self::RunComplete { n_steps } => {
                write!(f, "run already complete after {n_steps} steps")
            }
        }
    }
}

impl Error for StepError {}
