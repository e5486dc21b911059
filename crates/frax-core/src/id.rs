//! Strongly-typed step identifier.

use std::fmt;

/// Monotonically increasing step counter.
///
/// Incremented each time the simulation advances one time step. Step `k`
/// corresponds to simulation time `k * time_step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// Simulation time at the start of this step.
    pub fn time(&self, time_step: f64) -> f64 {
        self.0 as f64 * time_step
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
