//! Per-step performance metrics.

/// Timing and memory data for a single step.
///
/// All durations are in microseconds. The engine populates these after
/// each `execute_step()`; consumers read them from the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step.
    pub total_us: u64,
    /// Time spent in the leak-off model.
    pub leakoff_us: u64,
    /// Time spent in the proppant transport pass.
    pub proppant_us: u64,
    /// Time spent in the width recomputation.
    pub width_us: u64,
    /// Bytes reserved for snapshot history.
    pub history_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.leakoff_us, 0);
        assert_eq!(m.proppant_us, 0);
        assert_eq!(m.width_us, 0);
        assert_eq!(m.history_bytes, 0);
    }
}
