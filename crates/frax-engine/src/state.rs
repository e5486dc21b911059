//! Mutable per-cell simulation state.

/// The per-cell state vectors owned exclusively by the engine.
///
/// Updated in place every step; never accessed concurrently. Invariants
/// maintained by the step loop: `width[i] >= 0` always (the width model
/// clamps), and `proppant[i]` only ever takes one of the three transport
/// tiers.
#[derive(Clone, Debug, PartialEq)]
pub struct FractureState {
    /// Fluid pressure per cell, psi. No hard floor, but expected to track
    /// near or above the minimum horizontal stress.
    pub pressure: Vec<f64>,
    /// Fracture width per cell, metres. Never negative.
    pub width: Vec<f64>,
    /// Proppant volume fraction per cell.
    pub proppant: Vec<f64>,
}

impl FractureState {
    /// Initial state: pressure at the minimum horizontal stress
    /// everywhere, width and proppant zero.
    pub fn new(cell_count: usize, min_horizontal_stress: f64) -> Self {
        Self {
            pressure: vec![min_horizontal_stress; cell_count],
            width: vec![0.0; cell_count],
            proppant: vec![0.0; cell_count],
        }
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.pressure.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = FractureState::new(4, 5000.0);
        assert_eq!(state.cell_count(), 4);
        assert!(state.pressure.iter().all(|&p| p == 5000.0));
        assert!(state.width.iter().all(|&w| w == 0.0));
        assert!(state.proppant.iter().all(|&c| c == 0.0));
    }
}
