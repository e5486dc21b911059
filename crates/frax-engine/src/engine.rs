//! The coupled physics stepping loop.

use std::time::Instant;

use frax_core::{LeakoffSetting, SimConfig, StepId};
use frax_mesh::{Mesh, INJECTION_CELL};
use frax_models::{BridgingTransport, CarterLeakoff, InjectionSchedule, PknWidth};

use crate::error::{EngineError, Quantity, StepError};
use crate::history::History;
use crate::metrics::StepMetrics;
use crate::state::FractureState;

/// Guards the pressure-balance division when the injection-cell width is
/// exactly zero (first step, or a closed fracture).
pub const WIDTH_EPSILON: f64 = 1.0e-6;

// ── RunSummary ─────────────────────────────────────────────────────

/// Result of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps executed (always the full configured count on success).
    pub steps_executed: usize,
    /// Metrics from the final step.
    pub last_metrics: StepMetrics,
}

// ── SimulationEngine ───────────────────────────────────────────────

/// Owns the mutable state vectors and drives the explicit time loop.
///
/// Each step evaluates the models in a fixed, load-bearing order:
///
/// 1. injection rate from the schedule (single-wing, converted at the
///    config boundary)
/// 2. leak-off vector from the current pressure
/// 3. pressure balance at the injection cell only — pressure propagation
///    across cells is not modelled
/// 4. proppant concentration from the **previous step's** width
/// 5. whole-vector width recomputation from the updated pressure
/// 6. snapshot append
///
/// Non-finite values in the updated pressure or width abort the run with
/// [`StepError::NumericAnomaly`] naming the step and cell.
pub struct SimulationEngine {
    schedule: InjectionSchedule,
    leakoff: CarterLeakoff,
    leakoff_setting: LeakoffSetting,
    width_model: PknWidth,
    transport: BridgingTransport,
    dt: f64,
    n_steps: usize,
    current_step: u64,
    state: FractureState,
    history: History,
    last_metrics: StepMetrics,
}

impl SimulationEngine {
    /// Construct an engine from a validated configuration and a mesh.
    ///
    /// Validates the configuration, builds all four models, and
    /// preallocates state and history. Any invalid parameter fails here,
    /// before the first step.
    pub fn new(config: &SimConfig, mesh: &Mesh) -> Result<Self, EngineError> {
        config.validate()?;

        let sigma_min = config.formation.min_horizontal_stress_psi;
        let schedule = InjectionSchedule::new(
            config.injection.effective_rate(),
            config.injection.duration_s,
        );
        let leakoff = CarterLeakoff::new(sigma_min)?;
        let width_model = PknWidth::new(
            config.formation.youngs_modulus_psi,
            config.formation.poisson_ratio,
            sigma_min,
        )?;
        let transport = BridgingTransport::new(
            config.proppant.diameter_m,
            config.proppant.max_concentration,
        )?;

        let n_steps = config.simulation.step_count();
        let cell_count = mesh.cell_count();

        Ok(Self {
            schedule,
            leakoff,
            leakoff_setting: config.leakoff,
            width_model,
            transport,
            dt: config.simulation.time_step_s,
            n_steps,
            current_step: 0,
            state: FractureState::new(cell_count, sigma_min),
            history: History::with_capacity(n_steps, cell_count),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Execute one step.
    ///
    /// Returns [`StepError::RunComplete`] once all configured steps have
    /// executed, and [`StepError::NumericAnomaly`] on the first
    /// non-finite value in the updated state.
    pub fn execute_step(&mut self) -> Result<(), StepError> {
        let step_start = Instant::now();

        // 0. Bounded counted loop: nothing runs past n_steps.
        if self.current_step as usize >= self.n_steps {
            return Err(StepError::RunComplete {
                n_steps: self.n_steps,
            });
        }
        let step = StepId(self.current_step);
        let t = step.time(self.dt);

        // 1. Injection rate at this time.
        let injection_rate = self.schedule.rate_at(t);

        // 2. Leak-off vector from the current pressure.
        let leak_start = Instant::now();
        let leak = match self.leakoff_setting {
            LeakoffSetting::Computed => self.leakoff.rates(&self.state.pressure, t),
            LeakoffSetting::Disabled => vec![0.0; self.state.cell_count()],
        };
        let leakoff_us = leak_start.elapsed().as_micros() as u64;

        // 3. Pressure balance at the injection cell only.
        let well_width = self.state.width[INJECTION_CELL];
        self.state.pressure[INJECTION_CELL] +=
            (injection_rate - leak[INJECTION_CELL]) * self.dt / (well_width + WIDTH_EPSILON);
        if !self.state.pressure[INJECTION_CELL].is_finite() {
            return Err(StepError::NumericAnomaly {
                quantity: Quantity::Pressure,
                step,
                cell: INJECTION_CELL,
            });
        }

        // 4. Proppant reacts to the previous step's geometry: the width
        //    vector has not been recomputed yet.
        let proppant_start = Instant::now();
        for i in 0..self.state.cell_count() {
            self.state.proppant[i] = self.transport.concentration(self.state.width[i]);
        }
        let proppant_us = proppant_start.elapsed().as_micros() as u64;

        // 5. Whole-vector width recomputation from the updated pressure.
        let width_start = Instant::now();
        self.state.width = self.width_model.compute(&self.state.pressure);
        let width_us = width_start.elapsed().as_micros() as u64;
        if let Some(cell) = self.state.width.iter().position(|w| !w.is_finite()) {
            return Err(StepError::NumericAnomaly {
                quantity: Quantity::Width,
                step,
                cell,
            });
        }

        // 6. Snapshot append.
        self.history.record(&self.state.width, &self.state.pressure);
        self.current_step += 1;

        self.last_metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            leakoff_us,
            proppant_us,
            width_us,
            history_bytes: self.history.memory_bytes(),
        };
        Ok(())
    }

    /// Run all remaining steps to completion.
    pub fn run(&mut self) -> Result<RunSummary, StepError> {
        while (self.current_step as usize) < self.n_steps {
            self.execute_step()?;
        }
        Ok(RunSummary {
            steps_executed: self.n_steps,
            last_metrics: self.last_metrics.clone(),
        })
    }

    /// The step that will execute next.
    pub fn current_step(&self) -> StepId {
        StepId(self.current_step)
    }

    /// Total configured step count.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// The configured time step.
    pub fn time_step(&self) -> f64 {
        self.dt
    }

    /// Read-only view of the current state vectors.
    pub fn state(&self) -> &FractureState {
        &self.state
    }

    /// Snapshot history recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
