//! Simulation engine: the single-threaded fracture stepping loop.
//!
//! [`SimulationEngine`] owns the per-cell state vectors (pressure, width,
//! proppant) and advances them through a bounded, counted loop. Each step
//! evaluates the four physics models in a fixed order and records a
//! snapshot pair into a preallocated [`History`]. There is no early exit
//! and no convergence check: a run either completes all of its steps or
//! fails whole.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod history;
pub mod metrics;
pub mod state;

pub use engine::{RunSummary, SimulationEngine, WIDTH_EPSILON};
pub use error::{EngineError, Quantity, StepError};
pub use history::History;
pub use metrics::StepMetrics;
pub use state::FractureState;
