//! Physics models for the Frax fracture simulator.
//!
//! Each model is a stateless operator constructed once from validated
//! parameters and evaluated by the engine every step. Evaluation methods
//! are pure functions of their arguments and the construction-time
//! parameters: same inputs, bit-identical outputs.
//!
//! # Pipeline order (each step)
//!
//! 1. [`InjectionSchedule`] — current time → injection rate
//! 2. [`CarterLeakoff`] — pressure, time → per-cell fluid loss rate
//! 3. [`BridgingTransport`] — previous width → per-cell proppant
//!    concentration
//! 4. [`PknWidth`] — updated pressure → per-cell fracture width

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod injection;
pub mod leakoff;
pub mod proppant;
pub mod width;

pub use error::ModelError;
pub use injection::InjectionSchedule;
pub use leakoff::CarterLeakoff;
pub use proppant::BridgingTransport;
pub use width::PknWidth;
