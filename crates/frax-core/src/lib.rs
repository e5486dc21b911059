//! Core types and configuration for the Frax fracture simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation configuration with its validation rules, the shared
//! error types raised at the configuration boundary, step identifiers,
//! and the unit conversions applied before any physics runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod id;
pub mod units;

pub use config::{
    FormationConfig, InjectionConfig, LeakoffSetting, ProppantConfig, SimConfig, TimeConfig,
};
pub use error::ConfigError;
pub use id::StepId;
