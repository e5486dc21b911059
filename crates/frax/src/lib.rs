//! Frax: a simplified one-dimensional hydraulic fracturing simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Frax sub-crates. For most users, adding `frax` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use frax::prelude::*;
//!
//! let config = SimConfig {
//!     injection: InjectionConfig {
//!         rate_bbl_per_min: 20.0,
//!         duration_s: 30.0,
//!     },
//!     formation: FormationConfig {
//!         youngs_modulus_psi: 3.0e6,
//!         poisson_ratio: 0.25,
//!         min_horizontal_stress_psi: 5000.0,
//!     },
//!     proppant: ProppantConfig {
//!         diameter_m: 0.0004,
//!         max_concentration: 0.3,
//!     },
//!     simulation: TimeConfig {
//!         total_time_s: 60.0,
//!         time_step_s: 1.0,
//!     },
//!     leakoff: LeakoffSetting::Disabled,
//! };
//!
//! let mesh = Mesh::new(100, 50.0).unwrap();
//! let mut engine = SimulationEngine::new(&config, &mesh).unwrap();
//! let summary = engine.run().unwrap();
//! assert_eq!(summary.steps_executed, 60);
//! assert_eq!(engine.history().len(), 60);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `frax-core` | Configuration, validation, IDs, unit conversions |
//! | [`mesh`] | `frax-mesh` | The uniform 1-D cell grid |
//! | [`models`] | `frax-models` | Injection, leak-off, width, and proppant physics |
//! | [`engine`] | `frax-engine` | The stepping loop, state vectors, and history |
//! | [`output`] | `frax-output` | CSV result export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Configuration, validation, IDs, and unit conversions (`frax-core`).
///
/// Contains [`types::SimConfig`] with its section structs, the
/// configuration-boundary error types, and barrel-to-SI conversion
/// helpers in [`types::units`].
pub use frax_core as types;

/// The uniform one-dimensional cell grid (`frax-mesh`).
///
/// Provides [`mesh::Mesh`] and the [`mesh::INJECTION_CELL`] index.
pub use frax_mesh as mesh;

/// Physics models (`frax-models`).
///
/// [`models::InjectionSchedule`], [`models::CarterLeakoff`],
/// [`models::PknWidth`], and [`models::BridgingTransport`], each
/// validated at construction.
pub use frax_models as models;

/// The stepping loop, state vectors, and history (`frax-engine`).
///
/// [`engine::SimulationEngine`] drives the bounded time loop and records
/// snapshots into [`engine::History`].
pub use frax_engine as engine;

/// CSV result export (`frax-output`).
///
/// Flatten a recorded history into long-format rows with
/// [`output::CsvWriter`].
pub use frax_output as output;

/// Common imports for typical Frax usage.
///
/// ```rust
/// use frax::prelude::*;
/// ```
///
/// This imports the most frequently used types: the configuration
/// structs, the mesh, the engine, and the CSV writer.
pub mod prelude {
    // Configuration
    pub use frax_core::{
        FormationConfig, InjectionConfig, LeakoffSetting, ProppantConfig, SimConfig, StepId,
        TimeConfig,
    };

    // Errors
    pub use frax_core::ConfigError;
    pub use frax_engine::{EngineError, StepError};
    pub use frax_mesh::MeshError;
    pub use frax_models::ModelError;
    pub use frax_output::OutputError;

    // Mesh
    pub use frax_mesh::{Mesh, INJECTION_CELL};

    // Engine
    pub use frax_engine::{
        FractureState, History, RunSummary, SimulationEngine, StepMetrics,
    };

    // Output
    pub use frax_output::CsvWriter;
}
