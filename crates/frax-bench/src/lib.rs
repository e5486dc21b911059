//! Benchmark profiles and utilities for the Frax fracturing simulator.
//!
//! Provides pre-built configurations for benchmarking:
//!
//! - [`reference_profile`]: the 100-cell, 60-step reference scenario
//! - [`long_profile`]: the same physics over 3600 steps for loop-cost
//!   measurement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frax_core::{
    FormationConfig, InjectionConfig, LeakoffSetting, ProppantConfig, SimConfig, TimeConfig,
};
use frax_mesh::Mesh;

/// The reference scenario: 30 s of pumping at 20 bbl/min into a 3 Mpsi
/// formation, simulated for 60 one-second steps.
pub fn reference_profile() -> SimConfig {
    SimConfig {
        injection: InjectionConfig {
            rate_bbl_per_min: 20.0,
            duration_s: 30.0,
        },
        formation: FormationConfig {
            youngs_modulus_psi: 3.0e6,
            poisson_ratio: 0.25,
            min_horizontal_stress_psi: 5000.0,
        },
        proppant: ProppantConfig {
            diameter_m: 0.0004,
            max_concentration: 0.3,
        },
        simulation: TimeConfig {
            total_time_s: 60.0,
            time_step_s: 1.0,
        },
        leakoff: LeakoffSetting::Computed,
    }
}

/// The reference physics over an hour of simulated time (3600 steps).
pub fn long_profile() -> SimConfig {
    let mut config = reference_profile();
    config.injection.duration_s = 1800.0;
    config.simulation.total_time_s = 3600.0;
    config
}

/// The reference mesh: 100 cells over a 50 m half-length.
pub fn reference_mesh() -> Mesh {
    Mesh::new(100, 50.0).unwrap()
}
