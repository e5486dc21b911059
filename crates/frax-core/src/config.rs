//! Simulation configuration, validation, and defaults.
//!
//! [`SimConfig`] is the single input for constructing a simulation. It is
//! immutable once built; [`validate()`](SimConfig::validate) checks every
//! structural invariant up front so the engine never has to re-check
//! parameters inside the step loop.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::units::bbl_per_min_to_m3_per_s;

// ── InjectionConfig ────────────────────────────────────────────────

/// Fluid injection parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InjectionConfig {
    /// Pumping rate at surface, in barrels per minute.
    ///
    /// This is the two-wing rate: the fracture grows symmetrically from
    /// the perforation and only one wing is modelled, so the rate fed to
    /// the solved wing is half of this (see [`effective_rate`](Self::effective_rate)).
    pub rate_bbl_per_min: f64,
    /// Injection duration in seconds. Injection is active for
    /// `t <= duration_s` (inclusive) and zero afterwards.
    pub duration_s: f64,
}

impl InjectionConfig {
    /// Single-wing injection rate in m³/s.
    ///
    /// Converts from bbl/min and halves the configured two-wing rate.
    pub fn effective_rate(&self) -> f64 {
        0.5 * bbl_per_min_to_m3_per_s(self.rate_bbl_per_min)
    }
}

// ── FormationConfig ────────────────────────────────────────────────

/// Rock formation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormationConfig {
    /// Young's modulus of the formation, in psi.
    pub youngs_modulus_psi: f64,
    /// Poisson ratio, dimensionless, in `[0, 0.5)`.
    pub poisson_ratio: f64,
    /// Minimum horizontal stress (closure pressure), in psi. Also the
    /// initial and reference pressure for the leak-off model.
    pub min_horizontal_stress_psi: f64,
}

// ── ProppantConfig ─────────────────────────────────────────────────

/// Proppant parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProppantConfig {
    /// Mean proppant particle diameter, in metres.
    pub diameter_m: f64,
    /// Maximum proppant volume fraction when the fracture is unobstructed,
    /// in `(0, 1]`.
    pub max_concentration: f64,
}

// ── TimeConfig ─────────────────────────────────────────────────────

/// Time discretization parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Total simulated time, in seconds.
    pub total_time_s: f64,
    /// Explicit time step, in seconds.
    pub time_step_s: f64,
}

impl TimeConfig {
    /// Number of steps the engine will execute: `floor(total / dt)`.
    pub fn step_count(&self) -> usize {
        (self.total_time_s / self.time_step_s) as usize
    }
}

// ── LeakoffSetting ─────────────────────────────────────────────────

/// Whether the Carter leak-off rate participates in the pressure balance.
///
/// The reference implementation computes the leak-off rate and then
/// discards it, so its pressure trajectory is injection-only. Both
/// behaviors are supported explicitly; the default preserves the
/// reference trajectory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeakoffSetting {
    /// Leak-off is forced to zero in the pressure balance.
    #[default]
    Disabled,
    /// The computed Carter rate is subtracted from the injection rate.
    Computed,
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
///
/// Constructed once (typically deserialized from JSON by the CLI) and
/// never mutated. All model parameters flow from here into the engine
/// and models explicitly — nothing reads ambient global state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fluid injection parameters.
    pub injection: InjectionConfig,
    /// Rock formation parameters.
    pub formation: FormationConfig,
    /// Proppant parameters.
    pub proppant: ProppantConfig,
    /// Time discretization.
    pub simulation: TimeConfig,
    /// Leak-off participation in the pressure balance.
    #[serde(default)]
    pub leakoff: LeakoffSetting,
}

impl SimConfig {
    /// Validate all structural invariants.
    ///
    /// Returns the first violation found, naming the offending field and
    /// its value. A config that passes here cannot fail model
    /// construction later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Strictly positive numeric fields.
        let positive = [
            ("injection.rate_bbl_per_min", self.injection.rate_bbl_per_min),
            ("injection.duration_s", self.injection.duration_s),
            (
                "formation.youngs_modulus_psi",
                self.formation.youngs_modulus_psi,
            ),
            (
                "formation.min_horizontal_stress_psi",
                self.formation.min_horizontal_stress_psi,
            ),
            ("proppant.diameter_m", self.proppant.diameter_m),
            ("simulation.total_time_s", self.simulation.total_time_s),
            ("simulation.time_step_s", self.simulation.time_step_s),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteField { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveField { field, value });
            }
        }

        // 2. Poisson ratio in [0, 0.5). The upper bound keeps the
        //    plane-strain modulus positive and physically meaningful.
        let nu = self.formation.poisson_ratio;
        if !nu.is_finite() {
            return Err(ConfigError::NonFiniteField {
                field: "formation.poisson_ratio",
                value: nu,
            });
        }
        if !(0.0..0.5).contains(&nu) {
            return Err(ConfigError::PoissonRatioOutOfRange { value: nu });
        }

        // 3. Max concentration is a volume fraction.
        let c_max = self.proppant.max_concentration;
        if !c_max.is_finite() {
            return Err(ConfigError::NonFiniteField {
                field: "proppant.max_concentration",
                value: c_max,
            });
        }
        if c_max <= 0.0 || c_max > 1.0 {
            return Err(ConfigError::ConcentrationOutOfRange { value: c_max });
        }

        // 4. At least one step must execute.
        if self.simulation.time_step_s > self.simulation.total_time_s {
            return Err(ConfigError::TimeStepExceedsTotal {
                time_step: self.simulation.time_step_s,
                total_time: self.simulation.total_time_s,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SimConfig {
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
            leakoff: LeakoffSetting::Disabled,
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_negative_rate_fails() {
        let mut cfg = valid_config();
        cfg.injection.rate_bbl_per_min = -1.0;
        match cfg.validate() {
            Err(ConfigError::NonPositiveField { field, value }) => {
                assert_eq!(field, "injection.rate_bbl_per_min");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected NonPositiveField, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_stress_fails() {
        let mut cfg = valid_config();
        cfg.formation.min_horizontal_stress_psi = 0.0;
        match cfg.validate() {
            Err(ConfigError::NonPositiveField { field, .. }) => {
                assert_eq!(field, "formation.min_horizontal_stress_psi");
            }
            other => panic!("expected NonPositiveField, got {other:?}"),
        }
    }

    #[test]
    fn validate_nan_modulus_fails() {
        let mut cfg = valid_config();
        cfg.formation.youngs_modulus_psi = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFiniteField { .. })
        ));
    }

    #[test]
    fn validate_poisson_out_of_range_fails() {
        for nu in [-0.1, 0.5, 0.7] {
            let mut cfg = valid_config();
            cfg.formation.poisson_ratio = nu;
            match cfg.validate() {
                Err(ConfigError::PoissonRatioOutOfRange { value }) => assert_eq!(value, nu),
                other => panic!("expected PoissonRatioOutOfRange for {nu}, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_poisson_zero_is_allowed() {
        let mut cfg = valid_config();
        cfg.formation.poisson_ratio = 0.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_concentration_above_one_fails() {
        let mut cfg = valid_config();
        cfg.proppant.max_concentration = 1.2;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ConcentrationOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_time_step_exceeding_total_fails() {
        let mut cfg = valid_config();
        cfg.simulation.time_step_s = 120.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TimeStepExceedsTotal { .. })
        ));
    }

    #[test]
    fn step_count_floors() {
        let time = TimeConfig {
            total_time_s: 60.0,
            time_step_s: 1.0,
        };
        assert_eq!(time.step_count(), 60);

        let time = TimeConfig {
            total_time_s: 10.0,
            time_step_s: 3.0,
        };
        assert_eq!(time.step_count(), 3);
    }

    #[test]
    fn effective_rate_halves_and_converts() {
        // 60 bbl/min → 0.158987 m³/s two-wing → half per wing.
        let inj = InjectionConfig {
            rate_bbl_per_min: 60.0,
            duration_s: 30.0,
        };
        assert!((inj.effective_rate() - 0.5 * 0.158987).abs() < 1e-12);
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = valid_config();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn leakoff_setting_defaults_to_disabled() {
        // A config file without the leakoff key gets the reference behavior.
        let json = r#"{
            "injection": { "rate_bbl_per_min": 20.0, "duration_s": 30.0 },
            "formation": {
                "youngs_modulus_psi": 3e6,
                "poisson_ratio": 0.25,
                "min_horizontal_stress_psi": 5000.0
            },
            "proppant": { "diameter_m": 0.0004, "max_concentration": 0.3 },
            "simulation": { "total_time_s": 60.0, "time_step_s": 1.0 }
        }"#;
        let cfg: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.leakoff, LeakoffSetting::Disabled);
    }
}
