//! Injection schedule: rate as a pure function of elapsed time.

/// Constant-rate injection for a fixed duration, zero afterwards.
///
/// The boundary is inclusive: at `t == duration` injection is still
/// active. Pure and total for finite inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InjectionSchedule {
    rate: f64,
    duration: f64,
}

impl InjectionSchedule {
    /// Create a schedule delivering `rate` (m³/s) for `duration` seconds.
    pub fn new(rate: f64, duration: f64) -> Self {
        Self { rate, duration }
    }

    /// Injection rate at time `t`.
    pub fn rate_at(&self, t: f64) -> f64 {
        if t <= self.duration {
            self.rate
        } else {
            0.0
        }
    }

    /// The configured rate while injecting.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The configured injection duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn active_until_duration_inclusive() {
        let schedule = InjectionSchedule::new(1.0e-3, 30.0);
        assert_eq!(schedule.rate_at(0.0), 1.0e-3);
        assert_eq!(schedule.rate_at(29.9), 1.0e-3);
        assert_eq!(schedule.rate_at(30.0), 1.0e-3);
    }

    #[test]
    fn zero_after_duration() {
        let schedule = InjectionSchedule::new(1.0e-3, 30.0);
        assert_eq!(schedule.rate_at(30.0 + f64::EPSILON * 64.0), 0.0);
        assert_eq!(schedule.rate_at(60.0), 0.0);
    }

    proptest! {
        #[test]
        fn rate_is_two_valued(
            rate in 1.0e-6f64..1.0,
            duration in 1.0f64..100.0,
            t in 0.0f64..200.0,
        ) {
            let schedule = InjectionSchedule::new(rate, duration);
            let r = schedule.rate_at(t);
            if t <= duration {
                prop_assert_eq!(r, rate);
            } else {
                prop_assert_eq!(r, 0.0);
            }
        }

        #[test]
        fn evaluation_is_idempotent(
            rate in 1.0e-6f64..1.0,
            duration in 1.0f64..100.0,
            t in 0.0f64..200.0,
        ) {
            let schedule = InjectionSchedule::new(rate, duration);
            prop_assert_eq!(schedule.rate_at(t).to_bits(), schedule.rate_at(t).to_bits());
        }
    }
}
