use serde::{Deserialize, Serialize};

use crate::{Float, SwarmError};

/// A geometrically decaying inertia weight with a floor.
///
/// After every step the weight becomes $`\max(\beta\,\omega, \omega_\text{min})`$.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InertiaSchedule {
    /// The weight used for the first step
    pub initial_weight: Float,
    /// The multiplicative decay $`\beta`$ applied after each step
    pub decay_factor: Float,
    /// The floor below which the weight never decays
    pub min_weight: Float,
}

impl Default for InertiaSchedule {
    fn default() -> Self {
        Self {
            initial_weight: 1.4,
            decay_factor: 0.9,
            min_weight: 0.3,
        }
    }
}

impl InertiaSchedule {
    /// A schedule which keeps the weight fixed at `weight`.
    pub const fn constant(weight: Float) -> Self {
        Self {
            initial_weight: weight,
            decay_factor: 1.0,
            min_weight: weight,
        }
    }
    /// Returns the weight that follows `weight` in this schedule.
    pub fn next(&self, weight: Float) -> Float {
        Float::max(weight * self.decay_factor, self.min_weight)
    }
}

/// The configuration of a [`SwarmOptimizer`](crate::SwarmOptimizer).
///
/// The defaults reproduce the classic Himmelblau demonstration: $`c_1 = 0.4`$,
/// $`c_2 = 1.5`$, $`v_\text{max} = 5`$, an inertia weight starting at `1.4` and decaying by
/// `0.9` per step down to `0.3`, and `40` iterations.
///
/// # Examples
///
/// ```
/// use swarmopt::{InertiaSchedule, PSOConfig};
///
/// let config = PSOConfig::default()
///     .with_c1(0.5)
///     .with_c2(1.2)
///     .with_max_velocity(2.0)
///     .with_inertia(InertiaSchedule::constant(0.7))
///     .with_max_iterations(100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PSOConfig {
    /// The inertia weight schedule
    pub inertia: InertiaSchedule,
    /// The cognitive weight $`c_1`$ (pull towards the particle's personal best)
    pub c1: Float,
    /// The social weight $`c_2`$ (pull towards the global best)
    pub c2: Float,
    /// The maximum magnitude of each velocity component
    pub max_velocity: Float,
    /// The number of iterations a [`SwarmMinimizer`](crate::SwarmMinimizer) runs by default
    pub max_iterations: usize,
}

impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            inertia: InertiaSchedule::default(),
            c1: 0.4,
            c2: 1.5,
            max_velocity: 5.0,
            max_iterations: 40,
        }
    }
}

impl PSOConfig {
    /// Sets the inertia weight schedule (default = `1.4` decaying by `0.9` to `0.3`).
    pub const fn with_inertia(mut self, value: InertiaSchedule) -> Self {
        self.inertia = value;
        self
    }
    /// Sets the initial inertia weight $`\omega_0`$ (default = `1.4`).
    pub const fn with_initial_weight(mut self, value: Float) -> Self {
        self.inertia.initial_weight = value;
        self
    }
    /// Sets the inertia decay factor $`\beta`$ (default = `0.9`).
    pub const fn with_decay_factor(mut self, value: Float) -> Self {
        self.inertia.decay_factor = value;
        self
    }
    /// Sets the minimum inertia weight $`\omega_\text{min}`$ (default = `0.3`).
    pub const fn with_min_weight(mut self, value: Float) -> Self {
        self.inertia.min_weight = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency
    /// to move towards its personal best (default = `0.4`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency
    /// to move towards the global best (default = `1.5`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the maximum magnitude of each velocity component (default = `5.0`).
    pub const fn with_max_velocity(mut self, value: Float) -> Self {
        self.max_velocity = value;
        self
    }
    /// Sets the default number of iterations (default = `40`).
    pub const fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if any coefficient is negative or not
    /// finite, if `max_velocity` is not positive, or if the minimum inertia weight exceeds the
    /// initial one.
    pub fn validate(&self) -> Result<(), SwarmError> {
        let non_negative = [
            ("c1", self.c1),
            ("c2", self.c2),
            ("initial_weight", self.inertia.initial_weight),
            ("min_weight", self.inertia.min_weight),
            ("decay_factor", self.inertia.decay_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SwarmError::invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.max_velocity.is_nan() || self.max_velocity <= 0.0 {
            return Err(SwarmError::invalid(format!(
                "max_velocity must be positive, got {}",
                self.max_velocity
            )));
        }
        if self.inertia.min_weight > self.inertia.initial_weight {
            return Err(SwarmError::invalid(format!(
                "min_weight ({}) must not exceed initial_weight ({})",
                self.inertia.min_weight, self.inertia.initial_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = PSOConfig::default();
        assert_relative_eq!(config.c1, 0.4);
        assert_relative_eq!(config.c2, 1.5);
        assert_relative_eq!(config.max_velocity, 5.0);
        assert_relative_eq!(config.inertia.initial_weight, 1.4);
        assert_relative_eq!(config.inertia.min_weight, 0.3);
        assert_relative_eq!(config.inertia.decay_factor, 0.9);
        assert_eq!(config.max_iterations, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_schedule_decays_to_floor() {
        let schedule = InertiaSchedule::default();
        assert_relative_eq!(schedule.next(1.4), 1.26, epsilon = 1e-6);
        assert_relative_eq!(schedule.next(0.31), 0.3, epsilon = 1e-6);
        assert_eq!(schedule.next(0.3), 0.3);
    }

    #[test]
    fn test_constant_schedule() {
        let schedule = InertiaSchedule::constant(0.7);
        assert_eq!(schedule.next(0.7), 0.7);
    }

    #[test]
    fn test_validate_bad_coefficients() {
        assert!(PSOConfig::default().with_c1(-0.1).validate().is_err());
        assert!(PSOConfig::default().with_c2(Float::NAN).validate().is_err());
        assert!(PSOConfig::default()
            .with_decay_factor(Float::INFINITY)
            .validate()
            .is_err());
        assert!(PSOConfig::default()
            .with_initial_weight(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_max_velocity() {
        assert!(PSOConfig::default().with_max_velocity(0.0).validate().is_err());
        assert!(PSOConfig::default()
            .with_max_velocity(Float::NAN)
            .validate()
            .is_err());
        assert!(PSOConfig::default()
            .with_max_velocity(Float::INFINITY)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_min_above_initial() {
        let config = PSOConfig::default()
            .with_initial_weight(0.2)
            .with_min_weight(0.5);
        assert!(config.validate().is_err());
    }
}
