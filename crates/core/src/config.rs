use crate::{ConfigError, UpdatePolicy};

/// Configuration for a fixed-step integration run.
///
/// A config describes the time grid `t_n = t0 + n * h` with
/// `h = (t1 - t0) / steps`, and the [`UpdatePolicy`] applied within each
/// step. Construction validates the grid, so an existing `Config` always
/// has `steps >= 1` and a positive, finite step size.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    t0: f64,
    t1: f64,
    steps: usize,
    step_size: f64,
    policy: UpdatePolicy,
}

impl Config {
    /// Creates a new config with a validated time grid.
    ///
    /// The update policy defaults to [`UpdatePolicy::Simultaneous`].
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite, if `t1 <= t0`,
    /// if `steps` is zero or too large to index `steps + 1` grid points, or
    /// if the resulting step size is not a positive finite number.
    pub fn new(t0: f64, t1: f64, steps: usize) -> Result<Self, ConfigError> {
        if !t0.is_finite() || !t1.is_finite() {
            return Err(ConfigError::NonFiniteBounds { t0, t1 });
        }
        if t1 <= t0 {
            return Err(ConfigError::EmptySpan { t0, t1 });
        }
        if steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if steps.checked_add(1).is_none() {
            return Err(ConfigError::TooManySteps { steps });
        }

        #[allow(clippy::cast_precision_loss)]
        let step_size = (t1 - t0) / steps as f64;
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::InvalidStepSize { step_size });
        }

        Ok(Self {
            t0,
            t1,
            steps,
            step_size,
            policy: UpdatePolicy::default(),
        })
    }

    /// Returns the config with a different update policy.
    ///
    /// The policy is checked against the state dimension when the run starts.
    #[must_use]
    pub fn with_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the initial time.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Returns the final time.
    #[must_use]
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// Returns the number of steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the update policy.
    #[must_use]
    pub fn policy(&self) -> &UpdatePolicy {
        &self.policy
    }

    /// Returns the time at grid index `n`.
    ///
    /// Times are computed from the index as `t0 + n * h`, never by repeated
    /// addition. The last index maps exactly to `t1`.
    #[must_use]
    pub fn time_at(&self, n: usize) -> f64 {
        if n == self.steps {
            self.t1
        } else {
            #[allow(clippy::cast_precision_loss)]
            let n = n as f64;
            self.t0 + n * self.step_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derives_step_size() {
        let config = Config::new(0.0, 5.0, 1000).unwrap();

        assert_eq!(config.steps(), 1000);
        assert_eq!(config.step_size(), 5.0 / 1000.0);
        assert_eq!(config.policy(), &UpdatePolicy::Simultaneous);
    }

    #[test]
    fn times_come_from_the_index() {
        let config = Config::new(1.0, 2.0, 10).unwrap();
        let h = config.step_size();

        assert_eq!(config.time_at(0), 1.0);
        assert_eq!(config.time_at(3), 1.0 + 3.0 * h);
        assert_eq!(config.time_at(10), 2.0);
        assert_relative_eq!(config.time_at(9), 1.9, epsilon = 1e-15);
    }

    #[test]
    fn rejects_zero_steps() {
        assert_eq!(Config::new(0.0, 1.0, 0), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn rejects_step_count_without_final_index() {
        assert_eq!(
            Config::new(0.0, 1.0, usize::MAX),
            Err(ConfigError::TooManySteps { steps: usize::MAX })
        );
        assert!(Config::new(0.0, 1.0, usize::MAX - 1).is_ok());
    }

    #[test]
    fn rejects_empty_or_reversed_span() {
        assert!(matches!(
            Config::new(1.0, 1.0, 10),
            Err(ConfigError::EmptySpan { .. })
        ));
        assert!(matches!(
            Config::new(2.0, 1.0, 10),
            Err(ConfigError::EmptySpan { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            Config::new(0.0, f64::INFINITY, 10),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
        assert!(matches!(
            Config::new(f64::NAN, 1.0, 10),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn rejects_overflowing_span() {
        assert!(matches!(
            Config::new(-f64::MAX, f64::MAX, 1),
            Err(ConfigError::InvalidStepSize { .. })
        ));
    }

    #[test]
    fn single_step_grid() {
        let config = Config::new(0.0, 0.5, 1).unwrap();

        assert_eq!(config.time_at(0), 0.0);
        assert_eq!(config.time_at(1), 0.5);
    }

    #[test]
    fn with_policy_replaces_policy() {
        let config = Config::new(0.0, 1.0, 4)
            .unwrap()
            .with_policy(UpdatePolicy::SequentialChained);

        assert_eq!(config.policy(), &UpdatePolicy::SequentialChained);
    }
}
