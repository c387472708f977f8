use thiserror::Error;

/// Errors that can occur when validating a run configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("time bounds must be finite: t0 = {t0}, t1 = {t1}")]
    NonFiniteBounds { t0: f64, t1: f64 },

    #[error("t1 must be greater than t0: t0 = {t0}, t1 = {t1}")]
    EmptySpan { t0: f64, t1: f64 },

    #[error("step count must be at least 1")]
    ZeroSteps,

    #[error("step count {steps} leaves no room for the final grid point")]
    TooManySteps { steps: usize },

    #[error("step size must be positive and finite, got {step_size}")]
    InvalidStepSize { step_size: f64 },

    #[error("invalid update policy for a {dim}-component state: {reason}")]
    InvalidPolicy { dim: usize, reason: &'static str },
}

/// Errors that make a model's right-hand side or exact solution undefined.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ModelError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("exact solution is undefined: {reason}")]
    UndefinedSolution { reason: &'static str },

    #[error("exact solution has a singularity at t = {time}")]
    Singularity { time: f64 },
}

impl ModelError {
    /// Checks that a named parameter is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonFiniteParameter`] if `value` is NaN or infinite.
    pub fn check_finite(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFiniteParameter { name, value })
        }
    }
}
