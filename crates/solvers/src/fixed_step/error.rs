use fixstep_core::{ConfigError, ModelError};

/// Errors that can occur before a fixed-step integration starts.
///
/// Every variant describes an invalid configuration. Once the loop is
/// running no error is possible: non-finite values produced by the scheme
/// are recorded in the trajectory rather than rejected.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("initial state component {index} is not finite: {value}")]
    NonFiniteInitialState { index: usize, value: f64 },
}
