//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that steppers, integrators,
//! and models build on:
//!
//! - [`State`] and [`Derivative`] — fixed-size state vectors and their rates
//! - [`StepIntegrable`] — advancing a state by `derivative * delta`
//! - [`Model`] — a right-hand side mapping state and time to derivatives
//! - [`ClosedForm`] and [`ExactSolution`] — known analytic solutions
//! - [`Config`] and [`UpdatePolicy`] — the validated per-run configuration
//! - [`Observer`] — receives solver events and optionally returns actions

mod config;
mod error;
mod model;
mod observer;
mod policy;
mod state;

pub use config::Config;
pub use error::{ConfigError, ModelError};
pub use model::{ClosedForm, ExactSolution, Model};
pub use observer::Observer;
pub use policy::UpdatePolicy;
pub use state::{Derivative, DerivativeOf, State, StepIntegrable};
