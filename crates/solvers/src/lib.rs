//! Fixed-step explicit solvers for initial-value problems.
//!
//! # Modules
//!
//! - [`stepper`] — one-step update rules: [`Euler`], [`Heun`], [`Rk4`],
//!   and the [`Method`] selector
//! - [`fixed_step`] — the driver loop that applies a stepper over a
//!   [`Config`](fixstep_core::Config) grid and returns a [`Trajectory`]
//! - [`accuracy`] — pointwise and maximum error against an exact solution
//!
//! Steppers and models compose freely: any [`Stepper`] integrates any
//! [`Model`](fixstep_core::Model).

pub mod accuracy;
pub mod fixed_step;
pub mod stepper;

#[cfg(test)]
mod test_utils;

pub use accuracy::ErrorReport;
pub use fixed_step::{Point, Trajectory};
pub use stepper::{Euler, Heun, Method, Rk4, Stepper};
