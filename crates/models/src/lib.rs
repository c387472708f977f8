//! Right-hand-side models for fixed-step ODE integration.
//!
//! Each model implements [`fixstep_core::Model`] and can be paired with any
//! stepper:
//!
//! - [`Logistic`] — the scalar equation `x' = x - x²`, with a closed form
//! - [`Linear2D`] — a constant-coefficient linear system in `(x, y)`
//! - [`LotkaVolterra`] — the predator-prey system
//! - [`Sir`] — the susceptible-infected-recovered epidemic model
//!
//! The [`scenario`] module bundles each model with the initial condition and
//! time grid of its reference run.

mod linear;
mod logistic;
mod lotka_volterra;
mod sir;

pub mod scenario;

pub use linear::Linear2D;
pub use logistic::{Logistic, LogisticSolution};
pub use lotka_volterra::LotkaVolterra;
pub use scenario::Scenario;
pub use sir::Sir;
