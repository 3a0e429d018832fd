//! Simulated Annealing (SA).
//!
//! A single-point trajectory search inspired by the physical annealing
//! process. Uphill moves are accepted with a probability that shrinks as
//! the temperature falls, letting the walk escape local minima early on.
//! The best point ever visited is tracked separately from the walk.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::SaRunner;
