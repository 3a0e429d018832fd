//! Random Local Search (RLS).
//!
//! Greedy like Hill Climbing, but the perturbation radius follows a
//! fixed schedule: it shrinks by the same factor every iteration,
//! whether or not the candidate was accepted. The search therefore
//! explores broadly early on and refines late, independent of how
//! often it has succeeded.
//!
//! # References
//!
//! - Rastrigin, L. A. (1963), "The convergence of the random search
//!   method in the extremal control of a many parameter system"
//! - Schumer & Steiglitz (1968), "Adaptive step size random search"

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearchRunner;
