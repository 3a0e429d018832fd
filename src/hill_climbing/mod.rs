//! Hill Climbing (HC).
//!
//! A greedy single-point search. Each iteration perturbs every
//! coordinate of the current point by a uniform offset in
//! `[-step, step]` and moves only if the candidate beats the current
//! value by more than `epsilon`. Every rejected candidate shrinks the
//! step geometrically, so the walk settles into a local minimum and
//! stops once the step drops below `epsilon`.
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., §4.1.1 "Hill-climbing search"

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::HillClimbingRunner;
