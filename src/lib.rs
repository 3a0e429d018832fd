//! Single-point stochastic local search over box-bounded continuous domains.
//!
//! Provides reference implementations of three classic minimizers that
//! all walk a single point through a hyper-rectangle:
//!
//! - **Hill Climbing (HC)**: greedy perturbation with a step size that
//!   shrinks after every rejected candidate.
//! - **Random Local Search (RLS)**: greedy perturbation with a radius
//!   that shrinks every iteration, regardless of acceptance.
//! - **Simulated Annealing (SA)**: Metropolis acceptance of uphill moves
//!   under a geometric cooling schedule, with best-seen tracking.
//!
//! Every run owns its random-number generator. Supplying a seed makes a
//! run bit-for-bit reproducible, and independent runs can execute on
//! separate threads without coordination.
//!
//! # Example
//!
//! ```
//! use u_localsearch::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
//! use u_localsearch::{sphere, Bounds};
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)])?;
//! let config = HillClimbingConfig::default().with_seed(42);
//! let result = HillClimbingRunner::run(&sphere, &bounds, &config)?;
//!
//! assert!(bounds.contains(&result.best));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configs, bounds and results.
//! - `parallel`: [`Algorithm::run_seeds`] spreads runs over a rayon pool.
//! - `cli`: builds the `local-search` demo binary.

pub mod algorithm;
pub mod bounds;
pub mod error;
pub mod hill_climbing;
pub mod objective;
mod random;
pub mod random_search;
pub mod result;
pub mod sa;

pub use algorithm::Algorithm;
pub use bounds::{clamp, Bounds};
pub use error::{BoundsError, ParameterError, SearchError};
pub use objective::{sphere, Fallible, Objective};
pub use result::{SearchResult, Termination};
