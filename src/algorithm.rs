//! Uniform entry point over the three searches.

use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
use crate::objective::Objective;
use crate::random_search::{RandomSearchConfig, RandomSearchRunner};
use crate::result::SearchResult;
use crate::sa::{SaConfig, SaRunner};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A search algorithm together with its configuration.
///
/// # Examples
///
/// ```
/// use u_localsearch::{sphere, Algorithm, Bounds};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// for algorithm in Algorithm::all() {
///     let result = algorithm.with_seed(42).run(&sphere, &bounds).unwrap();
///     println!("{}: {:.3e}", algorithm.name(), result.best_value);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    HillClimbing(HillClimbingConfig),
    RandomSearch(RandomSearchConfig),
    SimulatedAnnealing(SaConfig),
}

impl Algorithm {
    /// The three algorithms with default configurations.
    pub fn all() -> [Algorithm; 3] {
        [
            Algorithm::HillClimbing(HillClimbingConfig::default()),
            Algorithm::RandomSearch(RandomSearchConfig::default()),
            Algorithm::SimulatedAnnealing(SaConfig::default()),
        ]
    }

    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::HillClimbing(_) => "Hill Climbing",
            Algorithm::RandomSearch(_) => "Random Local Search",
            Algorithm::SimulatedAnnealing(_) => "Simulated Annealing",
        }
    }

    /// The configured seed, if any.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Algorithm::HillClimbing(c) => c.seed,
            Algorithm::RandomSearch(c) => c.seed,
            Algorithm::SimulatedAnnealing(c) => c.seed,
        }
    }

    /// Returns a copy with the seed replaced.
    pub fn with_seed(&self, seed: u64) -> Self {
        match self {
            Algorithm::HillClimbing(c) => Algorithm::HillClimbing(c.clone().with_seed(seed)),
            Algorithm::RandomSearch(c) => Algorithm::RandomSearch(c.clone().with_seed(seed)),
            Algorithm::SimulatedAnnealing(c) => {
                Algorithm::SimulatedAnnealing(c.clone().with_seed(seed))
            }
        }
    }

    /// Returns a copy with the iteration budget replaced.
    pub fn with_iterations(&self, n: usize) -> Self {
        match self {
            Algorithm::HillClimbing(c) => Algorithm::HillClimbing(c.clone().with_iterations(n)),
            Algorithm::RandomSearch(c) => Algorithm::RandomSearch(c.clone().with_iterations(n)),
            Algorithm::SimulatedAnnealing(c) => {
                Algorithm::SimulatedAnnealing(c.clone().with_iterations(n))
            }
        }
    }

    /// Runs the algorithm once.
    pub fn run<O>(
        &self,
        objective: &O,
        bounds: &Bounds,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
    {
        match self {
            Algorithm::HillClimbing(c) => HillClimbingRunner::run(objective, bounds, c),
            Algorithm::RandomSearch(c) => RandomSearchRunner::run(objective, bounds, c),
            Algorithm::SimulatedAnnealing(c) => SaRunner::run(objective, bounds, c),
        }
    }

    /// Runs one independent search per seed.
    ///
    /// Results come back in the order of `seeds`. Each search owns its own
    /// generator, so the output is the same whether or not the `parallel`
    /// feature spreads the runs across threads.
    #[cfg(not(feature = "parallel"))]
    pub fn run_seeds<O>(
        &self,
        objective: &O,
        bounds: &Bounds,
        seeds: &[u64],
    ) -> Vec<Result<SearchResult, SearchError<O::Error>>>
    where
        O: Objective + ?Sized,
    {
        seeds
            .iter()
            .map(|&seed| self.with_seed(seed).run(objective, bounds))
            .collect()
    }

    /// Runs one independent search per seed, in parallel.
    ///
    /// Results come back in the order of `seeds` and match the sequential
    /// output exactly.
    #[cfg(feature = "parallel")]
    pub fn run_seeds<O>(
        &self,
        objective: &O,
        bounds: &Bounds,
        seeds: &[u64],
    ) -> Vec<Result<SearchResult, SearchError<O::Error>>>
    where
        O: Objective + Sync + ?Sized,
        O::Error: Send,
    {
        seeds
            .par_iter()
            .map(|&seed| self.with_seed(seed).run(objective, bounds))
            .collect()
    }
}
