//! Random Local Search execution loop.

use super::config::{RandomSearchConfig, RADIUS_DECAY};
use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};
use rand::Rng;

/// Executes Random Local Search.
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Runs Random Local Search with a generator built from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::random_search::{RandomSearchConfig, RandomSearchRunner};
    /// use u_localsearch::{sphere, Bounds};
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = RandomSearchConfig::default().with_seed(42);
    /// let result = RandomSearchRunner::run(&sphere, &bounds, &config).unwrap();
    ///
    /// assert!(result.best_value < 1.0);
    /// ```
    pub fn run<O>(
        objective: &O,
        bounds: &Bounds,
        config: &RandomSearchConfig,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
    {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs Random Local Search drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &RandomSearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        log::debug!(
            "random local search: dim={}, iterations={}, radius={}, epsilon={}",
            bounds.dim(),
            config.iterations,
            config.radius,
            config.epsilon
        );

        let mut best = bounds.sample(rng);
        let mut best_val = objective.evaluate(&best).map_err(SearchError::Objective)?;

        let mut radius = config.radius;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;

        while iterations < config.iterations && radius >= config.epsilon {
            let candidate = bounds.perturb(&best, radius, rng);
            let candidate_val = objective
                .evaluate(&candidate)
                .map_err(SearchError::Objective)?;
            iterations += 1;

            if candidate_val < best_val - config.epsilon {
                log::trace!("random local search: iter {iterations} accepted {candidate_val}");
                best = candidate;
                best_val = candidate_val;
                accepted_moves += 1;
            }

            radius *= RADIUS_DECAY;
        }

        let termination = if radius < config.epsilon {
            Termination::Converged
        } else {
            Termination::Exhausted
        };

        log::debug!(
            "random local search: {termination:?} after {iterations} iterations, best={best_val}"
        );

        Ok(SearchResult {
            best,
            best_value: best_val,
            iterations,
            evaluations: iterations + 1,
            accepted_moves,
            improving_moves: accepted_moves,
            final_schedule: radius,
            termination,
        })
    }
}
