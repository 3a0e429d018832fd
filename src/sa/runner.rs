//! SA execution loop.

use super::config::{SaConfig, STEP_FRACTION};
use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};
use rand::Rng;

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization with a generator built from `config.seed`.
    ///
    /// Returns the best point ever visited, which need not be where the
    /// walk ended.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::sa::{SaConfig, SaRunner};
    /// use u_localsearch::{sphere, Bounds};
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let result = SaRunner::run(&sphere, &bounds, &SaConfig::default().with_seed(42)).unwrap();
    ///
    /// assert!(result.best_value < 1.0);
    /// assert!(result.converged());
    /// ```
    pub fn run<O>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
    {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs SA drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        // One step size for all dimensions, fixed for the whole run.
        let base_step = STEP_FRACTION * bounds.max_span();

        log::debug!(
            "simulated annealing: dim={}, iterations={}, T0={}, cooling_rate={}, step={}",
            bounds.dim(),
            config.iterations,
            config.initial_temperature,
            config.cooling_rate,
            base_step
        );

        // Initialize
        let mut current = bounds.sample(rng);
        let mut current_cost = objective
            .evaluate(&current)
            .map_err(SearchError::Objective)?;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while iterations < config.iterations && temperature >= config.epsilon {
            let candidate = bounds.perturb(&current, base_step, rng);
            let candidate_cost = objective
                .evaluate(&candidate)
                .map_err(SearchError::Objective)?;
            iterations += 1;
            let delta = candidate_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else if temperature > 0.0 {
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            } else {
                false
            };

            if accept {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    log::trace!("simulated annealing: iter {iterations} new best {current_cost}");
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            // Cool down
            temperature *= config.cooling_rate;
        }

        let termination = if temperature < config.epsilon {
            Termination::Converged
        } else {
            Termination::Exhausted
        };

        log::debug!(
            "simulated annealing: {termination:?} after {iterations} iterations, T={temperature}, best={best_cost}"
        );

        Ok(SearchResult {
            best,
            best_value: best_cost,
            iterations,
            evaluations: iterations + 1,
            accepted_moves,
            improving_moves,
            final_schedule: temperature,
            termination,
        })
    }
}
