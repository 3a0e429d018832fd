//! Hill Climbing execution loop.

use super::config::{HillClimbingConfig, STEP_DECAY};
use crate::bounds::Bounds;
use crate::error::SearchError;
use crate::objective::Objective;
use crate::random::create_rng;
use crate::result::{SearchResult, Termination};
use rand::Rng;

/// Executes Hill Climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs Hill Climbing with a generator built from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails before any evaluation if the config is invalid, and with
    /// [`SearchError::Objective`] on the first objective error.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
    /// use u_localsearch::{sphere, Bounds};
    ///
    /// let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
    /// let config = HillClimbingConfig::default().with_seed(7);
    /// let result = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
    ///
    /// assert!(bounds.contains(&result.best));
    /// assert!(result.best_value <= 2.0);
    /// ```
    pub fn run<O>(
        objective: &O,
        bounds: &Bounds,
        config: &HillClimbingConfig,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
    {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs Hill Climbing drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<O, R>(
        objective: &O,
        bounds: &Bounds,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError<O::Error>>
    where
        O: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        log::debug!(
            "hill climbing: dim={}, iterations={}, step_size={}, epsilon={}",
            bounds.dim(),
            config.iterations,
            config.step_size,
            config.epsilon
        );

        let mut current = bounds.sample(rng);
        let mut current_val = objective
            .evaluate(&current)
            .map_err(SearchError::Objective)?;

        let mut step = config.step_size;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;

        // The walk only ever moves downhill, so `current` is also the best
        // point seen.
        while iterations < config.iterations && step >= config.epsilon {
            let candidate = bounds.perturb(&current, step, rng);
            let candidate_val = objective
                .evaluate(&candidate)
                .map_err(SearchError::Objective)?;
            iterations += 1;

            if candidate_val < current_val - config.epsilon {
                log::trace!("hill climbing: iter {iterations} accepted {candidate_val}");
                current = candidate;
                current_val = candidate_val;
                accepted_moves += 1;
            } else {
                step *= STEP_DECAY;
            }
        }

        let termination = if step < config.epsilon {
            Termination::Converged
        } else {
            Termination::Exhausted
        };

        log::debug!(
            "hill climbing: {termination:?} after {iterations} iterations, best={current_val}"
        );

        Ok(SearchResult {
            best: current,
            best_value: current_val,
            iterations,
            evaluations: iterations + 1,
            accepted_moves,
            improving_moves: accepted_moves,
            final_schedule: step,
            termination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParameterError;
    use crate::objective::{sphere, Fallible};
    use std::cell::RefCell;

    fn square_box() -> Bounds {
        Bounds::uniform(2, -5.0, 5.0).unwrap()
    }

    #[test]
    fn test_hc_sphere_converges_for_most_seeds() {
        let bounds = square_box();
        let solved = (0..20)
            .filter(|&seed| {
                let config = HillClimbingConfig::default().with_seed(seed);
                let result = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
                result.best_value < 1.0
            })
            .count();

        assert!(solved >= 12, "only {solved}/20 seeds reached f < 1.0");
    }

    #[test]
    fn test_hc_deterministic_with_seed() {
        let bounds = square_box();
        let config = HillClimbingConfig::default().with_seed(42);

        let a = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
        let b = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.best_value.to_bits(), b.best_value.to_bits());
    }

    #[test]
    fn test_hc_candidates_within_bounds() {
        // Narrow, offset box with a large step so clamping is exercised.
        let bounds = Bounds::new(vec![(1.0, 1.5), (-3.0, -2.0), (0.0, 0.0)]).unwrap();
        let seen = RefCell::new(Vec::new());
        let objective = |x: &[f64]| {
            seen.borrow_mut().push(x.to_vec());
            sphere(x)
        };
        let config = HillClimbingConfig::default()
            .with_step_size(2.0)
            .with_seed(3);

        let result = HillClimbingRunner::run(&objective, &bounds, &config).unwrap();

        assert_eq!(result.best.len(), 3);
        assert!(bounds.contains(&result.best));
        let seen = seen.into_inner();
        assert_eq!(seen.len(), result.evaluations);
        assert!(seen.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_hc_acceptance_trace_is_monotonic() {
        let bounds = square_box();
        let values = RefCell::new(Vec::new());
        let objective = |x: &[f64]| {
            let v = sphere(x);
            values.borrow_mut().push(v);
            v
        };
        let config = HillClimbingConfig::default().with_seed(11);

        let result = HillClimbingRunner::run(&objective, &bounds, &config).unwrap();

        // Replay the acceptance rule over the evaluated values.
        let values = values.into_inner();
        let mut current = values[0];
        let mut trace = vec![current];
        for &v in &values[1..] {
            if v < current - config.epsilon {
                current = v;
                trace.push(v);
            }
        }

        assert!(trace.windows(2).all(|w| w[1] < w[0]));
        assert_eq!(trace.len() - 1, result.accepted_moves);
        assert_eq!(current, result.best_value);
        assert_eq!(sphere(&result.best), result.best_value);
    }

    #[test]
    fn test_hc_step_below_epsilon_returns_initial_point() {
        let bounds = square_box();
        let config = HillClimbingConfig::default()
            .with_step_size(1e-7)
            .with_seed(5);

        let result = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
        let initial = bounds.sample(&mut create_rng(Some(5)));

        assert_eq!(result.iterations, 0);
        assert_eq!(result.evaluations, 1);
        assert_eq!(result.termination, Termination::Converged);
        assert_eq!(result.best, initial);
        assert_eq!(result.best_value, sphere(&initial));
    }

    #[test]
    fn test_hc_exhausts_budget() {
        let bounds = square_box();
        let config = HillClimbingConfig::default()
            .with_iterations(10)
            .with_seed(1);

        let result = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();

        assert_eq!(result.iterations, 10);
        assert_eq!(result.termination, Termination::Exhausted);
        assert!(!result.converged());
    }

    #[test]
    fn test_hc_converges_on_flat_objective() {
        // Nothing ever improves, so every iteration shrinks the step.
        let bounds = square_box();
        let config = HillClimbingConfig::default()
            .with_iterations(100_000)
            .with_seed(2);

        let result = HillClimbingRunner::run(&|_: &[f64]| 1.0, &bounds, &config).unwrap();

        assert_eq!(result.termination, Termination::Converged);
        assert_eq!(result.accepted_moves, 0);
        assert!(result.final_schedule < config.epsilon);
        // 0.1 * 0.99^n < 1e-6 first holds at n = 1146.
        assert_eq!(result.iterations, 1146);
    }

    #[test]
    fn test_hc_step_kept_while_improving() {
        let next = std::cell::Cell::new(0.0);
        let objective = |_: &[f64]| {
            next.set(next.get() - 1.0);
            next.get()
        };
        let config = HillClimbingConfig::default()
            .with_iterations(50)
            .with_seed(4);

        let result = HillClimbingRunner::run(&objective, &square_box(), &config).unwrap();

        assert_eq!(result.accepted_moves, 50);
        assert_eq!(result.final_schedule, config.step_size);
    }

    #[test]
    fn test_hc_huge_step_size_runs_without_overflow() {
        let bounds = square_box();
        let seen = RefCell::new(Vec::new());
        let objective = |x: &[f64]| {
            seen.borrow_mut().push(x.to_vec());
            sphere(x)
        };
        let config = HillClimbingConfig::default()
            .with_step_size(1e308)
            .with_seed(1);
        assert!(config.validate().is_ok());

        let result = HillClimbingRunner::run(&objective, &bounds, &config).unwrap();

        assert!(bounds.contains(&result.best));
        assert!(seen.into_inner().iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_hc_invalid_config() {
        let bounds = square_box();
        let config = HillClimbingConfig::default().with_step_size(-1.0);

        let err = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap_err();

        assert!(matches!(
            err,
            SearchError::InvalidParameter(ParameterError {
                name: "step_size",
                ..
            })
        ));
    }

    #[test]
    fn test_hc_propagates_objective_error() {
        let bounds = square_box();
        let calls = RefCell::new(0);
        let objective = Fallible(|x: &[f64]| {
            *calls.borrow_mut() += 1;
            if *calls.borrow() > 3 {
                Err("solver diverged")
            } else {
                Ok(sphere(x))
            }
        });
        let config = HillClimbingConfig::default().with_seed(8);

        let err = HillClimbingRunner::run(&objective, &bounds, &config).unwrap_err();

        assert!(matches!(err, SearchError::Objective("solver diverged")));
        assert_eq!(*calls.borrow(), 4);
    }

    #[test]
    fn test_hc_run_with_rng_matches_seeded_run() {
        let bounds = square_box();
        let config = HillClimbingConfig::default().with_seed(21);

        let seeded = HillClimbingRunner::run(&sphere, &bounds, &config).unwrap();
        let mut rng = create_rng(Some(21));
        let owned = HillClimbingRunner::run_with_rng(&sphere, &bounds, &config, &mut rng).unwrap();

        assert_eq!(seeded, owned);
    }
}
