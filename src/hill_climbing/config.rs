//! Hill Climbing configuration.

use crate::error::ParameterError;

/// Factor applied to the step size after each rejected candidate.
pub const STEP_DECAY: f64 = 0.99;

/// Configuration for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_iterations(5000)
///     .with_step_size(0.25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of candidates to evaluate.
    pub iterations: usize,

    /// Minimum improvement for a move to be accepted. Also the step-size
    /// floor below which the search stops.
    pub epsilon: f64,

    /// Initial perturbation half-width.
    pub step_size: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.iterations == 0 {
            return Err(ParameterError::new("iterations", 0.0, "must be at least 1"));
        }
        ParameterError::check_non_negative("epsilon", self.epsilon)?;
        ParameterError::check_positive("step_size", self.step_size)?;
        Ok(())
    }
}
