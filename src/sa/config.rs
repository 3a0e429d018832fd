//! SA configuration.

use crate::error::ParameterError;

/// Fraction of the widest bound span used as the fixed perturbation
/// half-width.
pub const STEP_FRACTION: f64 = 0.1;

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, once per
/// iteration.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.99)
///     .with_iterations(5000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of candidates to evaluate.
    pub iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Temperature floor. The algorithm stops when T drops below this.
    pub epsilon: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            epsilon: 1e-6,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
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
        ParameterError::check_positive("initial_temperature", self.initial_temperature)?;
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ParameterError::new(
                "cooling_rate",
                self.cooling_rate,
                "must be in (0, 1)",
            ));
        }
        ParameterError::check_non_negative("epsilon", self.epsilon)?;
        Ok(())
    }
}
