//! Random Local Search configuration.

use crate::error::ParameterError;

/// Factor applied to the radius after every iteration.
pub const RADIUS_DECAY: f64 = 0.995;

/// Configuration for Random Local Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::random_search::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default().with_radius(1.0).with_seed(42);
/// assert_eq!(config.iterations, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Maximum number of candidates to evaluate.
    pub iterations: usize,

    /// Minimum improvement for a move to be accepted. Also the radius
    /// floor below which the search stops.
    pub epsilon: f64,

    /// Initial perturbation half-width.
    pub radius: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            radius: 0.5,
            seed: None,
        }
    }
}

impl RandomSearchConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
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
        ParameterError::check_positive("radius", self.radius)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RandomSearchConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.epsilon - 1e-6).abs() < 1e-15);
        assert!((config.radius - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_validate_bad_radius() {
        let err = RandomSearchConfig::default()
            .with_radius(0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.name, "radius");
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(RandomSearchConfig::default()
            .with_iterations(0)
            .validate()
            .is_err());
    }
}
