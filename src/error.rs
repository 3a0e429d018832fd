//! Error types for search runs.

use std::convert::Infallible;

use thiserror::Error;

/// A malformed search domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// No dimensions were given.
    #[error("bounds must have at least one dimension")]
    Empty,

    /// A dimension whose lower limit exceeds its upper limit.
    #[error("dimension {dimension}: low ({low}) is greater than high ({high})")]
    Inverted {
        dimension: usize,
        low: f64,
        high: f64,
    },

    /// A dimension with a NaN or infinite limit, or a span too wide to
    /// represent.
    #[error("dimension {dimension}: limits must be finite")]
    NonFinite { dimension: usize },
}

/// A tuning parameter outside its admissible range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid parameter `{name}` = {value}: {reason}")]
pub struct ParameterError {
    /// Name of the offending config field.
    pub name: &'static str,

    /// The rejected value, converted to `f64` for reporting.
    pub value: f64,

    /// What the value must satisfy.
    pub reason: &'static str,
}

impl ParameterError {
    pub(crate) fn new(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self {
            name,
            value,
            reason,
        }
    }

    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::new(name, value, "must be finite and positive"))
        }
    }

    /// Checks that `value` is finite and not negative.
    pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::new(name, value, "must be finite and non-negative"))
        }
    }
}

/// Errors returned by a search run.
///
/// `E` is the objective's own error type. Plain closures cannot fail and
/// use the default [`Infallible`].
#[derive(Debug, Error)]
pub enum SearchError<E = Infallible> {
    /// The bounds failed validation.
    #[error("invalid bounds")]
    InvalidBounds(#[from] BoundsError),

    /// A config value failed validation.
    #[error("invalid configuration")]
    InvalidParameter(#[from] ParameterError),

    /// The objective function returned an error. It is passed through as-is.
    #[error("objective evaluation failed")]
    Objective(#[source] E),
}
