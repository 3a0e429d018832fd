//! The function being minimized.

use std::convert::Infallible;

/// A real-valued function over points of the search domain.
///
/// The searches minimize the returned value. For maximization, negate it.
///
/// Any `Fn(&[f64]) -> f64` closure or function is an objective that
/// cannot fail. Objectives that can fail either implement this trait
/// directly or wrap a `Result`-returning closure in [`Fallible`]; their
/// errors reach the caller unchanged as
/// [`SearchError::Objective`](crate::SearchError::Objective).
///
/// The searches assume repeated calls with the same point return the
/// same value.
///
/// # Examples
///
/// ```
/// use u_localsearch::Objective;
///
/// struct Rosenbrock;
///
/// impl Objective for Rosenbrock {
///     type Error = std::convert::Infallible;
///
///     fn evaluate(&self, x: &[f64]) -> Result<f64, Self::Error> {
///         Ok(x.windows(2)
///             .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
///             .sum())
///     }
/// }
///
/// assert_eq!(Rosenbrock.evaluate(&[1.0, 1.0]), Ok(0.0));
/// ```
pub trait Objective {
    /// Error produced when an evaluation fails.
    type Error;

    /// Evaluates the function at `point`. Lower is better.
    fn evaluate(&self, point: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + ?Sized,
{
    type Error = Infallible;

    fn evaluate(&self, point: &[f64]) -> Result<f64, Infallible> {
        Ok(self(point))
    }
}

/// Adapts a closure returning `Result<f64, E>` into an [`Objective`].
///
/// # Examples
///
/// ```
/// use u_localsearch::{Fallible, Objective};
///
/// let log_cost = Fallible(|x: &[f64]| {
///     if x[0] > 0.0 { Ok(x[0].ln()) } else { Err("log of non-positive value") }
/// });
///
/// assert_eq!(log_cost.evaluate(&[1.0]), Ok(0.0));
/// assert!(log_cost.evaluate(&[-1.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
{
    type Error = E;

    fn evaluate(&self, point: &[f64]) -> Result<f64, E> {
        (self.0)(point)
    }
}

/// Sum of squares, `f(x) = Σ xᵢ²`, minimum 0 at the origin.
///
/// Convex and separable; the demo driver and benchmarks minimize it.
pub fn sphere(point: &[f64]) -> f64 {
    point.iter().map(|x| x * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let offset = 3.0;
        let f = |x: &[f64]| x[0] + offset;
        assert_eq!(f.evaluate(&[1.0]), Ok(4.0));
    }

    #[test]
    fn test_fn_item_objective() {
        assert_eq!(sphere.evaluate(&[3.0, 4.0]), Ok(25.0));
    }

    #[test]
    fn test_fallible_passes_error_through() {
        let f = Fallible(|x: &[f64]| if x.is_empty() { Err(7u8) } else { Ok(1.0) });
        assert_eq!(f.evaluate(&[]), Err(7));
        assert_eq!(f.evaluate(&[0.0]), Ok(1.0));
    }

    #[test]
    fn test_trait_object_objective() {
        let f: &dyn Fn(&[f64]) -> f64 = &|x: &[f64]| x.len() as f64;
        assert_eq!(f.evaluate(&[0.0, 0.0]), Ok(2.0));
    }

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(&[0.0, 0.0]), 0.0);
        assert_eq!(sphere(&[1.0, -2.0, 2.0]), 9.0);
    }
}
