//! Box-bounded search domains.
//!
//! A [`Bounds`] is a hyper-rectangle given as one closed `[low, high]`
//! interval per dimension. It provides the two primitives every search
//! shares: drawing a uniform random point ([`Bounds::sample`]) and
//! taking a clamped random step from a point ([`Bounds::perturb`]).

use rand::Rng;

use crate::error::BoundsError;

/// Projects `value` into the closed interval `[low, high]`.
///
/// Returns `low` when `value < low`, `high` when `value > high` and
/// `value` otherwise. Requires `low <= high`.
///
/// # Examples
///
/// ```
/// use u_localsearch::clamp;
///
/// assert_eq!(clamp(7.0, -5.0, 5.0), 5.0);
/// assert_eq!(clamp(-7.0, -5.0, 5.0), -5.0);
/// assert_eq!(clamp(1.5, -5.0, 5.0), 1.5);
/// ```
#[inline]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Per-dimension closed intervals defining the feasible region.
///
/// Construction validates every pair, so a `Bounds` value always has at
/// least one dimension and finite limits with `low <= high`.
///
/// # Examples
///
/// ```
/// use u_localsearch::Bounds;
///
/// let bounds = Bounds::new(vec![(-5.0, 5.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert_eq!(bounds.max_span(), 10.0);
///
/// assert!(Bounds::new(vec![(1.0, -1.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Bounds {
    limits: Vec<(f64, f64)>,
}

impl Bounds {
    /// Creates bounds from `(low, high)` pairs, one per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError`] if `limits` is empty, if any limit is not
    /// finite, or if any pair has `low > high`.
    pub fn new(limits: Vec<(f64, f64)>) -> Result<Self, BoundsError> {
        if limits.is_empty() {
            return Err(BoundsError::Empty);
        }
        for (dimension, &(low, high)) in limits.iter().enumerate() {
            if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
                return Err(BoundsError::NonFinite { dimension });
            }
            if low > high {
                return Err(BoundsError::Inverted {
                    dimension,
                    low,
                    high,
                });
            }
        }
        Ok(Self { limits })
    }

    /// Creates `dim` identical `[low, high]` intervals.
    pub fn uniform(dim: usize, low: f64, high: f64) -> Result<Self, BoundsError> {
        Self::new(vec![(low, high); dim])
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.limits.len()
    }

    /// Iterates over the `(low, high)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.limits.iter().copied()
    }

    /// Width of the widest interval.
    pub fn max_span(&self) -> f64 {
        self.iter()
            .map(|(low, high)| high - low)
            .fold(0.0, f64::max)
    }

    /// Returns `true` if `point` has the right dimension and every
    /// coordinate lies within its interval.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.dim()
            && point
                .iter()
                .zip(self.iter())
                .all(|(&x, (low, high))| low <= x && x <= high)
    }

    /// Draws a point uniformly at random from the box.
    ///
    /// Each coordinate is drawn independently from its closed interval,
    /// in dimension order.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.iter()
            .map(|(low, high)| rng.random_range(low..=high))
            .collect()
    }

    /// Moves every coordinate of `point` by an independent uniform offset
    /// in `[-scale, scale]`, clamping the result back into the box.
    ///
    /// `scale` must be finite and non-negative. The offset is drawn on the
    /// unit interval and scaled, so `2 * scale` may exceed `f64::MAX`.
    pub fn perturb<R: Rng>(&self, point: &[f64], scale: f64, rng: &mut R) -> Vec<f64> {
        debug_assert_eq!(point.len(), self.dim());
        point
            .iter()
            .zip(self.iter())
            .map(|(&x, (low, high))| {
                let offset = scale * rng.random_range(-1.0_f64..=1.0);
                clamp(x + offset, low, high)
            })
            .collect()
    }
}

impl TryFrom<Vec<(f64, f64)>> for Bounds {
    type Error = BoundsError;

    fn try_from(limits: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(limits)
    }
}

impl From<Bounds> for Vec<(f64, f64)> {
    fn from(bounds: Bounds) -> Self {
        bounds.limits
    }
}
