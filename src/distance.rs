//! Real-valued step and path costs.
//!
//! Both the grid and the network measure cost with [`Distance`], which is also
//! what the spatial heuristics estimate, so `g + h` is always well typed.

use derive_more::Display;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::cost::Cost;

#[derive(Debug, Error, PartialEq)]
pub enum DistanceError {
    #[error("Negative cost {0} found.")]
    Negative(f64),
    #[error("Non-finite cost {0} found.")]
    NotFinite(f64),
}

/// A non-negative, finite cost.
///
/// ```
/// use frontier_search::distance::Distance;
///
/// let d = Distance::new(1.5).unwrap() + Distance::from(2);
/// assert_eq!(d.get(), 3.5);
/// assert!(Distance::new(-1.0).is_err());
/// ```
#[derive(Copy, Clone, Default, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[display("{_0}")]
pub struct Distance(OrderedFloat<f64>);

impl Cost for Distance {}

impl Distance {
    pub const ZERO: Distance = Distance(OrderedFloat(0.0));
    pub const ONE: Distance = Distance(OrderedFloat(1.0));

    pub fn new(d: f64) -> Result<Self, DistanceError> {
        if !d.is_finite() {
            return Err(DistanceError::NotFinite(d));
        }
        if d < 0.0 {
            return Err(DistanceError::Negative(d));
        }
        Ok(Self(OrderedFloat(d)))
    }

    /// The largest finite distance.
    pub const MAX: Distance = Distance(OrderedFloat(f64::MAX));

    /// Builds a `Distance` out of the non-negative output of a metric.
    ///
    /// Metrics of far apart points can overflow to infinity, those clamp to
    /// [`Distance::MAX`].
    #[inline(always)]
    pub(crate) fn from_metric(d: f64) -> Self {
        debug_assert!(d >= 0.0, "Metric produced {d}");
        Self(OrderedFloat(d.min(f64::MAX)))
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.into_inner()
    }
}

impl TryFrom<f64> for Distance {
    type Error = DistanceError;

    fn try_from(d: f64) -> Result<Self, Self::Error> {
        Self::new(d)
    }
}

impl From<u32> for Distance {
    fn from(units: u32) -> Self {
        Self(OrderedFloat(f64::from(units)))
    }
}

impl std::ops::Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0 + rhs.0;
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl SaturatingAdd for Distance {
    /// Floats saturate at infinity on their own.
    fn saturating_add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Zero for Distance {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }
}

impl UpperBounded for Distance {
    fn max_value() -> Self {
        Self(OrderedFloat(f64::INFINITY))
    }
}
