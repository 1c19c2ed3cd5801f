use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{Float, SwarmError};

/// A finite interval `[lower, upper]` on a single parameter.
///
/// [`Bound`]s describe the region in which a swarm is initialized. They are not enforced after
/// initialization, so particles are free to leave them.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    lower: Float,
    upper: Float,
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

impl TryFrom<(Float, Float)> for Bound {
    type Error = SwarmError;
    fn try_from(value: (Float, Float)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl Bound {
    /// Create a new [`Bound`].
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if either endpoint is not finite or if
    /// `lower >= upper`.
    pub fn new(lower: Float, upper: Float) -> Result<Self, SwarmError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(SwarmError::invalid(format!(
                "bounds must be finite, got ({lower}, {upper})"
            )));
        }
        if lower >= upper {
            return Err(SwarmError::invalid(format!(
                "lower bound must be less than upper bound, got ({lower}, {upper})"
            )));
        }
        Ok(Self { lower, upper })
    }
    /// Returns the lower bound.
    pub const fn lower(&self) -> Float {
        self.lower
    }
    /// Returns the upper bound.
    pub const fn upper(&self) -> Float {
        self.upper
    }
    /// Returns `upper - lower`.
    pub fn width(&self) -> Float {
        self.upper - self.lower
    }
    /// Checks whether the given `value` lies inside the bound.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Limits used for initial velocities, `(-width / 2, width / 2)`.
    pub fn velocity_limits(&self) -> (Float, Float) {
        let half = self.width() / 2.0;
        (-half, half)
    }
}

/// The initialization region of a swarm.
///
/// A single `(lower, upper)` pair is applied to every dimension, while a list supplies one pair
/// per dimension.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Bounds {
    /// The same `(lower, upper)` interval in every dimension
    Uniform(Float, Float),
    /// One `(lower, upper)` interval per dimension
    PerDimension(Vec<(Float, Float)>),
}

impl From<(Float, Float)> for Bounds {
    fn from(value: (Float, Float)) -> Self {
        Self::Uniform(value.0, value.1)
    }
}
impl From<Vec<(Float, Float)>> for Bounds {
    fn from(value: Vec<(Float, Float)>) -> Self {
        Self::PerDimension(value)
    }
}
impl<const N: usize> From<[(Float, Float); N]> for Bounds {
    fn from(value: [(Float, Float); N]) -> Self {
        Self::PerDimension(value.to_vec())
    }
}

impl Bounds {
    /// Expand the bounds into one validated [`Bound`] per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if any interval is invalid (see
    /// [`Bound::new`]) or if a per-dimension list does not have exactly `dimension` entries.
    pub fn resolve(&self, dimension: usize) -> Result<Vec<Bound>, SwarmError> {
        match self {
            Self::Uniform(lower, upper) => Ok(vec![Bound::new(*lower, *upper)?; dimension]),
            Self::PerDimension(limits) => {
                if limits.len() != dimension {
                    return Err(SwarmError::invalid(format!(
                        "expected {dimension} bounds, got {}",
                        limits.len()
                    )));
                }
                limits.iter().copied().map(Bound::try_from).collect()
            }
        }
    }
}
