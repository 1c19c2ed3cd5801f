use crate::{DVector, Float};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// Describes a point in parameter space along with the objective value observed there.
///
/// Unevaluated points carry `fx = +inf`, so any finite evaluation compares as an improvement.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// the point's position
    pub x: DVector<Float>,
    /// the objective value at `x` (`+inf` if the point has not been evaluated)
    pub fx: Float,
}

impl Point {
    /// Create an evaluated [`Point`].
    pub const fn new(x: DVector<Float>, fx: Float) -> Self {
        Self { x, fx }
    }
    /// Create a [`Point`] at `x` which has not been evaluated yet.
    pub const fn unevaluated(x: DVector<Float>) -> Self {
        Self {
            x,
            fx: Float::INFINITY,
        }
    }
    /// Convert the [`Point`] into a position-value tuple.
    pub fn destructure(self) -> (DVector<Float>, Float) {
        (self.x, self.fx)
    }
    /// Compare two points by their `fx` value.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.fx.total_cmp(&other.fx)
    }
    /// Returns the dimension of the point's position.
    pub fn dimension(&self) -> usize {
        self.x.len()
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?}, f(x): {}", self.x.as_slice(), self.fx)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fx.partial_cmp(&other.fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_unevaluated_is_worse_than_anything_finite() {
        let p = Point::unevaluated(dvector![1.0, 2.0]);
        let q = Point::new(dvector![0.0, 0.0], 1e300);
        assert_eq!(p.fx, Float::INFINITY);
        assert_eq!(q.total_cmp(&p), Ordering::Less);
        assert!(q < p);
    }

    #[test]
    fn test_destructure() {
        let p = Point::new(dvector![1.0, 2.0], 5.0);
        assert_eq!(p.dimension(), 2);
        let (x, fx) = p.destructure();
        assert_eq!(x, dvector![1.0, 2.0]);
        assert_eq!(fx, 5.0);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Point::new(dvector![1.0, 2.0], 3.0));
        assert!(s.contains("x:"));
        assert!(s.contains("f(x): 3"));
    }
}
