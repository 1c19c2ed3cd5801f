use crate::{traits::CostFunction, DVector, Float};

/// Himmelblau's function, a two-dimensional function with four identical local minima.
///
/// ```math
/// f(x, y) = (x^2 + y - 11)^2 + (x + y^2 - 7)^2
/// ```
/// Every minimum has $`f = 0`$; see [`Himmelblau::MINIMA`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Himmelblau;

impl Himmelblau {
    /// The locations of the four minima.
    pub const MINIMA: [(Float, Float); 4] = [
        (3.0, 2.0),
        (-2.805_118, 3.131_312),
        (-3.779_310, -3.283_186),
        (3.584_428, -1.848_126),
    ];
}

impl CostFunction for Himmelblau {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        (x[0].powi(2) + x[1] - 11.0).powi(2) + (x[0] + x[1].powi(2) - 7.0).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::dvector;

    #[test]
    fn test_known_values() {
        assert_eq!(Himmelblau.evaluate(&dvector![0.0, 0.0]), 170.0);
        assert_eq!(Himmelblau.evaluate(&dvector![3.0, 2.0]), 0.0);
        for (x, y) in Himmelblau::MINIMA {
            assert_abs_diff_eq!(Himmelblau.evaluate(&dvector![x, y]), 0.0, epsilon = 1e-6);
        }
    }
}
