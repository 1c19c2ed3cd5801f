use crate::{traits::CostFunction, DVector, Float};

/// The Rosenbrock function, a non-convex function with a single minimum.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^{n-1} \left[100(x_{i+1} - x_i^2)^2 + (1 - x_i)^2 \right]
/// ```
/// where $`n`$ is the length of $`\vec{x}`$. This function has a minimum at
/// $`f(\vec{1}) = 0`$ for $`n \geq 2`$ and is identically zero for $`n = 1`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rosenbrock;

impl CostFunction for Rosenbrock {
    #[allow(clippy::suboptimal_flops)]
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        x.as_slice()
            .windows(2)
            .map(|w| 100.0 * (w[1] - w[0].powi(2)).powi(2) + (1.0 - w[0]).powi(2))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    #[test]
    fn test_rosenbrock() {
        assert_eq!(Rosenbrock.evaluate(&dvector![1.0, 1.0]), 0.0);
        assert_eq!(Rosenbrock.evaluate(&dvector![0.0, 0.0]), 1.0);
        assert_eq!(Rosenbrock.evaluate(&dvector![-1.0, 1.0]), 4.0);
        assert_eq!(Rosenbrock.evaluate(&dvector![1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_rosenbrock_short_inputs() {
        assert_eq!(Rosenbrock.evaluate(&dvector![3.0]), 0.0);
        assert_eq!(Rosenbrock.evaluate(&DVector::zeros(0)), 0.0);
    }
}
