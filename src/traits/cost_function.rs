use crate::{DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$
///
/// Implementations should be pure: the swarm evaluates every particle once per step and relies
/// on repeated evaluations at the same point returning the same value.
///
/// The trait is implemented for any `Fn(&DVector<Float>) -> Float`, so closures can be passed
/// directly to a [`SwarmOptimizer`](crate::SwarmOptimizer).
pub trait CostFunction {
    /// The evaluation of the function at a point `x`.
    fn evaluate(&self, x: &DVector<Float>) -> Float;
}

impl<F> CostFunction for F
where
    F: Fn(&DVector<Float>) -> Float,
{
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    struct TestFunction;
    impl CostFunction for TestFunction {
        fn evaluate(&self, x: &DVector<Float>) -> Float {
            x[0].powi(2) + x[1].powi(2) + 1.0
        }
    }

    #[test]
    fn test_cost_function() {
        assert_eq!(TestFunction.evaluate(&dvector![1.0, 2.0]), 6.0);
    }

    #[test]
    fn test_closure_cost_function() {
        let offset = 3.0;
        let f = move |x: &DVector<Float>| x.sum() + offset;
        assert_eq!(f.evaluate(&dvector![1.0, 2.0]), 6.0);
        let boxed: Box<dyn CostFunction> = Box::new(f);
        assert_eq!(boxed.evaluate(&dvector![0.0, 0.0]), 3.0);
    }
}
