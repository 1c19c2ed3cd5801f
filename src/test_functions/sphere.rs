use crate::{traits::CostFunction, DVector, Float};

/// The sphere function $`f(\vec{x}) = \sum_i x_i^2`$, with a minimum at $`f(\vec{0}) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;

impl CostFunction for Sphere {
    fn evaluate(&self, x: &DVector<Float>) -> Float {
        x.norm_squared()
    }
}
