use fastrand::Rng;
use fastrand_contrib::RngExt;
use nalgebra::DVector;

use crate::Float;

/// Draws a vector whose `i`-th component is uniform in `limits[i]`.
pub(crate) fn generate_random_vector_in_limits<R: SampleFloat + ?Sized>(
    limits: &[(Float, Float)],
    rng: &mut R,
) -> DVector<Float> {
    DVector::from_iterator(
        limits.len(),
        limits.iter().map(|&(lower, upper)| rng.range(lower, upper)),
    )
}

/// A source of uniformly distributed floating-point values.
///
/// The optimizer only ever asks for values through this trait, so any generator (including a
/// scripted one in tests) can drive it. It is implemented for [`fastrand::Rng`].
pub trait SampleFloat {
    /// Get a random value in the range `[0, 1)`
    fn float(&mut self) -> Float;
    /// Get a random value in the range `[lower, upper)`
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        (upper - lower).mul_add(self.float(), lower)
    }
}

impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f64_range(lower..upper)
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f32_range(lower..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(Float);
    impl SampleFloat for Constant {
        fn float(&mut self) -> Float {
            self.0
        }
    }

    #[test]
    fn test_default_range_maps_unit_interval() {
        let mut half = Constant(0.5);
        assert_eq!(half.range(-4.0, 6.0), 1.0);
        let mut zero = Constant(0.0);
        assert_eq!(zero.range(-4.0, 6.0), -4.0);
    }

    #[test]
    fn test_rng_samples_stay_in_limits() {
        let mut rng = Rng::with_seed(0);
        let limits = [(-5.0, 5.0), (0.0, 1.0), (10.0, 10.5)];
        for _ in 0..1000 {
            let v = generate_random_vector_in_limits(&limits, &mut rng);
            assert_eq!(v.len(), 3);
            for (x, (lower, upper)) in v.iter().zip(limits.iter()) {
                assert!(x >= lower && x < upper);
            }
        }
    }

    #[test]
    fn test_rng_float_is_seeded() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..10 {
            assert_eq!(SampleFloat::float(&mut a), SampleFloat::float(&mut b));
        }
    }
}
