use serde::{Deserialize, Serialize};

use crate::{core::Point, DVector, Float};

/// A particle with a position, velocity, and best known position
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Particle {
    /// The current position of the particle
    pub position: DVector<Float>,
    /// The current velocity of the particle
    pub velocity: DVector<Float>,
    /// The best position visited by the particle (as measured by the minimum value of `fx`)
    pub best: Point,
}

impl Particle {
    /// Create a particle at `position` moving with `velocity`. Its personal best starts at
    /// `position` with an infinite value.
    pub fn new(position: DVector<Float>, velocity: DVector<Float>) -> Self {
        Self {
            best: Point::unevaluated(position.clone()),
            position,
            velocity,
        }
    }
    /// Record `value` as the objective value at the current position, replacing the personal
    /// best if it is strictly lower. Returns `true` if the personal best changed.
    pub(crate) fn observe(&mut self, value: Float) -> bool {
        if value < self.best.fx {
            self.best = Point::new(self.position.clone(), value);
            true
        } else {
            false
        }
    }
    /// Blend inertia, cognitive, and social pulls into a new velocity and clamp each component
    /// to `[-max_velocity, max_velocity]`.
    ///
    /// `cognitive` and `social` are the already-randomized coefficients $`c_1 q`$ and
    /// $`c_2 r`$.
    pub(crate) fn update_velocity(
        &mut self,
        weight: Float,
        cognitive: Float,
        social: Float,
        gbest: &DVector<Float>,
        max_velocity: Float,
    ) {
        self.velocity = (self.velocity.scale(weight)
            + (&self.best.x - &self.position).scale(cognitive)
            + (gbest - &self.position).scale(social))
        .map(|v| v.clamp(-max_velocity, max_velocity));
    }
    /// Advance the particle by its velocity without clamping the position.
    pub(crate) fn update_position(&mut self) {
        self.position += &self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    #[test]
    fn test_new_particle_has_unevaluated_best() {
        let p = Particle::new(dvector![1.0, 2.0], dvector![0.5, -0.5]);
        assert_eq!(p.best.x, dvector![1.0, 2.0]);
        assert_eq!(p.best.fx, Float::INFINITY);
    }

    #[test]
    fn test_observe_only_keeps_strict_improvements() {
        let mut p = Particle::new(dvector![1.0], dvector![0.0]);
        assert!(p.observe(3.0));
        p.position = dvector![2.0];
        assert!(!p.observe(3.0));
        assert!(!p.observe(Float::NAN));
        assert_eq!(p.best.x, dvector![1.0]);
        assert!(p.observe(1.0));
        assert_eq!(p.best, Point::new(dvector![2.0], 1.0));
    }

    #[test]
    fn test_velocity_blend() {
        let mut p = Particle::new(dvector![0.0, 0.0], dvector![1.0, -1.0]);
        p.best.x = dvector![1.0, 1.0];
        p.update_velocity(0.5, 0.2, 0.4, &dvector![2.0, -2.0], 10.0);
        assert_relative_eq!(p.velocity[0], 0.5 + 0.2 + 0.8);
        assert_relative_eq!(p.velocity[1], -0.5 + 0.2 - 0.8);
    }

    #[test]
    fn test_velocity_is_clamped_per_component() {
        let mut p = Particle::new(dvector![0.0, 0.0, 0.0], dvector![100.0, -100.0, 0.5]);
        p.update_velocity(1.0, 0.0, 0.0, &dvector![0.0, 0.0, 0.0], 5.0);
        assert_eq!(p.velocity, dvector![5.0, -5.0, 0.5]);
    }

    #[test]
    fn test_position_is_not_clamped() {
        let mut p = Particle::new(dvector![4.0], dvector![5.0]);
        p.update_position();
        assert_eq!(p.position, dvector![9.0]);
        assert_eq!(p.best.x, dvector![4.0]);
    }
}
