use std::iter::FusedIterator;

use fastrand::Rng;
use tracing::{debug, trace};

use crate::{
    core::{Bound, Bounds, PSOConfig, Point},
    swarms::{Particle, SwarmSnapshot},
    traits::CostFunction,
    utils::{generate_random_vector_in_limits, SampleFloat},
    Float, SwarmError,
};

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which are aware of the global best
/// position found by the swarm. Every [`step`](SwarmOptimizer::step) first evaluates each
/// particle in order, updating its personal best and the global best, and then updates each
/// particle's velocity as follows:
///
/// ```math
/// v_{i,d}^{t+1} = \text{clamp}\left(\omega_t v_{i,d}^t + c_1 q_i (p_{i,d} - x_{i,d}^t) + c_2 r_i (g_d - x_{i,d}^t), -v_\text{max}, v_\text{max}\right)
/// ```
/// where $`q_i`$ and $`r_i`$ are uniform in $`[0, 1)`$ and drawn once per particle (shared
/// across dimensions), $`\omega_t`$ is the inertia weight, $`c_1`$ and $`c_2`$ are the
/// cognitive and social weights respectively, $`p_i`$ is the particle's personal best position
/// and $`g`$ is the swarm's best position. Particles then move by their new velocity and the
/// inertia weight decays according to the [`InertiaSchedule`](crate::InertiaSchedule).
///
/// Global best updates made by earlier particles in an evaluation pass are visible to later
/// particles of the same pass, so the evaluation order is part of the algorithm's contract.
///
/// Positions are not clamped to the initialization [`Bounds`], so particles may leave them.
/// Objective values of `NaN` never replace a best value, while `-inf` always does.
pub struct SwarmOptimizer<F, R = Rng> {
    objective: F,
    config: PSOConfig,
    bounds: Vec<Bound>,
    particles: Vec<Particle>,
    gbest: Point,
    weight: Float,
    iteration: usize,
    n_f_evals: usize,
    rng: R,
}

impl<F: CostFunction> SwarmOptimizer<F, Rng> {
    /// Construct a new swarm of `n_particles` particles in a `dimension` dimensional space using
    /// a [`fastrand::Rng`] seeded with `seed`.
    ///
    /// # Errors
    ///
    /// See [`SwarmOptimizer::initialize`].
    pub fn new(
        objective: F,
        dimension: usize,
        n_particles: usize,
        bounds: impl Into<Bounds>,
        config: PSOConfig,
        seed: u64,
    ) -> Result<Self, SwarmError> {
        Self::initialize(
            objective,
            dimension,
            n_particles,
            bounds,
            config,
            Rng::with_seed(seed),
        )
    }
}

impl<F: CostFunction, R: SampleFloat> SwarmOptimizer<F, R> {
    /// Construct a new swarm of `n_particles` particles in a `dimension` dimensional space.
    ///
    /// Each particle is placed uniformly within `bounds` and given a velocity drawn uniformly
    /// from $`[-(u - l)/2, (u - l)/2]`$ in every dimension. All personal bests and the global
    /// best start at `+inf`; the objective is not evaluated until the first step.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfiguration`] if `dimension` or `n_particles` is zero, if
    /// the bounds are invalid (see [`Bounds::resolve`]), or if the `config` is invalid (see
    /// [`PSOConfig::validate`]).
    pub fn initialize(
        objective: F,
        dimension: usize,
        n_particles: usize,
        bounds: impl Into<Bounds>,
        config: PSOConfig,
        mut rng: R,
    ) -> Result<Self, SwarmError> {
        if dimension < 1 {
            return Err(SwarmError::invalid("dimension must be at least 1"));
        }
        if n_particles < 1 {
            return Err(SwarmError::invalid("particle count must be at least 1"));
        }
        let bounds = bounds.into().resolve(dimension)?;
        config.validate()?;

        let position_limits: Vec<(Float, Float)> =
            bounds.iter().map(|b| (b.lower(), b.upper())).collect();
        let velocity_limits: Vec<(Float, Float)> =
            bounds.iter().map(Bound::velocity_limits).collect();
        let particles: Vec<Particle> = (0..n_particles)
            .map(|_| {
                let position = generate_random_vector_in_limits(&position_limits, &mut rng);
                let velocity = generate_random_vector_in_limits(&velocity_limits, &mut rng);
                Particle::new(position, velocity)
            })
            .collect();
        let gbest = Point::unevaluated(particles[0].position.clone());
        debug!(dimension, n_particles, "initialized swarm");
        Ok(Self {
            objective,
            weight: config.inertia.initial_weight,
            config,
            bounds,
            particles,
            gbest,
            iteration: 0,
            n_f_evals: 0,
            rng,
        })
    }

    /// Perform one iteration of the algorithm and return a snapshot of the resulting state.
    pub fn step(&mut self) -> SwarmSnapshot {
        for (index, particle) in self.particles.iter_mut().enumerate() {
            let value = self.objective.evaluate(&particle.position);
            self.n_f_evals += 1;
            let improved = particle.observe(value);
            if !value.is_finite() {
                trace!(
                    iteration = self.iteration,
                    index,
                    value,
                    improved,
                    "non-finite objective value"
                );
            }
            if value < self.gbest.fx {
                self.gbest = Point::new(particle.position.clone(), value);
            }
        }

        let gbest = &self.gbest.x;
        for particle in &mut self.particles {
            let r = self.rng.float();
            let q = self.rng.float();
            particle.update_velocity(
                self.weight,
                self.config.c1 * q,
                self.config.c2 * r,
                gbest,
                self.config.max_velocity,
            );
            particle.update_position();
        }
        self.weight = self.config.inertia.next(self.weight);

        let snapshot = SwarmSnapshot {
            iteration: self.iteration,
            positions: self.particles.iter().map(|p| p.position.clone()).collect(),
            gbest: self.gbest.clone(),
            weight: self.weight,
        };
        trace!(
            iteration = self.iteration,
            fx = self.gbest.fx,
            weight = self.weight,
            "swarm step"
        );
        self.iteration += 1;
        snapshot
    }

    /// Lazily perform `max_iterations` steps, yielding one [`SwarmSnapshot`] per step.
    ///
    /// The returned iterator borrows the optimizer, so steps only happen as snapshots are
    /// consumed. Calling `run` again continues from the current swarm state.
    pub fn run(&mut self, max_iterations: usize) -> SwarmRun<'_, F, R> {
        SwarmRun {
            optimizer: self,
            remaining: max_iterations,
        }
    }
}

impl<F, R> SwarmOptimizer<F, R> {
    /// The particles of the swarm, in evaluation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    /// The global best position and value found so far.
    pub const fn global_best(&self) -> &Point {
        &self.gbest
    }
    /// The inertia weight the next step will use.
    pub const fn weight(&self) -> Float {
        self.weight
    }
    /// The number of steps performed so far.
    pub const fn iteration(&self) -> usize {
        self.iteration
    }
    /// The number of objective evaluations performed so far.
    pub const fn n_f_evals(&self) -> usize {
        self.n_f_evals
    }
    /// The dimension of the search space.
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }
    /// The number of particles in the swarm.
    pub fn n_particles(&self) -> usize {
        self.particles.len()
    }
    /// The bounds the swarm was initialized in, one per dimension.
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }
    /// The configuration of the swarm.
    pub const fn config(&self) -> &PSOConfig {
        &self.config
    }
    /// The objective function being minimized.
    pub const fn objective(&self) -> &F {
        &self.objective
    }
}

/// A lazy, finite sequence of [`SwarmSnapshot`]s created by [`SwarmOptimizer::run`].
pub struct SwarmRun<'a, F, R> {
    optimizer: &'a mut SwarmOptimizer<F, R>,
    remaining: usize,
}

impl<F: CostFunction, R: SampleFloat> Iterator for SwarmRun<'_, F, R> {
    type Item = SwarmSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.optimizer.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F: CostFunction, R: SampleFloat> ExactSizeIterator for SwarmRun<'_, F, R> {}

impl<F: CostFunction, R: SampleFloat> FusedIterator for SwarmRun<'_, F, R> {}
