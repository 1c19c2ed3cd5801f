/// Module containing the [`SwarmMinimizer`] driver.
pub mod minimizer;
/// Module containing the [`Particle`] type.
pub mod particle;
/// Module containing the [`SwarmOptimizer`] and its lazy [`SwarmRun`] iterator.
pub mod pso;
/// Module containing the [`SwarmSnapshot`] type.
pub mod snapshot;

pub use minimizer::SwarmMinimizer;
pub use particle::Particle;
pub use pso::{SwarmOptimizer, SwarmRun};
pub use snapshot::SwarmSnapshot;
