/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal)
pub mod abort_signal;
/// [`Bound`] type for binding variables to a range.
pub mod bound;
/// [`PSOConfig`] type for configuring the swarm.
pub mod config;
/// [`Point`] type for defining a point in the parameter space.
pub mod point;
/// [`SwarmSummary`] type for the result of the minimization.
pub mod summary;

pub use abort_signal::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use bound::{Bound, Bounds};
pub use config::{InertiaSchedule, PSOConfig};
pub use point::Point;
pub use summary::SwarmSummary;
