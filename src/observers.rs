use std::{ops::ControlFlow, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{core::Point, traits::SwarmObserver, DVector, Float, SwarmSnapshot};

/// A debugging observer which logs the step, best value, and inertia weight at every step of the
/// swarm as a `tracing` debug event.
///
/// # Usage:
///
/// ```rust
/// use std::sync::Arc;
/// use parking_lot::RwLock;
/// use swarmopt::prelude::*;
/// use swarmopt::observers::DebugObserver;
/// use swarmopt::test_functions::Himmelblau;
///
/// let pso = SwarmOptimizer::new(Himmelblau, 2, 10, (-5.0, 5.0), PSOConfig::default(), 0).unwrap();
/// let mut m = SwarmMinimizer::new(pso).with_observer(Arc::new(RwLock::new(DebugObserver)));
/// let summary = m.minimize();
/// // ^ This will emit a debug event for each step
/// assert_eq!(summary.iterations, 40);
/// ```
pub struct DebugObserver;
impl SwarmObserver for DebugObserver {
    fn callback(&mut self, step: usize, snapshot: &SwarmSnapshot) -> ControlFlow<()> {
        debug!(
            step,
            fx = snapshot.gbest.fx,
            weight = snapshot.weight,
            x = ?snapshot.gbest.x.as_slice(),
            "swarm step"
        );
        ControlFlow::Continue(())
    }
}

/// An [`SwarmObserver`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles' positions
    pub history: Vec<Vec<DVector<Float>>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl SwarmObserver for TrackingSwarmObserver {
    fn callback(&mut self, _step: usize, snapshot: &SwarmSnapshot) -> ControlFlow<()> {
        self.history.push(snapshot.positions.clone());
        self.best_history.push(snapshot.gbest.clone());
        ControlFlow::Continue(())
    }
}
