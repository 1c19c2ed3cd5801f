use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::Point, DVector, Float};

/// An owned copy of the swarm state after one step.
///
/// Snapshots never alias the optimizer's internal state, so consumers may keep as many as
/// they like (for plotting an animation, for instance).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SwarmSnapshot {
    /// The 0-based index of the step which produced this snapshot
    pub iteration: usize,
    /// The position of every particle, in swarm order, after the step
    pub positions: Vec<DVector<Float>>,
    /// The global best position and value found so far
    pub gbest: Point,
    /// The inertia weight that the next step will use
    pub weight: Float,
}

impl SwarmSnapshot {
    /// The global best position found so far.
    pub const fn global_best(&self) -> &DVector<Float> {
        &self.gbest.x
    }
    /// The global best value found so far.
    pub const fn global_best_value(&self) -> Float {
        self.gbest.fx
    }
    /// The number of particles in the swarm.
    pub fn n_particles(&self) -> usize {
        self.positions.len()
    }
}

impl Display for SwarmSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = format!(
            "╒══════════════════════════════════════════════════════════════════════════════════════════════╕
│{:^94}│",
            "SWARM STATUS",
        );
        let status = format!(
            "╞════════════════════════════════════════════╤════════════════════╤═════════════╤══════════════╡
│ Step: {:>9}                             │ fval: {:+12.3E} │ #par: {:>5} │ ω: {:>9.4} │",
            self.iteration,
            self.gbest.fx,
            self.positions.len(),
            self.weight,
        );
        let header =
            "├───────╥────────────────────────────────────────────┴────────────────────┴─────────────┴──────────────┤
│ Dim # ║ Global Best                                                                          │
├───────╫──────────────────────────────────────────────────────────────────────────────────────┤"
                .to_string();
        let rows = self
            .gbest
            .x
            .iter()
            .enumerate()
            .map(|(i, xi)| format!("│ {:>5} ║ {:<+84.8E} │", i, xi))
            .collect::<Vec<String>>();
        let bottom = "└───────╨──────────────────────────────────────────────────────────────────────────────────────┘".to_string();
        let out = [title, status, header, rows.join("\n"), bottom].join("\n");
        write!(f, "{}", out)
    }
}
