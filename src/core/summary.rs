use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::Bound, Float};

/// A struct that holds the results of a [`SwarmMinimizer`](crate::SwarmMinimizer) run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmSummary {
    /// The bounds the swarm was initialized in.
    pub bounds: Vec<Bound>,
    /// A message describing why the run stopped.
    pub message: String,
    /// The global best position found by the swarm.
    pub x: Vec<Float>,
    /// The objective value at [`SwarmSummary::x`].
    pub fx: Float,
    /// The number of steps taken during the run.
    pub iterations: usize,
    /// The total number of objective evaluations performed by the swarm.
    pub cost_evals: usize,
    /// The inertia weight after the last step.
    pub final_weight: Float,
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = format!(
            "╒══════════════════════════════════════════════════════════════════════════════════════════════╕
│{:^94}│",
            "SWARM RESULTS",
        );
        let status = format!(
            "╞════════════════════════════════════════════╤════════════════════╤═════════════╤══════════════╡
│ Steps: {:>8}                            │ fval: {:+12.3E} │ #fcn: {:>5} │ ω: {:>9.4} │",
            self.iterations, self.fx, self.cost_evals, self.final_weight,
        );
        let message = format!(
            "├────────────────────────────────────────────┴────────────────────┴─────────────┴──────────────┤
│ Message: {:<83} │",
            self.message,
        );
        let header =
            "├───────╥────────────────────────────────────────────╥──────────────┬──────────────┬───────────┤
│ Par # ║ Value                                      ║       -Bound │       +Bound │ In Bound? │
├───────╫────────────────────────────────────────────╫──────────────┼──────────────┼───────────┤"
                .to_string();
        let mut res_list: Vec<String> = vec![];
        for (i, xi) in self.x.iter().enumerate() {
            let (lower, upper, inside) = self.bounds.get(i).map_or(
                (Float::NEG_INFINITY, Float::INFINITY, true),
                |bound| (bound.lower(), bound.upper(), bound.contains(*xi)),
            );
            let row = format!(
                "│ {:>5} ║ {:>+12.8E}                             ║ {:>+12.3E} │ {:>+12.3E} │ {:^9} │",
                i,
                xi,
                lower,
                upper,
                if inside { "yes" } else { "no" }
            );
            res_list.push(row);
        }
        let bottom = "└───────╨────────────────────────────────────────────╨──────────────┴──────────────┴───────────┘".to_string();
        let out = [title, status, message, header, res_list.join("\n"), bottom].join("\n");
        write!(f, "{}", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_parameter() {
        let summary = SwarmSummary {
            bounds: vec![Bound::new(-5.0, 5.0).unwrap(); 2],
            message: "MAX STEPS".to_string(),
            x: vec![3.0, 7.0],
            fx: 0.25,
            iterations: 40,
            cost_evals: 1600,
            final_weight: 0.3,
        };
        let table = summary.to_string();
        assert!(table.contains("SWARM RESULTS"));
        assert!(table.contains("MAX STEPS"));
        assert!(table.contains("1600"));
        assert!(table.contains("yes"));
        assert!(table.contains("no"));
    }
}
