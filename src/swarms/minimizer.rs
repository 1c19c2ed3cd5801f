use std::sync::Arc;

use fastrand::Rng;
use parking_lot::RwLock;
use tracing::info;

use crate::{
    core::{NopAbortSignal, SwarmSummary},
    swarms::SwarmOptimizer,
    traits::{AbortSignal, CostFunction, SwarmObserver},
    utils::SampleFloat,
};

/// The main struct used for running a [`SwarmOptimizer`] to completion while reporting each
/// step to [`SwarmObserver`]s.
pub struct SwarmMinimizer<F, R = Rng> {
    /// The driven [`SwarmOptimizer`], usually read after minimization.
    pub optimizer: SwarmOptimizer<F, R>,
    max_steps: usize,
    observers: Vec<Arc<RwLock<dyn SwarmObserver>>>,
    abort_signal: Box<dyn AbortSignal>,
}

impl<F: CostFunction, R: SampleFloat> SwarmMinimizer<F, R> {
    /// Creates a new [`SwarmMinimizer`] which will run `optimizer` for
    /// [`PSOConfig::max_iterations`](crate::PSOConfig::max_iterations) steps.
    pub fn new(optimizer: SwarmOptimizer<F, R>) -> Self {
        Self {
            max_steps: optimizer.config().max_iterations,
            optimizer,
            observers: Vec::default(),
            abort_signal: Box::new(NopAbortSignal),
        }
    }
    /// Set the maximum number of steps to perform.
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
    /// Adds a single [`SwarmObserver`] to the [`SwarmMinimizer`].
    pub fn with_observer(mut self, observer: Arc<RwLock<dyn SwarmObserver>>) -> Self {
        self.observers.push(observer);
        self
    }
    /// Set the [`AbortSignal`] checked after every step (default: [`NopAbortSignal`]).
    pub fn with_abort_signal<A: AbortSignal + 'static>(mut self, abort_signal: A) -> Self {
        self.abort_signal = Box::new(abort_signal);
        self
    }
    /// Run the swarm for at most the maximum number of steps.
    ///
    /// The abort signal is reset first. Each step is followed by a sequential call to all
    /// [`SwarmObserver`]s' callback functions, after which the run stops if any of them returned
    /// [`ControlFlow::Break`](std::ops::ControlFlow::Break) or if the abort signal has been
    /// triggered. The returned [`SwarmSummary::message`] is `"MAX STEPS"`,
    /// `"Observer termination"`, or `"Abort signal received"` respectively.
    ///
    /// Calling this method again continues from the current swarm state.
    pub fn minimize(&mut self) -> SwarmSummary {
        self.abort_signal.reset();
        info!(
            max_steps = self.max_steps,
            n_particles = self.optimizer.n_particles(),
            dimension = self.optimizer.dimension(),
            "starting swarm minimization"
        );
        let mut message = "MAX STEPS";
        let mut steps = 0;
        for snapshot in self.optimizer.run(self.max_steps) {
            steps += 1;
            let mut observer_termination = false;
            for observer in &self.observers {
                observer_termination = observer
                    .write()
                    .callback(snapshot.iteration, &snapshot)
                    .is_break()
                    || observer_termination;
            }
            if observer_termination {
                message = "Observer termination";
                break;
            }
            if self.abort_signal.is_aborted() {
                message = "Abort signal received";
                break;
            }
        }
        let (x, fx) = self.optimizer.global_best().clone().destructure();
        let summary = SwarmSummary {
            bounds: self.optimizer.bounds().to_vec(),
            message: message.to_string(),
            x: x.as_slice().to_vec(),
            fx,
            iterations: steps,
            cost_evals: self.optimizer.n_f_evals(),
            final_weight: self.optimizer.weight(),
        };
        info!(
            steps,
            fx,
            reason = summary.message.as_str(),
            "finished swarm minimization"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;
    use crate::{
        core::{AtomicAbortSignal, PSOConfig},
        swarms::SwarmSnapshot,
        test_functions::Himmelblau,
    };

    fn himmelblau_minimizer() -> SwarmMinimizer<Himmelblau> {
        SwarmMinimizer::new(
            SwarmOptimizer::new(Himmelblau, 2, 40, (-5.0, 5.0), PSOConfig::default(), 0).unwrap(),
        )
    }

    #[derive(Default)]
    struct StopAfter {
        limit: usize,
        calls: Vec<usize>,
    }
    impl SwarmObserver for StopAfter {
        fn callback(&mut self, step: usize, _snapshot: &SwarmSnapshot) -> ControlFlow<()> {
            self.calls.push(step);
            if self.calls.len() >= self.limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }
    }

    struct AbortOnStep {
        step: usize,
        signal: Arc<AtomicAbortSignal>,
    }
    impl SwarmObserver for AbortOnStep {
        fn callback(&mut self, step: usize, _snapshot: &SwarmSnapshot) -> ControlFlow<()> {
            if step == self.step {
                self.signal.abort();
            }
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_runs_default_number_of_steps() {
        let mut m = himmelblau_minimizer();
        let summary = m.minimize();
        assert_eq!(summary.message, "MAX STEPS");
        assert_eq!(summary.iterations, 40);
        assert_eq!(summary.cost_evals, 40 * 40);
        assert!(summary.fx < 1.0);
        assert_eq!(summary.x.len(), 2);
        assert_eq!(summary.bounds.len(), 2);
        assert_eq!(summary.final_weight, m.optimizer.weight());
    }

    #[test]
    fn test_max_steps_override() {
        let mut m = himmelblau_minimizer().with_max_steps(7);
        let summary = m.minimize();
        assert_eq!(summary.iterations, 7);
        assert_eq!(m.optimizer.iteration(), 7);
        let summary = m.minimize();
        assert_eq!(summary.iterations, 7);
        assert_eq!(m.optimizer.iteration(), 14);
    }

    #[test]
    fn test_observer_termination_calls_every_observer() {
        let first = Arc::new(RwLock::new(StopAfter {
            limit: 3,
            ..Default::default()
        }));
        let second = Arc::new(RwLock::new(StopAfter {
            limit: usize::MAX,
            ..Default::default()
        }));
        let mut m = himmelblau_minimizer()
            .with_observer(first.clone())
            .with_observer(second.clone());
        let summary = m.minimize();
        assert_eq!(summary.message, "Observer termination");
        assert_eq!(summary.iterations, 3);
        assert_eq!(first.read().calls, vec![0, 1, 2]);
        assert_eq!(second.read().calls, vec![0, 1, 2]);
    }

    #[test]
    fn test_abort_signal_stops_run() {
        let signal = Arc::new(AtomicAbortSignal::new());
        signal.abort();
        let observer = Arc::new(RwLock::new(AbortOnStep {
            step: 4,
            signal: signal.clone(),
        }));
        let mut m = himmelblau_minimizer()
            .with_observer(observer)
            .with_abort_signal(signal.clone());
        let summary = m.minimize();
        assert_eq!(summary.message, "Abort signal received");
        assert_eq!(summary.iterations, 5);
        assert!(signal.is_aborted());
    }
}
