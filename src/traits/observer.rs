use std::ops::ControlFlow;

use crate::SwarmSnapshot;

/// A trait which holds a [`callback`](`SwarmObserver::callback`) function that receives every
/// [`SwarmSnapshot`] produced during a [`SwarmMinimizer`](crate::SwarmMinimizer) run.
pub trait SwarmObserver {
    /// A function that is called after every step of the swarm. If it returns
    /// [`ControlFlow::Break`], the [`SwarmMinimizer::minimize`](crate::SwarmMinimizer::minimize)
    /// method will terminate once the remaining observers for this step have been called.
    fn callback(&mut self, step: usize, snapshot: &SwarmSnapshot) -> ControlFlow<()>;
}
