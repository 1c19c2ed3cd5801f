use parking_lot::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::AbortSignal;
static INIT: Once = Once::new();
static CTRL_C_PRESSED: AtomicBool = AtomicBool::new(false);

/// A signal that is never triggered.
#[derive(Default, Clone, Copy)]
pub struct NopAbortSignal;

impl AbortSignal for NopAbortSignal {
    fn is_aborted(&self) -> bool {
        false
    }

    fn abort(&self) {}

    fn reset(&self) {}
}

/// Stops a swarm run when the process receives `Ctrl-C`.
///
/// [`CtrlCAbortSignal::new`] installs a process-wide handler the first time it is called; later
/// calls share it. The flag is global, so every `CtrlCAbortSignal` observes the same press and a
/// [`reset`](AbortSignal::reset) on one clears it for all. The handler replaces any other
/// `Ctrl-C` handling in the process.
#[derive(Default)]
pub struct CtrlCAbortSignal;
impl CtrlCAbortSignal {
    /// Create a signal and make sure the `Ctrl-C` handler is installed.
    pub fn new() -> Self {
        INIT.call_once(|| {
            #[allow(clippy::expect_used)]
            ctrlc::set_handler(|| {
                tracing::warn!("Ctrl-C received, stopping swarm after the current step");
                CTRL_C_PRESSED.store(true, Ordering::SeqCst);
            })
            .expect("failed to install Ctrl-C handler");
        });
        Self
    }
}

impl AbortSignal for CtrlCAbortSignal {
    fn is_aborted(&self) -> bool {
        CTRL_C_PRESSED.load(Ordering::SeqCst)
    }

    fn abort(&self) {
        CTRL_C_PRESSED.store(true, Ordering::SeqCst)
    }

    fn reset(&self) {
        CTRL_C_PRESSED.store(false, Ordering::SeqCst);
    }
}

/// A signal that is triggered by setting an atomic boolean.
///
/// Share it between threads by wrapping it in an [`Arc`](std::sync::Arc); the [`AbortSignal`]
/// trait is implemented for `Arc<AtomicAbortSignal>` as well.
#[derive(Default)]
pub struct AtomicAbortSignal {
    abort: AtomicBool,
}

impl AtomicAbortSignal {
    /// Create a new `AtomicAbortSignal`.
    pub const fn new() -> Self {
        Self {
            abort: AtomicBool::new(false),
        }
    }
}

impl AbortSignal for AtomicAbortSignal {
    fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::SeqCst)
    }

    fn abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }

    fn reset(&self) {
        self.abort.store(false, Ordering::SeqCst);
    }
}

impl<T: AbortSignal + ?Sized> AbortSignal for std::sync::Arc<T> {
    fn is_aborted(&self) -> bool {
        (**self).is_aborted()
    }

    fn abort(&self) {
        (**self).abort();
    }

    fn reset(&self) {
        (**self).reset();
    }
}
