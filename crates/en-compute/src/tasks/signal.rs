//! Cooperative cancellation shared by the workers of one search.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set once by the first worker that finishes the search; polled by the rest.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every worker to stop.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// True once any worker called [`stop`](Self::stop).
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}
