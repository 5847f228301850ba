//! Shared stop flag coordinating graceful worker shutdown

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One boolean shared by every worker and the controller
///
/// Transitions run -> stop at most once per run and never resets.
/// Atomic visibility is all it needs; there is nothing to mutually
/// exclude.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag to stop; idempotent
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
