use core::sync::atomic::{AtomicBool, Ordering};

/// Shared flag asking running effects to stop
///
/// Can be placed in a `static` and cancelled from an interrupt or another
/// task. Only effects without a natural end and the playlist runner check it.
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Clear the flag so the token can be used again
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }
}
