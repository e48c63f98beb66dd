use std::sync::atomic::{AtomicBool, Ordering};

/// Deferred root-nudge request.
///
/// A nudge may be requested from any thread (a button handler, a UI
/// loop), but `nudge_root` must only run on the sequencer's own
/// execution context, never concurrently with an in-flight `tick`. The
/// latch records the request; the driver drains it at the start of the
/// next cycle boundary and applies the nudge there.
#[derive(Debug, Default)]
pub struct NudgeLatch {
    requested: AtomicBool,
}

impl NudgeLatch {
    pub fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Record a nudge request. Safe from any thread; repeated requests
    /// before the next tick collapse into one.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Drain a pending request, returning whether one was recorded.
    pub fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn take_drains_the_request() {
        let latch = NudgeLatch::new();
        assert!(!latch.take());
        latch.request();
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn repeated_requests_collapse() {
        let latch = NudgeLatch::new();
        latch.request();
        latch.request();
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn request_crosses_threads() {
        let latch = Arc::new(NudgeLatch::new());
        let remote = Arc::clone(&latch);
        std::thread::spawn(move || remote.request())
            .join()
            .unwrap();
        assert!(latch.take());
    }
}
