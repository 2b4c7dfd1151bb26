use std::sync::atomic::{AtomicUsize, Ordering};

/// Offsets scanned between polls of the [`ExactMatchSignal`].
pub const CANCEL_CHECK_INTERVAL: usize = 1024;

/// Cross-worker signal that an exact match has been found.
///
/// Holds the lowest worker index that reported a `0.0` distance. A worker may
/// stop only when a worker with a *lower* index has already reported, so the
/// lowest offset among exact ties still wins the reduction.
#[derive(Debug)]
pub struct ExactMatchSignal {
    lowest_worker: AtomicUsize,
}

impl ExactMatchSignal {
    pub fn new() -> Self {
        Self {
            lowest_worker: AtomicUsize::new(usize::MAX),
        }
    }

    /// Record that `worker` found an exact match.
    pub fn report(&self, worker: usize) {
        self.lowest_worker.fetch_min(worker, Ordering::Relaxed);
    }

    /// Whether `worker` can no longer contribute to the result.
    #[inline]
    pub fn should_stop(&self, worker: usize) -> bool {
        self.lowest_worker.load(Ordering::Relaxed) < worker
    }

    /// Lowest worker index that reported an exact match, if any.
    pub fn lowest_reporter(&self) -> Option<usize> {
        match self.lowest_worker.load(Ordering::Relaxed) {
            usize::MAX => None,
            w => Some(w),
        }
    }
}

impl Default for ExactMatchSignal {
    fn default() -> Self {
        Self::new()
    }
}
