//! Single-flight busy flag and the RAII guard that clears it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared busy/idle flag. Clones observe the same state, so a front end can
/// keep one to disable its submit control while a request runs.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Moves idle → busy. Returns `None` if a request is already in flight.
    pub fn try_engage(&self) -> Option<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: &self.0 })
    }
}

/// Clears the busy flag when dropped, on every exit path.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
