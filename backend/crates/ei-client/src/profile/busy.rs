use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-flight marker for one profile control.
///
/// Acquiring hands out a [`BusyGuard`]; the flag clears when the guard is
/// dropped, including when the action's future is abandoned mid-request.
#[derive(Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// `None` while another guard is alive
    pub(crate) fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(Arc::clone(&self.0)))
    }
}

#[derive(Debug)]
pub(crate) struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
