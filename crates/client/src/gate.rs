//! Single-flight guard for submit/decide actions.
//!
//! The UI equivalent is disabling the triggering control while its call is
//! in flight: one permit exists per gate, it is held for the duration of
//! the call, and it is released on drop whether the call succeeded or
//! failed, so the action can be retried but never duplicated.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Admits one outstanding action at a time.
#[derive(Debug, Default, Clone)]
pub struct ActionGate {
    busy: Arc<AtomicBool>,
}

/// Exclusive permission to run the gated action; releases on drop.
#[derive(Debug)]
pub struct ActionPermit {
    busy: Arc<AtomicBool>,
}

impl ActionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the permit; `None` while an earlier action is still in flight.
    pub fn try_acquire(&self) -> Option<ActionPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ActionPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    /// Whether the gated action is currently in flight (e.g. to disable
    /// its control).
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ActionPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
