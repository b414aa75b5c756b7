//! Process-lifetime sequence counters.
//!
//! Each endpoint owns exactly one counter, created at the composition root
//! and shared with every request or connection handler through an `Arc`.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source. The first call to [`next`](Self::next)
/// returns 1; values are never reused or reset.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    value: AtomicU64,
}

impl SequenceCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: AtomicU64::new(0),
        }
    }

    /// Advance the counter and return the new identifier.
    pub fn next(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last identifier handed out (0 before the first call to `next`).
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
