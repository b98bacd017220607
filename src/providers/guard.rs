//! Process-wide write guard

use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::WriteGuard;

/// Process-wide write guard backed by an atomic read-only flag
///
/// The flag can be flipped at runtime by administrative action; the engine
/// re-reads it on every call, so a toggle takes effect on the next check.
#[derive(Debug, Default)]
pub struct ProcessWriteGuard {
    read_only: AtomicBool,
}

impl ProcessWriteGuard {
    /// Create a guard in writable mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter or leave read-only operating mode
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl WriteGuard for ProcessWriteGuard {
    fn is_read_only(&self) -> bool {
        self.read_only.load(Ordering::SeqCst)
    }
}
