// Tracing progress adapter - Progress lines and a shared cancellation flag

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::ports::*;

/// Reports progress through `tracing` and cancels when the flag is raised
pub struct TracingProgressAdapter {
    cancelled: Arc<AtomicBool>,
}

impl TracingProgressAdapter {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag to raise from a signal handler
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }
}

impl Default for TracingProgressAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPort for TracingProgressAdapter {
    fn on_start(&self, phase: SyncPhase, total: usize) {
        match phase {
            SyncPhase::ReadingMetadata => info!("Reading metadata of {} clip(s)", total),
            SyncPhase::WritingProperties => info!("Writing timecodes for {} clip(s)", total),
        }
    }

    fn on_progress(&self, _phase: SyncPhase, _completed: usize, _total: usize, message: &str) {
        info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        info!("{}", message);
    }

    fn should_cancel(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
