//! Immediate resolution.
//!
//! Every queued task is due on the next `take_due`, whatever the clock
//! says. Headless players use this to settle each pair as soon as it is
//! completed.

use crate::core::Millis;

use super::{PendingResolution, ResolutionSystem};

/// Resolution system with no waiting.
#[derive(Clone, Debug, Default)]
pub struct ImmediateResolution {
    pending: Vec<PendingResolution>,
}

impl ImmediateResolution {
    /// Create a new immediate resolution system.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResolutionSystem for ImmediateResolution {
    fn schedule(&mut self, task: PendingResolution) {
        self.pending.push(task);
    }

    fn take_due(&mut self, _now: Millis) -> Vec<PendingResolution> {
        std::mem::take(&mut self.pending)
    }

    fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|t| t.scheduled_at).min()
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}
