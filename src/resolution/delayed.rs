//! Timer-based resolution.
//!
//! A match fires `match_delay_ms` after the pair was completed, a mismatch
//! `mismatch_delay_ms` after. Tasks are kept sorted by due time; tasks with
//! the same due time fire in the order they were scheduled.

use crate::core::{GameConfig, Millis};

use super::{PendingResolution, ResolutionSystem};

#[derive(Clone, Copy, Debug)]
struct ScheduledResolution {
    task: PendingResolution,
    due_at: Millis,
}

/// Resolution system that waits for the host clock.
#[derive(Clone, Debug)]
pub struct DelayedResolution {
    match_delay_ms: u64,
    mismatch_delay_ms: u64,
    /// Sorted by `due_at`.
    queue: Vec<ScheduledResolution>,
}

impl DelayedResolution {
    /// Create a resolver with explicit delays.
    pub fn new(match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        Self {
            match_delay_ms,
            mismatch_delay_ms,
            queue: Vec::new(),
        }
    }

    /// Create a resolver with the delays from a config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.match_delay_ms, config.mismatch_delay_ms)
    }

    /// Delay applied to a task.
    #[must_use]
    pub fn delay_for(&self, task: &PendingResolution) -> u64 {
        if task.kind.is_match() {
            self.match_delay_ms
        } else {
            self.mismatch_delay_ms
        }
    }
}

impl Default for DelayedResolution {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl ResolutionSystem for DelayedResolution {
    fn schedule(&mut self, task: PendingResolution) {
        let due_at = task.scheduled_at.after(self.delay_for(&task));
        let pos = self.queue.partition_point(|s| s.due_at <= due_at);
        self.queue.insert(pos, ScheduledResolution { task, due_at });
    }

    fn take_due(&mut self, now: Millis) -> Vec<PendingResolution> {
        let split = self.queue.partition_point(|s| s.due_at <= now);
        self.queue.drain(..split).map(|s| s.task).collect()
    }

    fn next_due(&self) -> Option<Millis> {
        self.queue.first().map(|s| s.due_at)
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
