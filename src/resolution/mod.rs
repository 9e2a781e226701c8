//! Delayed pair resolution.
//!
//! When a second card is turned over the controller does not settle the
//! pair straight away: it schedules a `PendingResolution` and applies it
//! once the host clock passes the task's due time. This gives the player
//! time to see both cards before a mismatch hides them again.
//!
//! Two systems are provided:
//! - [`DelayedResolution`]: tasks fire after the configured match/mismatch
//!   delays (the browser game)
//! - [`ImmediateResolution`]: tasks are due on the next check regardless of
//!   the clock (headless play without a clock)
//!
//! Every task carries the [`SessionId`] of the game that scheduled it.
//! Starting a new game clears the system, and the controller also drops any
//! task whose session id is stale.
//!
//! ```
//! use picmatch::core::Millis;
//! use picmatch::resolution::{
//!     DelayedResolution, PendingResolution, ResolutionKind, ResolutionSystem,
//! };
//! use picmatch::session::SessionId;
//!
//! let mut resolver = DelayedResolution::new(500, 1000);
//! resolver.schedule(PendingResolution {
//!     session: SessionId::new(1),
//!     kind: ResolutionKind::Mismatch { first: 0, second: 3 },
//!     scheduled_at: Millis::new(100),
//! });
//!
//! assert!(resolver.take_due(Millis::new(1099)).is_empty());
//! assert_eq!(resolver.take_due(Millis::new(1100)).len(), 1);
//! ```

mod delayed;
mod immediate;

pub use delayed::DelayedResolution;
pub use immediate::ImmediateResolution;

use crate::core::Millis;
use crate::session::SessionId;

/// What a resolution does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    /// Clear the pending flips; check for the win.
    Match { first: usize, second: usize },
    /// Flip both cards back down and clear the pending flips.
    Mismatch { first: usize, second: usize },
}

impl ResolutionKind {
    /// The two deck indices this resolution settles.
    #[must_use]
    pub fn indices(&self) -> (usize, usize) {
        match *self {
            ResolutionKind::Match { first, second } | ResolutionKind::Mismatch { first, second } => {
                (first, second)
            }
        }
    }

    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, ResolutionKind::Match { .. })
    }
}

/// A scheduled resolution task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingResolution {
    /// Game that scheduled this task.
    pub session: SessionId,
    /// What to do when it fires.
    pub kind: ResolutionKind,
    /// Host time the pair was completed.
    pub scheduled_at: Millis,
}

/// Trait for resolution systems.
///
/// The controller schedules one task per completed pair and polls with the
/// host clock. Implementations decide when a task becomes due.
pub trait ResolutionSystem {
    /// Queue a task.
    fn schedule(&mut self, task: PendingResolution);

    /// Remove and return every task due at `now`, earliest first.
    fn take_due(&mut self, now: Millis) -> Vec<PendingResolution>;

    /// Earliest due time among queued tasks.
    fn next_due(&self) -> Option<Millis>;

    /// Number of queued tasks.
    fn pending_count(&self) -> usize;

    /// Check if nothing is queued.
    fn is_idle(&self) -> bool {
        self.pending_count() == 0
    }

    /// Drop every queued task.
    fn clear(&mut self);
}
