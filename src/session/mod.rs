//! Game sessions and the controller that drives them.
//!
//! - [`GameSession`]: deck, pending flips, counters and history of one game
//! - [`GameController`]: the only mutator of a session, fed by clicks and
//!   clock ticks
//! - [`GameEvent`]: a log of visible changes for hosts that animate them

mod controller;
mod event;
mod state;

pub use controller::{ClickOutcome, GameController};
pub use event::GameEvent;
pub use state::{GameSession, IgnoreReason, SessionId, SessionPhase};
