//! # picmatch
//!
//! A picture flip match memory game engine.
//!
//! A deck holds two copies of every configured image, shuffled. The player
//! turns cards two at a time: a matching pair stays face up, a mismatch is
//! turned back down after a short delay. The game is won once every pair is
//! found.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: The engine never reads a clock. Every entry
//!    point that can fire a delayed resolution takes the host's `now`.
//!
//! 2. **One Mutator**: All state changes go through `GameController`.
//!    Views are pure functions of a session.
//!
//! 3. **Cancellable Resolution**: Delayed resolutions carry the id of the
//!    game that scheduled them; a new game cancels them all.
//!
//! ## Modules
//!
//! - `core`: Cards, decks, configuration, RNG, time, errors
//! - `session`: Session state, the controller and its events
//! - `resolution`: Delayed and immediate pair resolution
//! - `view`: Card and board presentation
//! - `policy`: Automated players for headless play
//! - `browser`: wasm-bindgen surface (`browser` feature)
//! - `python`: PyO3 surface (`python` feature)

pub mod core;
pub mod policy;
pub mod resolution;
pub mod session;
pub mod view;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Card, CardFace, CardId, Deck, GameConfig, GameError, GameResult, GameRng,
    Millis,
};

pub use crate::session::{
    ClickOutcome, GameController, GameEvent, GameSession, IgnoreReason, SessionId, SessionPhase,
};

pub use crate::resolution::{
    DelayedResolution, ImmediateResolution, PendingResolution, ResolutionKind, ResolutionSystem,
};

pub use crate::view::{AssetStatus, BoardView, CardView, Face};

pub use crate::policy::{play_out, ClickPolicy, MemoryPolicy, PlayStats, RandomPolicy};
