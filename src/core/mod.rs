//! Core engine types: cards, deck, configuration, RNG, time, errors.
//!
//! Everything here is independent of how a game is driven. The session
//! controller builds on these types; the view and bindings only read them.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod time;

pub use action::ActionRecord;
pub use card::{Card, CardFace, CardId};
pub use config::{GameConfig, DEFAULT_IMAGES, DEFAULT_MATCH_DELAY_MS, DEFAULT_MISMATCH_DELAY_MS};
pub use deck::Deck;
pub use error::{GameError, GameResult};
pub use rng::GameRng;
pub use time::Millis;
