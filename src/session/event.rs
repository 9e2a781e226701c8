//! Game events.
//!
//! The controller records an event for every visible change, so a host can
//! animate transitions or play sounds without diffing views. Events are
//! drained with `GameController::drain_events`.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

use super::state::SessionId;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A fresh deck was dealt.
    #[serde(rename_all = "camelCase")]
    NewGame { session: SessionId, card_count: usize },
    /// A card was turned face up.
    #[serde(rename_all = "camelCase")]
    CardFlipped { index: usize, card: CardId, moves: u32 },
    /// The second card completed a pair with the same image.
    #[serde(rename_all = "camelCase")]
    PairMatched { first: usize, second: usize, matches: u32 },
    /// The second card did not match the first.
    PairMismatched { first: usize, second: usize },
    /// A matched pair was resolved and the pending flips cleared.
    PairCleared { first: usize, second: usize },
    /// A mismatched pair was turned face down again.
    PairHidden { first: usize, second: usize },
    /// Every pair has been found.
    GameWon { moves: u32 },
}
