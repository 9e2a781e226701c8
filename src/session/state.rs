//! Game session state.
//!
//! ## GameSession
//!
//! Everything one game instance owns:
//! - The deck (cards flip in place)
//! - Pending flips (0, 1 or 2 indices awaiting resolution)
//! - Move and match counters, the win flag
//! - Click history
//!
//! Mutation goes through the controller; hosts and views only read.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActionRecord, Card, Deck, Millis};

/// Identity of one game instance.
///
/// Resolution tasks carry the id of the game that scheduled them, so a
/// task left over from a replaced game can be recognized and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id of the game started after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Progress of a session: `Idle → InProgress → Won`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    /// Fresh deck, no card turned yet.
    Idle,
    /// At least one move made, pairs remain.
    InProgress,
    /// Every pair found and resolved.
    Won,
}

/// Why a click was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    /// No card at that index.
    OutOfRange,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyFlipped,
    /// Two cards are waiting for resolution.
    PairPending,
}

/// State of one game instance.
#[derive(Clone, Debug)]
pub struct GameSession {
    id: SessionId,
    deck: Deck,
    /// Indices of face-up cards awaiting resolution, in click order.
    pending: SmallVec<[usize; 2]>,
    move_count: u32,
    match_count: u32,
    won: bool,
    history: Vector<ActionRecord>,
}

impl GameSession {
    /// Start a session over a fresh deck.
    #[must_use]
    pub fn new(id: SessionId, deck: Deck) -> Self {
        Self {
            id,
            deck,
            pending: SmallVec::new(),
            move_count: 0,
            match_count: 0,
            won: false,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Indices awaiting resolution, in click order.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        self.deck.pair_count() as u32
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// True once every pair has been found, even before the final match
    /// resolution fires.
    #[must_use]
    pub fn all_pairs_found(&self) -> bool {
        self.match_count == self.pair_count()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.won {
            SessionPhase::Won
        } else if self.move_count == 0 {
            SessionPhase::Idle
        } else {
            SessionPhase::InProgress
        }
    }

    /// Accepted clicks, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Check whether a click on `index` would be accepted.
    ///
    /// Returns the reason it would be ignored, or `None` if it is legal.
    #[must_use]
    pub fn check_click(&self, index: usize) -> Option<IgnoreReason> {
        let Some(card) = self.deck.get(index) else {
            return Some(IgnoreReason::OutOfRange);
        };
        if card.is_matched() {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.is_flipped() {
            Some(IgnoreReason::AlreadyFlipped)
        } else if self.pending.len() >= 2 {
            Some(IgnoreReason::PairPending)
        } else {
            None
        }
    }

    /// Every index a click would currently be accepted on.
    #[must_use]
    pub fn legal_clicks(&self) -> Vec<usize> {
        if self.pending.len() >= 2 {
            return Vec::new();
        }
        self.deck.hidden_indices().collect()
    }

    // === Mutation (controller only) ===

    /// Turn a card up and count the move. Caller has checked the click.
    pub(crate) fn flip(&mut self, index: usize, at: Millis) -> ActionRecord {
        let card = &mut self.deck[index];
        card.flip_up();
        let card_id = card.id;
        self.pending.push(index);
        self.move_count += 1;
        let record = ActionRecord {
            index,
            card: card_id,
            move_number: self.move_count,
            at,
        };
        self.history.push_back(record);
        record
    }

    /// Lock both cards face up and count the match.
    pub(crate) fn mark_pair_matched(&mut self, first: usize, second: usize) {
        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.mark_matched();
            }
        }
        self.match_count += 1;
    }

    /// Turn both cards face down again.
    pub(crate) fn hide_pair(&mut self, first: usize, second: usize) {
        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.flip_down();
            }
        }
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Set the win flag if every pair is found. Returns true on the
    /// transition into the won state.
    pub(crate) fn settle_win(&mut self) -> bool {
        if !self.won && self.all_pairs_found() {
            self.won = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(SessionId::new(1), Deck::paired(&["a", "b"]))
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert_eq!(s.pair_count(), 2);
        assert_eq!(s.move_count(), 0);
        assert!(s.pending().is_empty());
        assert_eq!(s.legal_clicks(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_session_id() {
        let id = SessionId::new(4);
        assert_eq!(id.next(), SessionId::new(5));
        assert_eq!(format!("{}", id), "Session(4)");
    }

    #[test]
    fn test_flip_records_history() {
        let mut s = session();
        let record = s.flip(2, Millis::new(40));

        assert_eq!(record.index, 2);
        assert_eq!(record.move_number, 1);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.pending(), &[2]);
        assert_eq!(s.phase(), SessionPhase::InProgress);
        assert_eq!(s.check_click(2), Some(IgnoreReason::AlreadyFlipped));
    }

    #[test]
    fn test_check_click_reasons() {
        let mut s = session();
        assert_eq!(s.check_click(9), Some(IgnoreReason::OutOfRange));

        s.flip(0, Millis::ZERO);
        s.flip(1, Millis::ZERO);
        assert_eq!(s.check_click(3), Some(IgnoreReason::PairPending));
        assert!(s.legal_clicks().is_empty());

        s.mark_pair_matched(0, 2);
        assert_eq!(s.check_click(0), Some(IgnoreReason::AlreadyMatched));
    }

    #[test]
    fn test_settle_win_only_when_all_found() {
        let mut s = session();
        s.mark_pair_matched(0, 2);
        assert!(!s.settle_win());
        s.mark_pair_matched(1, 3);
        assert!(s.all_pairs_found());
        assert!(s.settle_win());
        assert!(!s.settle_win());
        assert_eq!(s.phase(), SessionPhase::Won);
    }

    #[test]
    fn test_clone_shares_history() {
        let mut s = session();
        s.flip(0, Millis::ZERO);
        let snapshot = s.clone();
        s.flip(1, Millis::new(5));
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(s.history().len(), 2);
    }
}
