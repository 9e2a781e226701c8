//! Cards and their face state.
//!
//! A card carries two flags: `is_flipped` (face currently shown) and
//! `is_matched` (permanently resolved). `is_matched` always implies
//! `is_flipped`; the setters below keep that true.

use serde::{Deserialize, Serialize};

/// Card identifier, unique and stable within one game instance.
///
/// Ids are assigned from the paired image sequence before shuffling, so the
/// two copies of image `i` get ids `i` and `i + pairs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Visible state of a card.
///
/// `Hidden → Flipped → Matched` (terminal), or `Flipped → Hidden` after a
/// mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    Hidden,
    Flipped,
    Matched,
}

/// One card in the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    /// Identifier or URL of the pictured asset.
    pub image: String,
    is_flipped: bool,
    is_matched: bool,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
            is_flipped: false,
            is_matched: false,
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// True when the card shows its image.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_flipped || self.is_matched
    }

    /// Current visible state.
    #[must_use]
    pub fn face(&self) -> CardFace {
        if self.is_matched {
            CardFace::Matched
        } else if self.is_flipped {
            CardFace::Flipped
        } else {
            CardFace::Hidden
        }
    }

    /// Turn the card face up.
    pub fn flip_up(&mut self) {
        self.is_flipped = true;
    }

    /// Turn the card face down again. Matched cards stay up.
    pub fn flip_down(&mut self) {
        if !self.is_matched {
            self.is_flipped = false;
        }
    }

    /// Lock the card face up for the rest of the game.
    pub fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }

    /// Check whether two cards picture the same image.
    #[must_use]
    pub fn same_image(&self, other: &Card) -> bool {
        self.image == other.image
    }
}
