//! Deck construction.
//!
//! A deck holds exactly two copies of every configured image, in a uniformly
//! random order. Decks are never edited structurally during play: cards flip
//! in place, and a new game replaces the whole deck.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::rng::GameRng;

/// Ordered sequence of cards for one game instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck by pairing every image and shuffling the result.
    ///
    /// Card ids follow the paired sequence `[images..., images...]` before
    /// the shuffle.
    pub fn shuffled<S: AsRef<str>>(images: &[S], rng: &mut GameRng) -> Self {
        let mut deck = Self::paired(images);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build an unshuffled deck: every image, then every image again.
    ///
    /// Useful for tests that need known positions.
    pub fn paired<S: AsRef<str>>(images: &[S]) -> Self {
        let cards = images
            .iter()
            .chain(images.iter())
            .enumerate()
            .map(|(i, image)| Card::new(CardId::new(i as u32), image.as_ref()))
            .collect();
        Self { cards }
    }

    /// Build a deck from cards in a fixed order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs (distinct images) in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count copies of each image.
    #[must_use]
    pub fn image_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.image.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Check that the deck holds exactly two copies of each image in
    /// `images` and nothing else.
    #[must_use]
    pub fn is_paired_over<S: AsRef<str>>(&self, images: &[S]) -> bool {
        if self.cards.len() != images.len() * 2 {
            return false;
        }
        let counts = self.image_counts();
        counts.len() == images.len()
            && images
                .iter()
                .all(|image| counts.get(image.as_ref()) == Some(&2))
    }

    /// Indices of cards that are neither flipped nor matched.
    pub fn hidden_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| !card.is_face_up())
            .map(|(i, _)| i)
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl std::ops::IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}
