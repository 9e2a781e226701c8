//! Automated click policies.
//!
//! A policy picks the next card to click from what a player could see.
//! Policies are trait-based so headless hosts can plug in their own:
//! - [`RandomPolicy`]: uniform over legal clicks
//! - [`MemoryPolicy`]: perfect recall of every revealed image
//!
//! [`play_out`] drives a controller to completion with a policy.

mod playout;

pub use playout::{play_out, PlayStats};

use rustc_hash::FxHashMap;

use crate::core::GameRng;
use crate::session::GameSession;

// =============================================================================
// Click Policy
// =============================================================================

/// Policy for choosing which card to click.
pub trait ClickPolicy {
    /// Short name, used by the bindings to select a policy.
    fn name(&self) -> &'static str;

    /// Pick a card to click. Returns `None` if no click is legal.
    fn choose(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<usize>;

    /// See the board after it changed. Called after every click and
    /// resolution.
    fn observe(&mut self, _session: &GameSession) {}

    /// Forget everything learned about the previous deck.
    fn reset(&mut self) {}
}

/// Look up a built-in policy by name (`"random"` or `"memory"`).
#[must_use]
pub fn policy_by_name(name: &str) -> Option<Box<dyn ClickPolicy>> {
    match name {
        "random" => Some(Box::new(RandomPolicy)),
        "memory" => Some(Box::new(MemoryPolicy::new())),
        _ => None,
    }
}

// =============================================================================
// Random Policy
// =============================================================================

/// Clicks a uniformly random legal card. Remembers nothing.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl ClickPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<usize> {
        let legal = session.legal_clicks();
        rng.choose(&legal).copied()
    }
}

// =============================================================================
// Memory Policy
// =============================================================================

/// Remembers the image behind every card it has seen face up.
///
/// - With one card pending, clicks its partner if the partner was seen.
/// - With none pending, starts a known pair if there is one.
/// - Otherwise turns a card it has never seen.
#[derive(Clone, Debug, Default)]
pub struct MemoryPolicy {
    /// Deck index to image, for cards seen but not yet matched.
    seen: FxHashMap<usize, String>,
}

impl MemoryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unmatched cards whose image is remembered.
    #[must_use]
    pub fn remembered(&self) -> usize {
        self.seen.len()
    }

    /// A legal card, other than `except`, remembered to show `image`.
    fn recall(&self, image: &str, except: usize, legal: &[usize]) -> Option<usize> {
        legal
            .iter()
            .copied()
            .find(|&i| i != except && self.seen.get(&i).is_some_and(|seen| seen == image))
    }

    /// First legal card whose partner is also remembered and legal.
    fn known_pair(&self, legal: &[usize]) -> Option<usize> {
        let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
        for &i in legal {
            let Some(image) = self.seen.get(&i) else {
                continue;
            };
            if let Some(&first) = first_seen.get(image.as_str()) {
                return Some(first);
            }
            first_seen.insert(image.as_str(), i);
        }
        None
    }
}

impl ClickPolicy for MemoryPolicy {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn choose(&mut self, session: &GameSession, rng: &mut GameRng) -> Option<usize> {
        let legal = session.legal_clicks();
        if legal.is_empty() {
            return None;
        }

        let planned = match session.pending() {
            [open] => session
                .card(*open)
                .and_then(|card| self.recall(&card.image, *open, &legal)),
            _ => self.known_pair(&legal),
        };
        if planned.is_some() {
            return planned;
        }

        let unseen: Vec<usize> = legal
            .iter()
            .copied()
            .filter(|i| !self.seen.contains_key(i))
            .collect();
        rng.choose(&unseen)
            .or_else(|| rng.choose(&legal))
            .copied()
    }

    fn observe(&mut self, session: &GameSession) {
        for (i, card) in session.deck().iter().enumerate() {
            if card.is_matched() {
                self.seen.remove(&i);
            } else if card.is_flipped() {
                self.seen.insert(i, card.image.clone());
            }
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}
