//! The game state controller.
//!
//! `GameController` owns the current session, the RNG that deals decks and
//! the resolution system that settles completed pairs. Its three entry
//! points are the only ways game state changes:
//!
//! - [`start_new_game`](GameController::start_new_game)
//! - [`handle_card_click`](GameController::handle_card_click)
//! - [`advance`](GameController::advance) (host clock tick)
//!
//! ```
//! use picmatch::core::{GameConfig, Millis};
//! use picmatch::session::{ClickOutcome, GameController};
//!
//! let config = GameConfig::new(["a", "b"]).with_seed(42);
//! let mut game = GameController::new(config).unwrap();
//!
//! let outcome = game.handle_card_click(0, Millis::new(0));
//! assert!(matches!(outcome, ClickOutcome::Flipped { index: 0 }));
//! assert_eq!(game.session().move_count(), 1);
//!
//! // Clicking the same card again is ignored.
//! assert!(!game.handle_card_click(0, Millis::new(10)).is_accepted());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Deck, GameConfig, GameResult, GameRng, Millis};
use crate::resolution::{
    DelayedResolution, ImmediateResolution, PendingResolution, ResolutionKind, ResolutionSystem,
};

use super::event::GameEvent;
use super::state::{GameSession, IgnoreReason, SessionId};

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored { reason: IgnoreReason },
    /// First card of a pair turned up.
    Flipped { index: usize },
    /// Second card turned up and matched the first.
    PairMatched { first: usize, second: usize },
    /// Second card turned up and did not match.
    PairMismatched { first: usize, second: usize },
}

impl ClickOutcome {
    /// True if the click changed the game.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored { .. })
    }
}

/// Game state controller.
pub struct GameController<R: ResolutionSystem = DelayedResolution> {
    config: GameConfig,
    rng: GameRng,
    session: GameSession,
    resolver: R,
    events: Vec<GameEvent>,
}

impl GameController<DelayedResolution> {
    /// Create a controller that resolves pairs after the configured delays.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let resolver = DelayedResolution::from_config(&config);
        Self::with_resolver(config, resolver)
    }
}

impl GameController<ImmediateResolution> {
    /// Create a controller that resolves every pair as soon as it is
    /// completed.
    pub fn immediate(config: GameConfig) -> GameResult<Self> {
        Self::with_resolver(config, ImmediateResolution::new())
    }
}

impl<R: ResolutionSystem> GameController<R> {
    /// Create a controller with a custom resolution system and deal the
    /// first game.
    pub fn with_resolver(config: GameConfig, resolver: R) -> GameResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::debug!("Dealing with seed {}", rng.seed());

        let deck = Deck::shuffled(&config.images, &mut rng);
        let session = GameSession::new(SessionId::new(1), deck);
        let mut controller = Self {
            config,
            rng,
            session,
            resolver,
            events: Vec::new(),
        };
        controller.announce_new_game();
        Ok(controller)
    }

    /// Deal a fresh deck and reset every counter.
    ///
    /// Outstanding resolutions from the previous game are cancelled.
    pub fn start_new_game(&mut self) -> SessionId {
        self.resolver.clear();
        let id = self.session.id().next();
        let deck = Deck::shuffled(&self.config.images, &mut self.rng);
        self.session = GameSession::new(id, deck);
        self.announce_new_game();
        id
    }

    /// Handle a click on the card at `index`.
    ///
    /// Resolutions already due at `now` are applied first, so a host that
    /// polls late still sees the board it would have seen with a precise
    /// timer. Clicks on face-up cards, and any click while two cards are
    /// pending, are ignored.
    pub fn handle_card_click(&mut self, index: usize, now: Millis) -> ClickOutcome {
        self.advance(now);

        if let Some(reason) = self.session.check_click(index) {
            if reason == IgnoreReason::OutOfRange {
                log::warn!(
                    "Click on index {index} outside a deck of {} cards",
                    self.session.deck().len()
                );
            }
            return ClickOutcome::Ignored { reason };
        }

        let record = self.session.flip(index, now);
        log::debug!("Move {}: flipped card {index} ({})", record.move_number, record.card);
        self.events.push(GameEvent::CardFlipped {
            index,
            card: record.card,
            moves: record.move_number,
        });

        let pair = match self.session.pending() {
            &[first, second] => Some((first, second)),
            _ => None,
        };
        let outcome = match pair {
            Some((first, second)) => self.complete_pair(first, second, now),
            None => ClickOutcome::Flipped { index },
        };

        // Zero delays and immediate resolution settle within the click.
        self.advance(now);
        outcome
    }

    /// Apply every resolution due at `now`. Returns how many were applied.
    pub fn advance(&mut self, now: Millis) -> usize {
        let due = self.resolver.take_due(now);
        due.into_iter()
            .filter(|task| self.apply_resolution(task))
            .count()
    }

    /// Earliest time a scheduled resolution becomes due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.resolver.next_due()
    }

    /// True when no resolution is outstanding.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.resolver.is_idle()
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Mutable access for resolution systems driven from outside.
    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// The dealing RNG. Automated players fork their own stream from it.
    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    // === Internals ===

    fn announce_new_game(&mut self) {
        log::info!(
            "New game {} with {} cards",
            self.session.id(),
            self.session.deck().len()
        );
        self.events.push(GameEvent::NewGame {
            session: self.session.id(),
            card_count: self.session.deck().len(),
        });
    }

    fn complete_pair(&mut self, first: usize, second: usize, now: Millis) -> ClickOutcome {
        let matched = self.session.deck()[first].same_image(&self.session.deck()[second]);

        let (kind, outcome) = if matched {
            self.session.mark_pair_matched(first, second);
            log::debug!(
                "Pair {first}/{second} matched ({}/{})",
                self.session.match_count(),
                self.session.pair_count()
            );
            self.events.push(GameEvent::PairMatched {
                first,
                second,
                matches: self.session.match_count(),
            });
            (
                ResolutionKind::Match { first, second },
                ClickOutcome::PairMatched { first, second },
            )
        } else {
            log::debug!("Pair {first}/{second} mismatched");
            self.events.push(GameEvent::PairMismatched { first, second });
            (
                ResolutionKind::Mismatch { first, second },
                ClickOutcome::PairMismatched { first, second },
            )
        };

        self.resolver.schedule(PendingResolution {
            session: self.session.id(),
            kind,
            scheduled_at: now,
        });
        outcome
    }

    /// Apply one resolution. Returns false if it belonged to another game.
    fn apply_resolution(&mut self, task: &PendingResolution) -> bool {
        if task.session != self.session.id() {
            log::warn!(
                "Dropping resolution from {} during {}",
                task.session,
                self.session.id()
            );
            return false;
        }

        log::trace!("Resolving {:?}", task.kind);
        match task.kind {
            ResolutionKind::Match { first, second } => {
                self.session.clear_pending();
                self.events.push(GameEvent::PairCleared { first, second });
                if self.session.settle_win() {
                    let moves = self.session.move_count();
                    log::info!("{} won in {moves} moves", self.session.id());
                    self.events.push(GameEvent::GameWon { moves });
                }
            }
            ResolutionKind::Mismatch { first, second } => {
                self.session.hide_pair(first, second);
                self.session.clear_pending();
                self.events.push(GameEvent::PairHidden { first, second });
            }
        }
        true
    }
}
