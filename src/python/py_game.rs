//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardFace, GameConfig, Millis};
use crate::policy::{play_out, policy_by_name};
use crate::session::{ClickOutcome, GameController};
use crate::view::{AssetStatus, BoardView};

fn build_config(
    images: Option<Vec<String>>,
    seed: u64,
    match_delay_ms: u64,
    mismatch_delay_ms: u64,
) -> GameConfig {
    let config = match images {
        Some(images) => GameConfig::new(images),
        None => GameConfig::default(),
    };
    config
        .with_seed(seed)
        .with_match_delay(match_delay_ms)
        .with_mismatch_delay(mismatch_delay_ms)
}

fn outcome_name(outcome: &ClickOutcome) -> &'static str {
    match outcome {
        ClickOutcome::Ignored { .. } => "ignored",
        ClickOutcome::Flipped { .. } => "flipped",
        ClickOutcome::PairMatched { .. } => "match",
        ClickOutcome::PairMismatched { .. } => "mismatch",
    }
}

/// Python wrapper for a memory game.
///
/// Python has no host clock, so the wrapper keeps one: clicks happen at the
/// current time and `advance` moves it forward.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    controller: GameController,
    now: Millis,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - images: Image identifiers, one per pair (default: the four bundled images)
    /// - seed: RNG seed for deterministic decks
    /// - match_delay_ms: Delay before a found pair is settled
    /// - mismatch_delay_ms: Delay before a wrong pair is turned back down
    #[new]
    #[pyo3(signature = (
        images = None,
        seed = 42,
        match_delay_ms = 500,
        mismatch_delay_ms = 1000
    ))]
    fn new(
        images: Option<Vec<String>>,
        seed: u64,
        match_delay_ms: u64,
        mismatch_delay_ms: u64,
    ) -> PyResult<Self> {
        let config = build_config(images, seed, match_delay_ms, mismatch_delay_ms);
        let controller =
            GameController::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            controller,
            now: Millis::ZERO,
        })
    }

    /// Click a card. Returns "flipped", "match", "mismatch" or "ignored".
    fn click(&mut self, index: usize) -> &'static str {
        outcome_name(&self.controller.handle_card_click(index, self.now))
    }

    /// Move the clock forward and fire due resolutions.
    ///
    /// Returns the number of resolutions applied.
    #[pyo3(signature = (ms = 0))]
    fn advance(&mut self, ms: u64) -> usize {
        self.now = self.now.after(ms);
        self.controller.advance(self.now)
    }

    /// Jump the clock past every scheduled resolution.
    fn settle(&mut self) -> usize {
        let mut applied = 0;
        while let Some(due) = self.controller.next_deadline() {
            self.now = self.now.max(due);
            applied += self.controller.advance(self.now);
        }
        applied
    }

    /// Deal a new game, cancelling pending resolutions.
    fn new_game(&mut self) -> u64 {
        self.controller.start_new_game().raw()
    }

    /// Indices a click would currently be accepted on.
    fn legal_clicks(&self) -> Vec<usize> {
        self.controller.session().legal_clicks()
    }

    /// Render the board as a text grid.
    #[pyo3(signature = (columns = 4))]
    fn render(&self, columns: usize) -> String {
        BoardView::from_session(self.controller.session(), &AssetStatus::new()).to_text(columns)
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.controller.session().move_count()
    }

    #[getter]
    fn matches(&self) -> u32 {
        self.controller.session().match_count()
    }

    #[getter]
    fn pairs(&self) -> u32 {
        self.controller.session().pair_count()
    }

    #[getter]
    fn won(&self) -> bool {
        self.controller.session().won()
    }

    #[getter]
    fn pending(&self) -> Vec<usize> {
        self.controller.session().pending().to_vec()
    }

    /// Face state per card: "hidden", "flipped" or "matched".
    #[getter]
    fn faces(&self) -> Vec<&'static str> {
        self.controller
            .session()
            .deck()
            .iter()
            .map(|card| match card.face() {
                CardFace::Hidden => "hidden",
                CardFace::Flipped => "flipped",
                CardFace::Matched => "matched",
            })
            .collect()
    }

    /// Current time on the wrapper's clock, in milliseconds.
    #[getter]
    fn now(&self) -> u64 {
        self.now.raw()
    }

    #[getter]
    fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline().map(Millis::raw)
    }

    fn __repr__(&self) -> String {
        let session = self.controller.session();
        let status = if session.won() { "won" } else { "ongoing" };
        format!(
            "MemoryGame(moves={}, matches={}/{}, status={})",
            session.move_count(),
            session.match_count(),
            session.pair_count(),
            status
        )
    }
}

/// Play one game with a built-in policy ("random" or "memory").
///
/// Returns `(moves, won)`.
#[pyfunction]
#[pyo3(signature = (policy = "memory", seed = 42, images = None, max_clicks = 10_000))]
pub fn play_episode(
    policy: &str,
    seed: u64,
    images: Option<Vec<String>>,
    max_clicks: u32,
) -> PyResult<(u32, bool)> {
    let mut policy = policy_by_name(policy)
        .ok_or_else(|| PyValueError::new_err(format!("unknown policy {policy:?}")))?;
    let config = build_config(images, seed, 0, 0);
    let mut controller =
        GameController::immediate(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let stats = play_out(&mut controller, policy.as_mut(), 0, max_clicks);
    Ok((stats.moves, stats.won))
}
