//! Rendering of the whole board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::CardFace;
use crate::session::{GameSession, SessionId, SessionPhase};

use super::card::CardView;

/// Images the host reported as failing to load.
///
/// Failures are presentation state only: they change how a face-up card is
/// drawn, never the game.
#[derive(Clone, Debug, Default)]
pub struct AssetStatus {
    failed: FxHashSet<String>,
}

impl AssetStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load failure. Returns true if it was not known before.
    pub fn report_failure(&mut self, image: impl Into<String>) -> bool {
        self.failed.insert(image.into())
    }

    #[must_use]
    pub fn is_failed(&self, image: &str) -> bool {
        self.failed.contains(image)
    }

    /// Forget every failure, e.g. after the host reloads its assets.
    pub fn clear(&mut self) {
        self.failed.clear();
    }
}

/// Everything a host needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub session: SessionId,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matches: u32,
    /// Total pairs on the board.
    pub pairs: u32,
    pub won: bool,
    pub phase: SessionPhase,
    pub pending: Vec<usize>,
}

impl BoardView {
    /// Render every card of the session along with the counters.
    #[must_use]
    pub fn from_session(session: &GameSession, assets: &AssetStatus) -> Self {
        let cards = session
            .deck()
            .iter()
            .enumerate()
            .map(|(i, card)| CardView::render(i, card, assets.is_failed(&card.image)))
            .collect();
        Self {
            session: session.id(),
            cards,
            moves: session.move_count(),
            matches: session.match_count(),
            pairs: session.pair_count(),
            won: session.won(),
            phase: session.phase(),
            pending: session.pending().to_vec(),
        }
    }

    /// Status line, as shown above the board.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Moves: {}  Matches: {}/{}", self.moves, self.matches, self.pairs)
    }

    /// Render the board as a text grid with `columns` cards per row.
    ///
    /// Matched cards are marked with `*`. A win adds a final line.
    #[must_use]
    pub fn to_text(&self, columns: usize) -> String {
        let columns = columns.max(1);
        let labels: Vec<String> = self
            .cards
            .iter()
            .map(|view| {
                let mark = if view.state == CardFace::Matched { "*" } else { "" };
                format!("{}{}", view.face.label(), mark)
            })
            .collect();
        let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);

        let mut out = self.status_line();
        for row in labels.chunks(columns) {
            out.push('\n');
            let cells: Vec<String> = row
                .iter()
                .map(|label| format!("[{label:^width$}]"))
                .collect();
            out.push_str(&cells.join(" "));
        }
        if self.won {
            out.push_str(&format!("\nYou won in {} moves!", self.moves));
        }
        out
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text(4))
    }
}
