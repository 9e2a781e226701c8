//! Error types for game setup.
//!
//! Gameplay itself never fails: clicks the rules reject come back as
//! `ClickOutcome::Ignored`. Errors only arise when a configuration cannot
//! produce a valid deck.

/// Errors raised while validating a game configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// The image set is empty, so no deck can be built.
    EmptyImageSet,
    /// The same image appears twice in the image set.
    DuplicateImage { image: String },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::EmptyImageSet => write!(f, "image set is empty"),
            GameError::DuplicateImage { image } => {
                write!(f, "image {image:?} appears more than once in the image set")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type alias for game setup.
pub type GameResult<T> = Result<T, GameError>;
