//! Game configuration.
//!
//! A `GameConfig` fixes the image set (and therefore the deck size), the two
//! resolution delays and an optional RNG seed. It can be built in code with
//! the `with_*` methods or deserialized from JSON; missing fields take the
//! defaults below.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Delay before a matched pair is cleared from the pending flips.
pub const DEFAULT_MATCH_DELAY_MS: u64 = 500;

/// Delay before a mismatched pair flips back down.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// The stock image set served alongside the web page.
pub const DEFAULT_IMAGES: [&str; 4] = [
    "/images/boots.jpeg",
    "/images/hat.png",
    "/images/lamp.jpeg",
    "/images/lunch.png",
];

fn default_images() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

fn default_match_delay() -> u64 {
    DEFAULT_MATCH_DELAY_MS
}

fn default_mismatch_delay() -> u64 {
    DEFAULT_MISMATCH_DELAY_MS
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Distinct images; the deck holds two cards per image.
    #[serde(default = "default_images")]
    pub images: Vec<String>,

    /// Milliseconds between the second card of a match and clearing it.
    #[serde(default = "default_match_delay")]
    pub match_delay_ms: u64,

    /// Milliseconds a mismatched pair stays visible.
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay_ms: u64,

    /// RNG seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            match_delay_ms: DEFAULT_MATCH_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration over the given images with default delays.
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the match resolution delay.
    #[must_use]
    pub fn with_match_delay(mut self, ms: u64) -> Self {
        self.match_delay_ms = ms;
        self
    }

    /// Set the mismatch resolution delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Number of pairs in every deck built from this config.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.images.len()
    }

    /// Number of cards in every deck built from this config.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.images.len() * 2
    }

    /// Check the image set can form a deck.
    pub fn validate(&self) -> GameResult<()> {
        if self.images.is_empty() {
            return Err(GameError::EmptyImageSet);
        }
        let mut seen = FxHashSet::default();
        for image in &self.images {
            if !seen.insert(image.as_str()) {
                return Err(GameError::DuplicateImage {
                    image: image.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count(), 4);
        assert_eq!(config.deck_size(), 8);
        assert_eq!(config.match_delay_ms, 500);
        assert_eq!(config.mismatch_delay_ms, 1000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(["a", "b"])
            .with_seed(7)
            .with_match_delay(10)
            .with_mismatch_delay(20);

        assert_eq!(config.images, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.match_delay_ms, 10);
        assert_eq!(config.mismatch_delay_ms, 20);
    }

    #[test]
    fn test_validate_empty() {
        let config = GameConfig::new(Vec::<String>::new());
        assert_eq!(config.validate(), Err(GameError::EmptyImageSet));
    }

    #[test]
    fn test_validate_duplicate() {
        let config = GameConfig::new(["a", "b", "a"]);
        assert_eq!(
            config.validate(),
            Err(GameError::DuplicateImage {
                image: "a".to_string()
            })
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"images": ["x", "y"], "seed": 3}"#).unwrap();
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.match_delay_ms, DEFAULT_MATCH_DELAY_MS);
        assert_eq!(config.mismatch_delay_ms, DEFAULT_MISMATCH_DELAY_MS);

        let config: GameConfig = serde_json::from_str(r#"{"mismatchDelayMs": 250}"#).unwrap();
        assert_eq!(config.images.len(), DEFAULT_IMAGES.len());
        assert_eq!(config.mismatch_delay_ms, 250);
    }
}
