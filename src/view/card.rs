//! Rendering of a single card.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardFace, CardId};

/// Label shown on a face-down card.
pub const PLACEHOLDER_LABEL: &str = "?";

/// Label shown when a card's image failed to load.
pub const FALLBACK_LABEL: &str = "❌";

/// What the visible side of a card shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Face {
    /// Face down: the question-mark side, no image.
    Placeholder,
    /// Face up with the card's image.
    Image { src: String },
    /// Face up, but the image could not be loaded.
    Fallback,
}

impl Face {
    /// Short label for text rendering.
    ///
    /// Images are labelled by file stem, so `/images/hat.png` reads `hat`.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Face::Placeholder => PLACEHOLDER_LABEL,
            Face::Fallback => FALLBACK_LABEL,
            Face::Image { src } => {
                let name = src.rsplit('/').next().unwrap_or(src.as_str());
                match name.rsplit_once('.') {
                    Some((stem, _)) if !stem.is_empty() => stem,
                    _ => name,
                }
            }
        }
    }
}

/// Presentation of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    /// Position in the deck; clicks are addressed by it.
    pub index: usize,
    pub id: CardId,
    pub state: CardFace,
    pub face: Face,
}

impl CardView {
    /// Render a card. Pure: the card is only read.
    #[must_use]
    pub fn render(index: usize, card: &Card, asset_failed: bool) -> Self {
        let face = if !card.is_face_up() {
            Face::Placeholder
        } else if asset_failed {
            Face::Fallback
        } else {
            Face::Image {
                src: card.image.clone(),
            }
        };
        Self {
            index,
            id: card.id,
            state: card.face(),
            face,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_card_shows_placeholder() {
        let card = Card::new(CardId::new(0), "/images/hat.png");
        let view = CardView::render(3, &card, false);
        assert_eq!(view.face, Face::Placeholder);
        assert_eq!(view.state, CardFace::Hidden);

        // A failed asset is irrelevant while face down.
        assert_eq!(CardView::render(3, &card, true).face, Face::Placeholder);
    }

    #[test]
    fn test_face_up_card_shows_image() {
        let mut card = Card::new(CardId::new(1), "/images/hat.png");
        card.flip_up();
        let view = CardView::render(0, &card, false);
        assert_eq!(
            view.face,
            Face::Image {
                src: "/images/hat.png".to_string()
            }
        );

        card.mark_matched();
        let view = CardView::render(0, &card, false);
        assert_eq!(view.state, CardFace::Matched);
    }

    #[test]
    fn test_failed_asset_shows_fallback() {
        let mut card = Card::new(CardId::new(1), "/images/lamp.jpeg");
        card.flip_up();
        let view = CardView::render(0, &card, true);
        assert_eq!(view.face, Face::Fallback);
        // Game state is untouched.
        assert!(card.is_flipped());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Face::Placeholder.label(), "?");
        assert_eq!(Face::Fallback.label(), "❌");
        let face = Face::Image {
            src: "/images/boots.jpeg".into(),
        };
        assert_eq!(face.label(), "boots");
        let face = Face::Image { src: "sun".into() };
        assert_eq!(face.label(), "sun");
    }

    #[test]
    fn test_face_serde() {
        let json = serde_json::to_string(&Face::Image { src: "a.png".into() }).unwrap();
        assert_eq!(json, r#"{"kind":"image","src":"a.png"}"#);
        let json = serde_json::to_string(&Face::Placeholder).unwrap();
        assert_eq!(json, r#"{"kind":"placeholder"}"#);
    }
}
