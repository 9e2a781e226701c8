//! Presentation layer.
//!
//! Views are computed from a session on demand and never feed back into
//! it. The only presentation state is [`AssetStatus`], which tracks images
//! the host could not load so their cards show a fallback face.

mod board;
mod card;

pub use board::{AssetStatus, BoardView};
pub use card::{CardView, Face, FALLBACK_LABEL, PLACEHOLDER_LABEL};
