//! Click records.
//!
//! Every accepted click is recorded with the card it turned over, its move
//! number and the host time it happened at. The history lets a host replay
//! a game or show the order cards were revealed in.

use serde::{Deserialize, Serialize};

use super::card::CardId;
use super::time::Millis;

/// Record of one accepted click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Deck position that was clicked.
    pub index: usize,
    /// Card at that position.
    pub card: CardId,
    /// Move number after this click (first click is 1).
    pub move_number: u32,
    /// Host time of the click.
    pub at: Millis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_is_camel_case() {
        let record = ActionRecord {
            index: 3,
            card: CardId::new(1),
            move_number: 2,
            at: Millis::new(40),
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["moveNumber"], 2);
        assert_eq!(json["at"], 40);
        assert_eq!(json["card"], 1);
    }
}
