use serde::{Deserialize, Serialize};
use std::fmt;

/// A single playing card: a suit paired with a value.
///
/// Cards have no identity beyond their fields; two cards with the same
/// suit and value compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: String,
    pub value: String,
}

impl Card {
    /// Create a new card from a suit and a value.
    pub fn new(suit: impl Into<String>, value: impl Into<String>) -> Self {
        Card {
            suit: suit.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.value)
    }
}
