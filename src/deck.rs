use crate::card::Card;

/// French suits used by the standard 52-card deck.
pub const STANDARD_SUITS: [&str; 4] = ["♠", "♣", "♥", "♦"];

/// Values used by the standard 52-card deck.
pub const STANDARD_VALUES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Suits used by the 5°Dimension deck: the French suits plus Stars.
pub const EXTENDED_SUITS: [&str; 5] = ["♠", "♣", "♥", "♦", "★"];

/// Values used by the 5°Dimension deck. '1' is distinct from Ace, and
/// 'P' is the Princess.
pub const EXTENDED_VALUES: [&str; 16] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "P", "Q", "K", "A", "Joker",
];

/// Build a deck as the cross-product of a suit list and a value list.
///
/// Cards come out in suit-major order: each suit is paired with every
/// value before the next suit starts. Empty inputs yield an empty deck.
pub fn build_deck(suits: &[&str], values: &[&str]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(suits.len() * values.len());
    for suit in suits {
        for value in values {
            deck.push(Card::new(*suit, *value));
        }
    }
    deck
}

/// Build a standard western 52-card deck with French suits.
pub fn standard_deck() -> Vec<Card> {
    build_deck(&STANDARD_SUITS, &STANDARD_VALUES)
}

/// Build a 5°Dimension deck.
///
/// 5°Dimension has five suits and sixteen values per suit, including a
/// Princess, a '1' different from Ace, and a Joker for each suit, for
/// a total of 80 cards.
pub fn extended_deck() -> Vec<Card> {
    build_deck(&EXTENDED_SUITS, &EXTENDED_VALUES)
}
