pub mod card;
pub mod deck;
pub mod rng;

pub use card::Card;
pub use deck::{build_deck, extended_deck, standard_deck};
pub use rng::DeckRng;
