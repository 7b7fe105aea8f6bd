pub mod bankroll;
pub mod card;
pub mod deck;
pub mod hand;
pub mod rank;
pub mod suit;

pub use bankroll::{Bankroll, STARTING_STAKE};
pub use card::Card;
pub use deck::{DECK_SIZE, Deck};
pub use hand::{BLACKJACK, Hand};
pub use rank::Rank;
pub use suit::Suit;
