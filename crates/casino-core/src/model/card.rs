use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn value(self) -> u8 {
        self.rank.blackjack_value()
    }

    pub const fn is_ace(self) -> bool {
        self.rank.is_ace()
    }

    /// Asset key in the `"{rank}_of_{suit}"` form, e.g. `"queen_of_spades"`.
    pub fn asset_key(self) -> String {
        format!("{}_of_{}", self.rank.asset_name(), self.suit.asset_name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
