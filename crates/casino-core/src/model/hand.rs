use crate::model::card::Card;

pub const BLACKJACK: u8 = 21;

/// Blackjack hand with an incrementally maintained total. Aces enter as 11
/// and are demoted to 1 one at a time while the total is over 21.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    soft_aces: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self::new();
        for card in cards {
            hand.add_card(card);
        }
        hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.total = self.total.saturating_add(card.value());
        if card.is_ace() {
            self.soft_aces += 1;
        }
        while self.total > BLACKJACK && self.soft_aces > 0 {
            self.total -= 10;
            self.soft_aces -= 1;
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
        self.soft_aces = 0;
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    /// True while at least one ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }

    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.total == BLACKJACK
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
