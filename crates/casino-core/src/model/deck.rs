use crate::error::{GameError, GameResult};
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DECK_SIZE: usize = 52;

/// A single 52-card shoe. Cards are dealt from the back of the permuted
/// sequence, so the pile only shrinks until the next [`Deck::reset`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: StdRng::seed_from_u64(seed),
        };
        deck.reset();
        deck
    }

    /// Deck that deals `draw_order` front to back before running dry.
    /// A later [`Deck::reset`] restores a full shuffled deck.
    pub fn stacked(draw_order: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = draw_order.into_iter().collect();
        cards.reverse();
        Self {
            cards,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn standard_order() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    pub fn reset(&mut self) {
        self.cards = Self::standard_order();
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(target: "casino_core::deck", remaining = self.cards.len(), "deck reshuffled");
    }

    pub fn deal(&mut self) -> GameResult<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn value_of(card: Card) -> u8 {
        card.value()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, Deck};
    use crate::error::GameError;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use std::collections::HashSet;

    #[test]
    fn reset_produces_52_unique_cards() {
        let deck = Deck::with_seed(7);
        assert_eq!(deck.remaining(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::with_seed(42);
        let deck_b = Deck::with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::with_seed(1);
        let deck_b = Deck::with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn dealing_shrinks_until_empty() {
        let mut deck = Deck::with_seed(3);
        let mut seen = HashSet::new();
        for expected_left in (0..DECK_SIZE).rev() {
            let card = deck.deal().unwrap();
            assert!(seen.insert(card), "{card} dealt twice");
            assert_eq!(deck.remaining(), expected_left);
        }
        assert_eq!(deck.deal(), Err(GameError::EmptyDeck));

        deck.reset();
        assert_eq!(deck.remaining(), DECK_SIZE);
    }

    #[test]
    fn stacked_deck_deals_in_given_order() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let nine = Card::new(Rank::Nine, Suit::Hearts);
        let mut deck = Deck::stacked([ace, nine]);
        assert_eq!(deck.deal(), Ok(ace));
        assert_eq!(deck.deal(), Ok(nine));
        assert!(deck.is_empty());
    }

    #[test]
    fn value_of_uses_rank_table() {
        assert_eq!(Deck::value_of(Card::new(Rank::Queen, Suit::Clubs)), 10);
        assert_eq!(Deck::value_of(Card::new(Rank::Ace, Suit::Clubs)), 11);
        assert_eq!(Deck::value_of(Card::new(Rank::Five, Suit::Clubs)), 5);
    }
}
