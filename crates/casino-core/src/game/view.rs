use crate::game::blackjack::{BlackjackOutcome, BlackjackPhase, BlackjackRound};
use crate::model::bankroll::Bankroll;
use crate::model::card::Card;
use crate::roulette::round::{RouletteRound, SpinResult};
use serde::Serialize;

/// What a blackjack front end may show. The dealer's hole card and total
/// are masked while the player is still acting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlackjackView {
    pub phase: BlackjackPhase,
    pub balance: u64,
    pub bet: u64,
    pub player_cards: Vec<Card>,
    pub player_total: u8,
    pub dealer_cards: Vec<Option<Card>>,
    pub dealer_total: Option<u8>,
    pub outcome: Option<BlackjackOutcome>,
    pub message: Option<String>,
}

impl BlackjackView {
    pub fn capture(round: &BlackjackRound, bankroll: &Bankroll) -> Self {
        let dealer_total = (!round.dealer_hole_hidden()).then(|| round.dealer_hand().total());
        let outcome = round.outcome().copied();
        BlackjackView {
            phase: round.phase(),
            balance: bankroll.balance(),
            bet: round.bet(),
            player_cards: round.player_hand().cards().to_vec(),
            player_total: round.player_hand().total(),
            dealer_cards: round.dealer_visible_cards(),
            dealer_total,
            outcome,
            message: outcome.map(|o| o.result.message().to_string()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetView {
    pub bet: String,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouletteView {
    pub phase: &'static str,
    pub balance: u64,
    pub selected_amount: u64,
    pub bets: Vec<BetView>,
    pub total_staked: u64,
    pub wheel_angle: f64,
    pub ball_angle: f64,
    pub ticks: u32,
    pub last_result: Option<SpinResult>,
    pub message: Option<String>,
}

impl RouletteView {
    pub fn capture(round: &RouletteRound, bankroll: &Bankroll) -> Self {
        let bets = round
            .bets()
            .iter()
            .map(|(descriptor, &amount)| BetView {
                bet: descriptor.to_string(),
                amount,
            })
            .collect();
        let wheel = round.wheel();
        let last_result = round.last_result();
        RouletteView {
            phase: round.phase().as_str(),
            balance: bankroll.balance(),
            selected_amount: round.selected_amount(),
            bets,
            total_staked: round.total_staked(),
            wheel_angle: wheel.wheel_angle(),
            ball_angle: wheel.ball_angle(),
            ticks: wheel.ticks(),
            last_result,
            message: last_result.map(|r| r.message()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{BlackjackView, RouletteView};
    use crate::game::blackjack::{BlackjackPhase, BlackjackRound, RoundProgress};
    use crate::model::bankroll::Bankroll;
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::roulette::bet::BetDescriptor;
    use crate::roulette::round::RouletteRound;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn hole_card_masked_during_player_turn() {
        let deck = Deck::stacked(vec![
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ]);
        let mut bankroll = Bankroll::new();
        let mut round = BlackjackRound::with_deck(deck);
        round.place_bet(&bankroll, 100).unwrap();
        assert_eq!(round.deal(&mut bankroll).unwrap(), RoundProgress::PlayerTurn);

        let view = BlackjackView::capture(&round, &bankroll);
        assert_eq!(view.phase, BlackjackPhase::PlayerTurn);
        assert_eq!(view.balance, 900);
        assert_eq!(view.player_total, 16);
        assert_eq!(view.dealer_cards, vec![None, Some(card(Rank::Seven, Suit::Diamonds))]);
        assert_eq!(view.dealer_total, None);
        assert!(view.message.is_none());

        let json = view.to_json().unwrap();
        assert!(json.contains("\"phase\":\"player_turn\""));
        assert!(json.contains("\"dealer_total\":null"));
        assert!(!json.contains("queen"));
    }

    #[test]
    fn settled_view_reveals_dealer_and_message() {
        let deck = Deck::stacked(vec![
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ]);
        let mut bankroll = Bankroll::new();
        let mut round = BlackjackRound::with_deck(deck);
        round.place_bet(&bankroll, 100).unwrap();
        round.deal(&mut bankroll).unwrap();
        round.stand(&mut bankroll).unwrap();

        let view = BlackjackView::capture(&round, &bankroll);
        assert_eq!(view.dealer_total, Some(17));
        assert!(view.dealer_cards.iter().all(Option::is_some));
        assert_eq!(view.message.as_deref(), Some("You win!"));
        assert_eq!(view.balance, 1100);
    }

    #[test]
    fn roulette_view_lists_bets_and_result() {
        let mut bankroll = Bankroll::new();
        let mut round = RouletteRound::with_seed(4);
        round.place_bet(&mut bankroll, BetDescriptor::Number(17), 50).unwrap();
        round.place_bet(&mut bankroll, "red".parse().unwrap(), 20).unwrap();

        let view = RouletteView::capture(&round, &bankroll);
        assert_eq!(view.phase, "idle");
        assert_eq!(view.total_staked, 70);
        let labels: Vec<&str> = view.bets.iter().map(|b| b.bet.as_str()).collect();
        assert_eq!(labels, ["red", "number_17"]);

        round.spin().unwrap();
        let result = round.run_to_completion(&mut bankroll).unwrap();
        let view = RouletteView::capture(&round, &bankroll);
        assert_eq!(view.phase, "result");
        assert!(view.bets.is_empty());
        assert_eq!(view.last_result, Some(result));
        assert_eq!(view.message, Some(result.message()));
        assert!(view.to_json().unwrap().contains("\"last_result\":{\"number\":"));
    }
}
