use crate::error::GameResult;
use crate::game::blackjack::{BlackjackOutcome, BlackjackRound, RoundProgress};
use crate::game::view::{BlackjackView, RouletteView};
use crate::model::bankroll::{Bankroll, STARTING_STAKE};
use crate::model::deck::Deck;
use crate::roulette::bet::BetDescriptor;
use crate::roulette::round::{RouletteRound, SpinProgress, SpinResult};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// A player's session: one bankroll shared by a blackjack table and a
/// roulette table.
#[derive(Debug, Clone)]
pub struct Casino {
    bankroll: Bankroll,
    blackjack: BlackjackRound,
    roulette: RouletteRound,
}

impl Casino {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_stake(seed, STARTING_STAKE)
    }

    pub fn with_stake(seed: u64, stake: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::with_seed(rng.next_u64());
        let roulette = RouletteRound::with_seed(rng.next_u64());
        tracing::debug!(target: "casino_core::casino", seed, stake, "session opened");
        Self {
            bankroll: Bankroll::with_stake(stake),
            blackjack: BlackjackRound::with_deck(deck),
            roulette,
        }
    }

    pub fn bankroll(&self) -> &Bankroll {
        &self.bankroll
    }

    pub fn balance(&self) -> u64 {
        self.bankroll.balance()
    }

    pub fn blackjack(&self) -> &BlackjackRound {
        &self.blackjack
    }

    pub fn roulette(&self) -> &RouletteRound {
        &self.roulette
    }

    pub fn blackjack_bet(&mut self, amount: u64) -> GameResult<()> {
        self.blackjack.place_bet(&self.bankroll, amount)
    }

    pub fn blackjack_deal(&mut self) -> GameResult<RoundProgress> {
        self.blackjack.deal(&mut self.bankroll)
    }

    pub fn blackjack_hit(&mut self) -> GameResult<RoundProgress> {
        self.blackjack.hit(&mut self.bankroll)
    }

    pub fn blackjack_stand(&mut self) -> GameResult<BlackjackOutcome> {
        self.blackjack.stand(&mut self.bankroll)
    }

    /// Returns whether forfeiting an open hand restocked the bankroll.
    pub fn blackjack_new_round(&mut self) -> bool {
        self.blackjack.new_round(&mut self.bankroll)
    }

    pub fn roulette_select_amount(&mut self, amount: u64) -> GameResult<()> {
        self.roulette.select_amount(&self.bankroll, amount)
    }

    /// Places `amount` on `descriptor`, or the selected amount when `None`.
    pub fn roulette_bet(
        &mut self,
        descriptor: BetDescriptor,
        amount: Option<u64>,
    ) -> GameResult<u64> {
        match amount {
            Some(amount) => self.roulette.place_bet(&mut self.bankroll, descriptor, amount),
            None => self.roulette.place_selected_bet(&mut self.bankroll, descriptor),
        }
    }

    pub fn roulette_clear(&mut self) -> GameResult<u64> {
        self.roulette.clear_bets(&mut self.bankroll)
    }

    pub fn roulette_spin(&mut self) -> GameResult<()> {
        self.roulette.spin()
    }

    pub fn roulette_step(&mut self) -> GameResult<SpinProgress> {
        self.roulette.step(&mut self.bankroll)
    }

    pub fn roulette_finish(&mut self) -> GameResult<SpinResult> {
        self.roulette.run_to_completion(&mut self.bankroll)
    }

    pub fn blackjack_view(&self) -> BlackjackView {
        BlackjackView::capture(&self.blackjack, &self.bankroll)
    }

    pub fn roulette_view(&self) -> RouletteView {
        RouletteView::capture(&self.roulette, &self.bankroll)
    }
}

impl Default for Casino {
    fn default() -> Self {
        Self::new()
    }
}
