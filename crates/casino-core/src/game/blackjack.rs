use crate::error::{GameError, GameResult};
use crate::model::bankroll::Bankroll;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::{BLACKJACK, Hand};
use serde::Serialize;

/// Dealer keeps drawing while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlackjackPhase {
    Idle,
    Betting,
    PlayerTurn,
    DealerTurn,
    Settled,
}

impl BlackjackPhase {
    pub const fn as_str(self) -> &'static str {
        match self {
            BlackjackPhase::Idle => "idle",
            BlackjackPhase::Betting => "betting",
            BlackjackPhase::PlayerTurn => "player_turn",
            BlackjackPhase::DealerTurn => "dealer_turn",
            BlackjackPhase::Settled => "settled",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(
            self,
            BlackjackPhase::Betting | BlackjackPhase::PlayerTurn | BlackjackPhase::DealerTurn
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlackjackResult {
    PlayerBust,
    DealerBust,
    Blackjack,
    PlayerWins,
    DealerWins,
    Push,
}

impl BlackjackResult {
    pub const fn message(self) -> &'static str {
        match self {
            BlackjackResult::PlayerBust => "Bust! You lose.",
            BlackjackResult::DealerBust => "Dealer busts! You win!",
            BlackjackResult::Blackjack => "Blackjack! You win!",
            BlackjackResult::PlayerWins => "You win!",
            BlackjackResult::DealerWins => "You lose.",
            BlackjackResult::Push => "Push!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlackjackOutcome {
    pub result: BlackjackResult,
    pub stake: u64,
    pub credited: u64,
    pub restocked: bool,
}

impl BlackjackOutcome {
    /// Net chip change for the round, stake included.
    pub fn net(&self) -> i128 {
        i128::from(self.credited) - i128::from(self.stake)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundProgress {
    PlayerTurn,
    Settled(BlackjackOutcome),
}

#[derive(Debug, Clone)]
pub struct BlackjackRound {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: u64,
    phase: BlackjackPhase,
    outcome: Option<BlackjackOutcome>,
}

impl BlackjackRound {
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_deck(Deck::with_seed(seed))
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            bet: 0,
            phase: BlackjackPhase::Idle,
            outcome: None,
        }
    }

    pub fn phase(&self) -> BlackjackPhase {
        self.phase
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn outcome(&self) -> Option<&BlackjackOutcome> {
        self.outcome.as_ref()
    }

    /// The dealer's first card stays face down until the player stands.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.phase == BlackjackPhase::PlayerTurn
    }

    /// Dealer cards as the player sees them; `None` marks the hole card.
    pub fn dealer_visible_cards(&self) -> Vec<Option<Card>> {
        let hidden = self.dealer_hole_hidden();
        self.dealer
            .iter()
            .enumerate()
            .map(|(idx, card)| (!(hidden && idx == 0)).then_some(*card))
            .collect()
    }

    pub fn place_bet(&mut self, bankroll: &Bankroll, amount: u64) -> GameResult<()> {
        if self.phase.is_active() {
            return Err(GameError::RoundInProgress);
        }
        if amount == 0 {
            return Err(GameError::NoBetAmountSelected);
        }
        bankroll.ensure_covers(amount)?;
        if self.phase == BlackjackPhase::Settled {
            self.reset_table();
        }

        self.bet = amount;
        self.phase = BlackjackPhase::Betting;
        tracing::debug!(target: "casino_core::blackjack", bet = amount, "bet placed");
        Ok(())
    }

    pub fn deal(&mut self, bankroll: &mut Bankroll) -> GameResult<RoundProgress> {
        self.expect_phase(BlackjackPhase::Betting, "deal")?;
        bankroll.place_bet(self.bet)?;

        for _ in 0..2 {
            Self::draw_into(&mut self.deck, &mut self.player);
            Self::draw_into(&mut self.deck, &mut self.dealer);
        }
        self.phase = BlackjackPhase::PlayerTurn;
        tracing::debug!(
            target: "casino_core::blackjack",
            player_total = self.player.total(),
            remaining = self.deck.remaining(),
            "initial cards dealt"
        );

        if self.player.total() == BLACKJACK {
            return self.stand(bankroll).map(RoundProgress::Settled);
        }
        Ok(RoundProgress::PlayerTurn)
    }

    pub fn hit(&mut self, bankroll: &mut Bankroll) -> GameResult<RoundProgress> {
        self.expect_phase(BlackjackPhase::PlayerTurn, "hit")?;
        let card = self.deck.deal()?;
        self.player.add_card(card);
        tracing::debug!(
            target: "casino_core::blackjack",
            card = %card,
            player_total = self.player.total(),
            "player hits"
        );

        if self.player.is_bust() {
            return Ok(RoundProgress::Settled(
                self.finish(bankroll, BlackjackResult::PlayerBust),
            ));
        }
        Ok(RoundProgress::PlayerTurn)
    }

    pub fn stand(&mut self, bankroll: &mut Bankroll) -> GameResult<BlackjackOutcome> {
        self.expect_phase(BlackjackPhase::PlayerTurn, "stand")?;
        self.phase = BlackjackPhase::DealerTurn;
        tracing::debug!(
            target: "casino_core::blackjack",
            dealer_total = self.dealer.total(),
            "hole card revealed"
        );

        while self.dealer.total() < DEALER_STANDS_ON {
            if !Self::draw_into(&mut self.deck, &mut self.dealer) {
                break;
            }
        }

        let result = self.determine_result();
        Ok(self.finish(bankroll, result))
    }

    /// Clears both hands and reshuffles. Calling this mid-round forfeits any
    /// stake already debited. Returns whether the bankroll was restocked.
    pub fn new_round(&mut self, bankroll: &mut Bankroll) -> bool {
        let mut restocked = false;
        if self.phase.is_active() {
            tracing::warn!(
                target: "casino_core::blackjack",
                phase = self.phase.as_str(),
                bet = self.bet,
                "abandoning round in progress"
            );
            if self.stake_debited() {
                bankroll.settle_loss(self.bet);
                restocked = bankroll.restock_if_broke();
            }
        }
        self.reset_table();
        restocked
    }

    fn stake_debited(&self) -> bool {
        matches!(
            self.phase,
            BlackjackPhase::PlayerTurn | BlackjackPhase::DealerTurn
        )
    }

    fn reset_table(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = 0;
        self.outcome = None;
        self.deck.reset();
        self.phase = BlackjackPhase::Idle;
    }

    fn determine_result(&self) -> BlackjackResult {
        let player = self.player.total();
        let dealer = self.dealer.total();
        if self.dealer.is_bust() {
            BlackjackResult::DealerBust
        } else if self.player.is_bust() {
            BlackjackResult::PlayerBust
        } else if self.player.is_natural() {
            BlackjackResult::Blackjack
        } else if player > dealer {
            BlackjackResult::PlayerWins
        } else if dealer > player {
            BlackjackResult::DealerWins
        } else {
            BlackjackResult::Push
        }
    }

    fn finish(&mut self, bankroll: &mut Bankroll, result: BlackjackResult) -> BlackjackOutcome {
        let stake = self.bet;
        let credited = match result {
            BlackjackResult::DealerBust | BlackjackResult::PlayerWins => {
                bankroll.settle_win(stake)
            }
            BlackjackResult::Blackjack => bankroll.settle_blackjack(stake),
            BlackjackResult::Push => bankroll.settle_push(stake),
            BlackjackResult::PlayerBust | BlackjackResult::DealerWins => {
                bankroll.settle_loss(stake)
            }
        };
        let restocked = bankroll.restock_if_broke();
        let outcome = BlackjackOutcome {
            result,
            stake,
            credited,
            restocked,
        };

        self.phase = BlackjackPhase::Settled;
        self.outcome = Some(outcome);
        tracing::info!(
            target: "casino_core::blackjack",
            result = ?result,
            player_total = self.player.total(),
            dealer_total = self.dealer.total(),
            stake,
            credited,
            balance = bankroll.balance(),
            "round settled"
        );
        outcome
    }

    fn draw_into(deck: &mut Deck, hand: &mut Hand) -> bool {
        match deck.deal() {
            Ok(card) => {
                hand.add_card(card);
                true
            }
            Err(_) => {
                tracing::warn!(target: "casino_core::blackjack", "deck exhausted mid-round");
                false
            }
        }
    }

    fn expect_phase(&self, expected: BlackjackPhase, action: &'static str) -> GameResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidAction {
                action,
                phase: self.phase.as_str(),
            })
        }
    }
}

impl Default for BlackjackRound {
    fn default() -> Self {
        Self::new()
    }
}
