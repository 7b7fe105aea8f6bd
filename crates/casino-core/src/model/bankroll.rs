use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};

pub const STARTING_STAKE: u64 = 1000;

/// Chip balance shared by every table the player sits at. Stakes are
/// debited when placed and stay in play until a settlement releases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: u64,
    in_play: u64,
    starting_stake: u64,
}

impl Bankroll {
    pub const fn new() -> Self {
        Self::with_stake(STARTING_STAKE)
    }

    pub const fn with_stake(stake: u64) -> Self {
        Self {
            balance: stake,
            in_play: 0,
            starting_stake: stake,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Chips staked on any table and not yet settled.
    pub fn in_play(&self) -> u64 {
        self.in_play
    }

    pub fn starting_stake(&self) -> u64 {
        self.starting_stake
    }

    pub fn can_cover(&self, amount: u64) -> bool {
        amount <= self.balance
    }

    pub fn ensure_covers(&self, amount: u64) -> GameResult<()> {
        if self.can_cover(amount) {
            Ok(())
        } else {
            Err(GameError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })
        }
    }

    pub fn place_bet(&mut self, amount: u64) -> GameResult<()> {
        self.ensure_covers(amount)?;
        self.balance -= amount;
        self.in_play = self.in_play.saturating_add(amount);
        Ok(())
    }

    /// Takes `stake` out of play and credits `payout`. Returns the payout.
    pub fn settle(&mut self, stake: u64, payout: u64) -> u64 {
        self.in_play = self.in_play.saturating_sub(stake);
        self.balance = self.balance.saturating_add(payout);
        payout
    }

    /// Stake back plus an even-money win.
    pub fn settle_win(&mut self, amount: u64) -> u64 {
        self.settle(amount, amount.saturating_mul(2))
    }

    pub fn settle_push(&mut self, amount: u64) -> u64 {
        self.settle(amount, amount)
    }

    /// Stake back plus 3:2, rounded down to whole chips.
    pub fn settle_blackjack(&mut self, amount: u64) -> u64 {
        self.settle(amount, amount.saturating_mul(5) / 2)
    }

    pub fn settle_loss(&mut self, amount: u64) -> u64 {
        self.settle(amount, 0)
    }

    /// Refills the bankroll to the starting stake once it is empty and no
    /// stake is left on any table. Returns whether the house restocked.
    pub fn restock_if_broke(&mut self) -> bool {
        if self.balance > 0 || self.in_play > 0 {
            return false;
        }
        self.balance = self.starting_stake;
        tracing::info!(
            target: "casino_core::bankroll",
            balance = self.balance,
            "bankroll empty; restocked to starting stake"
        );
        true
    }
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bankroll, STARTING_STAKE};
    use crate::error::GameError;

    #[test]
    fn bet_over_balance_is_rejected_without_change() {
        let mut bankroll = Bankroll::new();
        let err = bankroll.place_bet(STARTING_STAKE + 1).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                requested: 1001,
                available: 1000
            }
        );
        assert_eq!(bankroll.balance(), STARTING_STAKE);
    }

    #[test]
    fn settlements_credit_expected_multiples() {
        let mut bankroll = Bankroll::new();
        bankroll.place_bet(100).unwrap();
        assert_eq!(bankroll.balance(), 900);
        assert_eq!(bankroll.settle_win(100), 200);
        assert_eq!(bankroll.balance(), 1100);

        bankroll.place_bet(100).unwrap();
        assert_eq!(bankroll.settle_push(100), 100);
        assert_eq!(bankroll.balance(), 1100);

        bankroll.place_bet(100).unwrap();
        assert_eq!(bankroll.settle_blackjack(100), 250);
        assert_eq!(bankroll.balance(), 1250);
    }

    #[test]
    fn blackjack_payout_truncates_odd_stakes() {
        let mut bankroll = Bankroll::with_stake(5);
        bankroll.place_bet(5).unwrap();
        assert_eq!(bankroll.settle_blackjack(5), 12);
        assert_eq!(bankroll.balance(), 12);
    }

    #[test]
    fn restock_only_when_empty() {
        let mut bankroll = Bankroll::with_stake(50);
        assert!(!bankroll.restock_if_broke());
        bankroll.place_bet(50).unwrap();
        assert_eq!(bankroll.balance(), 0);
        assert!(!bankroll.restock_if_broke());
        bankroll.settle_loss(50);
        assert!(bankroll.restock_if_broke());
        assert_eq!(bankroll.balance(), 50);
    }

    #[test]
    fn no_restock_while_another_stake_is_open() {
        let mut bankroll = Bankroll::with_stake(100);
        bankroll.place_bet(50).unwrap();
        bankroll.place_bet(50).unwrap();
        assert_eq!(bankroll.in_play(), 100);

        assert_eq!(bankroll.settle_loss(50), 0);
        assert!(!bankroll.restock_if_broke());
        assert_eq!(bankroll.balance(), 0);

        assert_eq!(bankroll.settle_push(50), 50);
        assert!(!bankroll.restock_if_broke());
        assert_eq!(bankroll.balance(), 50);
        assert_eq!(bankroll.in_play(), 0);
    }

    #[test]
    fn settlements_release_stakes() {
        let mut bankroll = Bankroll::new();
        bankroll.place_bet(100).unwrap();
        bankroll.place_bet(30).unwrap();
        bankroll.settle_win(100);
        assert_eq!(bankroll.in_play(), 30);
        bankroll.settle(30, 1080);
        assert_eq!(bankroll.in_play(), 0);
        assert_eq!(bankroll.balance(), 870 + 200 + 1080);
    }
}
