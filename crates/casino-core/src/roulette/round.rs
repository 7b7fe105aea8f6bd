use crate::error::{GameError, GameResult};
use crate::model::bankroll::Bankroll;
use crate::roulette::bet::{BetDescriptor, total_payout};
use crate::roulette::wheel::{PocketColor, WheelState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpinResult {
    pub number: u8,
    pub color: PocketColor,
    pub staked: u64,
    pub winnings: u64,
    pub restocked: bool,
}

impl SpinResult {
    pub fn message(&self) -> String {
        if self.winnings > 0 {
            format!("You won {} chips!", self.winnings)
        } else {
            "You lost!".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoulettePhase {
    Idle,
    Spinning,
    Result(SpinResult),
}

impl RoulettePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoulettePhase::Idle => "idle",
            RoulettePhase::Spinning => "spinning",
            RoulettePhase::Result(_) => "result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinProgress {
    Spinning { ticks: u32 },
    Finished(SpinResult),
}

/// One roulette table. Bets are only accepted while idle; a finished spin
/// reopens the table on the next command.
#[derive(Debug, Clone)]
pub struct RouletteRound {
    bets: BTreeMap<BetDescriptor, u64>,
    selected_amount: u64,
    wheel: WheelState,
    phase: RoulettePhase,
    rng: StdRng,
}

impl RouletteRound {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            bets: BTreeMap::new(),
            selected_amount: 0,
            wheel: WheelState::new(),
            phase: RoulettePhase::Idle,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> RoulettePhase {
        self.phase
    }

    pub fn bets(&self) -> &BTreeMap<BetDescriptor, u64> {
        &self.bets
    }

    pub fn total_staked(&self) -> u64 {
        self.bets.values().sum()
    }

    pub fn selected_amount(&self) -> u64 {
        self.selected_amount
    }

    pub fn wheel(&self) -> &WheelState {
        &self.wheel
    }

    pub fn last_result(&self) -> Option<SpinResult> {
        match self.phase {
            RoulettePhase::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Chooses the chip amount used by [`RouletteRound::place_selected_bet`].
    pub fn select_amount(&mut self, bankroll: &Bankroll, amount: u64) -> GameResult<()> {
        bankroll.ensure_covers(amount)?;
        self.selected_amount = amount;
        Ok(())
    }

    pub fn place_bet(
        &mut self,
        bankroll: &mut Bankroll,
        descriptor: BetDescriptor,
        amount: u64,
    ) -> GameResult<u64> {
        self.reopen_if_finished()?;
        if amount == 0 {
            return Err(GameError::NoBetAmountSelected);
        }
        bankroll.place_bet(amount)?;

        let stake = self.bets.entry(descriptor).or_insert(0);
        *stake += amount;
        tracing::debug!(
            target: "casino_core::roulette",
            bet = %descriptor,
            amount,
            stake = *stake,
            "bet accepted"
        );
        Ok(*stake)
    }

    pub fn place_selected_bet(
        &mut self,
        bankroll: &mut Bankroll,
        descriptor: BetDescriptor,
    ) -> GameResult<u64> {
        let amount = self.selected_amount;
        self.place_bet(bankroll, descriptor, amount)
    }

    /// Refunds every stake of the current spin. Returns the refunded total.
    pub fn clear_bets(&mut self, bankroll: &mut Bankroll) -> GameResult<u64> {
        self.reopen_if_finished()?;
        let refunded = self.total_staked();
        bankroll.settle_push(refunded);
        self.bets.clear();
        self.selected_amount = 0;
        tracing::debug!(target: "casino_core::roulette", refunded, "bets cleared");
        Ok(refunded)
    }

    pub fn spin(&mut self) -> GameResult<()> {
        self.reopen_if_finished()?;
        if self.bets.is_empty() {
            return Err(GameError::NoBetsPlaced);
        }
        self.wheel.launch_random(&mut self.rng);
        self.phase = RoulettePhase::Spinning;
        tracing::debug!(
            target: "casino_core::roulette",
            wheel_speed = self.wheel.wheel_speed(),
            ball_speed = self.wheel.ball_speed(),
            staked = self.total_staked(),
            "wheel launched"
        );
        Ok(())
    }

    /// Advances the spin by one tick. Meant to be driven by an external
    /// timer every [`crate::roulette::wheel::TICK_INTERVAL`].
    pub fn step(&mut self, bankroll: &mut Bankroll) -> GameResult<SpinProgress> {
        if self.phase != RoulettePhase::Spinning {
            return Err(GameError::NotSpinning);
        }
        self.wheel.tick();
        tracing::trace!(
            target: "casino_core::roulette",
            ticks = self.wheel.ticks(),
            wheel_speed = self.wheel.wheel_speed(),
            ball_angle = self.wheel.ball_angle(),
            "tick"
        );

        if self.wheel.is_stopped() {
            return Ok(SpinProgress::Finished(self.resolve(bankroll)));
        }
        Ok(SpinProgress::Spinning {
            ticks: self.wheel.ticks(),
        })
    }

    /// Steps without pausing until the wheel stops.
    pub fn run_to_completion(&mut self, bankroll: &mut Bankroll) -> GameResult<SpinResult> {
        loop {
            if let SpinProgress::Finished(result) = self.step(bankroll)? {
                return Ok(result);
            }
        }
    }

    fn resolve(&mut self, bankroll: &mut Bankroll) -> SpinResult {
        let number = self.wheel.winning_number();
        let staked = self.total_staked();
        let winnings = total_payout(&self.bets, number);
        bankroll.settle(staked, winnings);
        self.bets.clear();
        self.selected_amount = 0;
        let restocked = bankroll.restock_if_broke();

        let result = SpinResult {
            number,
            color: PocketColor::of(number),
            staked,
            winnings,
            restocked,
        };
        self.phase = RoulettePhase::Result(result);
        tracing::info!(
            target: "casino_core::roulette",
            number,
            color = %result.color,
            staked,
            winnings,
            balance = bankroll.balance(),
            "spin resolved"
        );
        result
    }

    fn reopen_if_finished(&mut self) -> GameResult<()> {
        match self.phase {
            RoulettePhase::Spinning => Err(GameError::SpinInProgress),
            RoulettePhase::Result(_) => {
                self.phase = RoulettePhase::Idle;
                Ok(())
            }
            RoulettePhase::Idle => Ok(()),
        }
    }
}

impl Default for RouletteRound {
    fn default() -> Self {
        Self::new()
    }
}
