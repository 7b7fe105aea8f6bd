use crate::error::GameError;
use crate::roulette::wheel::PocketColor;
use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

pub const MAX_NUMBER: u8 = 36;
pub const EVEN_MONEY_MULTIPLIER: u64 = 2;
pub const STRAIGHT_UP_MULTIPLIER: u64 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberRange {
    /// 1 through 18.
    Low,
    /// 19 through 36.
    High,
}

/// What a roulette stake is riding on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BetDescriptor {
    Color(PocketColor),
    Parity(Parity),
    Range(NumberRange),
    Number(u8),
}

impl BetDescriptor {
    pub fn number(value: u8) -> Result<Self, GameError> {
        if value > MAX_NUMBER {
            return Err(GameError::InvalidBet(format!(
                "number {value} is not on the wheel"
            )));
        }
        Ok(BetDescriptor::Number(value))
    }

    /// Total returned on a win, stake included.
    pub const fn multiplier(self) -> u64 {
        match self {
            BetDescriptor::Color(PocketColor::Green) | BetDescriptor::Number(_) => {
                STRAIGHT_UP_MULTIPLIER
            }
            BetDescriptor::Color(_) | BetDescriptor::Parity(_) | BetDescriptor::Range(_) => {
                EVEN_MONEY_MULTIPLIER
            }
        }
    }

    /// Zero loses every outside bet except green.
    pub fn wins(self, outcome: u8) -> bool {
        match self {
            BetDescriptor::Color(color) => PocketColor::of(outcome) == color,
            BetDescriptor::Parity(Parity::Even) => outcome != 0 && outcome % 2 == 0,
            BetDescriptor::Parity(Parity::Odd) => outcome % 2 == 1,
            BetDescriptor::Range(NumberRange::Low) => (1..=18).contains(&outcome),
            BetDescriptor::Range(NumberRange::High) => (19..=MAX_NUMBER).contains(&outcome),
            BetDescriptor::Number(number) => number == outcome,
        }
    }

    pub fn payout(self, stake: u64, outcome: u8) -> u64 {
        if self.wins(outcome) {
            stake.saturating_mul(self.multiplier())
        } else {
            0
        }
    }
}

impl fmt::Display for BetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetDescriptor::Color(color) => f.write_str(color.as_str()),
            BetDescriptor::Parity(Parity::Even) => f.write_str("even"),
            BetDescriptor::Parity(Parity::Odd) => f.write_str("odd"),
            BetDescriptor::Range(NumberRange::Low) => f.write_str("1-18"),
            BetDescriptor::Range(NumberRange::High) => f.write_str("19-36"),
            BetDescriptor::Number(number) => write!(f, "number_{number}"),
        }
    }
}

impl FromStr for BetDescriptor {
    type Err = GameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let label = value.trim().to_ascii_lowercase();
        let descriptor = match label.as_str() {
            "red" => BetDescriptor::Color(PocketColor::Red),
            "black" => BetDescriptor::Color(PocketColor::Black),
            "green" | "zero" => BetDescriptor::Color(PocketColor::Green),
            "even" => BetDescriptor::Parity(Parity::Even),
            "odd" => BetDescriptor::Parity(Parity::Odd),
            "1-18" | "low" => BetDescriptor::Range(NumberRange::Low),
            "19-36" | "high" => BetDescriptor::Range(NumberRange::High),
            other => {
                let digits = other.strip_prefix("number_").unwrap_or(other);
                let number = digits
                    .parse::<u8>()
                    .map_err(|_| GameError::InvalidBet(format!("unknown bet '{value}'")))?;
                BetDescriptor::number(number)?
            }
        };
        Ok(descriptor)
    }
}

/// Sum of all payouts for `outcome`; losing stakes contribute nothing.
pub fn total_payout(bets: &BTreeMap<BetDescriptor, u64>, outcome: u8) -> u64 {
    bets.iter()
        .map(|(descriptor, &stake)| descriptor.payout(stake, outcome))
        .fold(0u64, u64::saturating_add)
}
