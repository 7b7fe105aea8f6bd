use thiserror::Error;

/// Recoverable failures surfaced by the table engine. None of them change
/// state when returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("insufficient chips: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },
    #[error("select a bet amount first")]
    NoBetAmountSelected,
    #[error("place at least one bet before spinning")]
    NoBetsPlaced,
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("the wheel is spinning, wait for the result")]
    SpinInProgress,
    #[error("the wheel is not spinning")]
    NotSpinning,
    #[error("cannot {action} while {phase}")]
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },
    #[error("invalid bet: {0}")]
    InvalidBet(String),
}

pub type GameResult<T> = Result<T, GameError>;
