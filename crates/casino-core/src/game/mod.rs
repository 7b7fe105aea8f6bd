pub mod blackjack;
pub mod casino;
pub mod view;

pub use blackjack::{
    BlackjackOutcome, BlackjackPhase, BlackjackResult, BlackjackRound, DEALER_STANDS_ON,
    RoundProgress,
};
pub use casino::Casino;
pub use view::{BetView, BlackjackView, RouletteView};
