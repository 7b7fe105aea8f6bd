pub mod bet;
pub mod round;
pub mod wheel;

pub use bet::{BetDescriptor, NumberRange, Parity, total_payout};
pub use round::{RoulettePhase, RouletteRound, SpinProgress, SpinResult};
pub use wheel::{PocketColor, TICK_INTERVAL, WHEEL_ORDER, WheelState};
