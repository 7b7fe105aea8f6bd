#![deny(warnings)]
pub mod error;
pub mod game;
pub mod model;
pub mod roulette;

pub use error::{GameError, GameResult};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "casino"
    }

    pub const fn tagline() -> &'static str {
        "Blackjack & Roulette"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
