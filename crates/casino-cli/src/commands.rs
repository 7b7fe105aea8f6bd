use casino_core::GameError;
use casino_core::roulette::BetDescriptor;
use core::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Blackjack:
  bj                 show the table
  bj bet N           stake N chips on the next hand
  bj deal            deal two cards each
  bj hit             draw a card
  bj stand           let the dealer play out
  bj new             clear the table and reshuffle
Roulette:
  rl                 show the table
  rl amount N        choose the chip amount for later bets
  rl bet BET [N]     stake N (or the chosen amount) on red, black, green,
                     even, odd, 1-18, 19-36 or a number 0-36
  rl clear           take back every bet
  rl spin            spin the wheel
Other:
  chips              show the balance
  help               show this message
  quit               leave the table";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlackjackCommand {
    Show,
    Bet(u64),
    Deal,
    Hit,
    Stand,
    NewRound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouletteCommand {
    Show,
    Amount(u64),
    Bet {
        descriptor: BetDescriptor,
        amount: Option<u64>,
    },
    Clear,
    Spin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Blackjack(BlackjackCommand),
    Roulette(RouletteCommand),
    Chips,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a chip amount")]
    InvalidAmount(String),
    #[error("unexpected argument '{0}'")]
    TrailingArgument(String),
    #[error(transparent)]
    Bet(#[from] GameError),
}

fn parse_amount(token: &str) -> Result<u64, CommandError> {
    token
        .parse::<u64>()
        .map_err(|_| CommandError::InvalidAmount(token.to_string()))
}

fn finish<'a>(mut rest: impl Iterator<Item = &'a str>, command: Command) -> Result<Command, CommandError> {
    match rest.next() {
        Some(extra) => Err(CommandError::TrailingArgument(extra.to_string())),
        None => Ok(command),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let lowered = line.trim().to_ascii_lowercase();
        let mut tokens = lowered.split_whitespace();
        let head = tokens.next().ok_or(CommandError::Empty)?;

        match head {
            "bj" | "blackjack" => {
                let command = match tokens.next() {
                    None => BlackjackCommand::Show,
                    Some("bet") => {
                        let amount = tokens.next().ok_or(CommandError::MissingArgument {
                            command: "bj bet",
                            argument: "an amount",
                        })?;
                        BlackjackCommand::Bet(parse_amount(amount)?)
                    }
                    Some("deal") => BlackjackCommand::Deal,
                    Some("hit") => BlackjackCommand::Hit,
                    Some("stand") => BlackjackCommand::Stand,
                    Some("new") => BlackjackCommand::NewRound,
                    Some(other) => return Err(CommandError::Unknown(format!("bj {other}"))),
                };
                finish(tokens, Command::Blackjack(command))
            }
            "rl" | "roulette" => {
                let command = match tokens.next() {
                    None => RouletteCommand::Show,
                    Some("amount") => {
                        let amount = tokens.next().ok_or(CommandError::MissingArgument {
                            command: "rl amount",
                            argument: "an amount",
                        })?;
                        RouletteCommand::Amount(parse_amount(amount)?)
                    }
                    Some("bet") => {
                        let label = tokens.next().ok_or(CommandError::MissingArgument {
                            command: "rl bet",
                            argument: "a bet such as red or 17",
                        })?;
                        let descriptor = label.parse::<BetDescriptor>()?;
                        let amount = tokens.next().map(parse_amount).transpose()?;
                        RouletteCommand::Bet { descriptor, amount }
                    }
                    Some("clear") => RouletteCommand::Clear,
                    Some("spin") => RouletteCommand::Spin,
                    Some(other) => return Err(CommandError::Unknown(format!("rl {other}"))),
                };
                finish(tokens, Command::Roulette(command))
            }
            "chips" | "balance" => finish(tokens, Command::Chips),
            "help" | "?" => finish(tokens, Command::Help),
            "quit" | "exit" => finish(tokens, Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
