use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use casino_core::GameError;
use casino_core::game::Casino;
use casino_core::roulette::SpinProgress;
use casino_ui::{CardArt, CardArtManifest};
use serde_json::json;

use crate::commands::{BlackjackCommand, Command, HELP, RouletteCommand};
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    pub json: bool,
    pub tick: Duration,
    pub show_art: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

enum Screen {
    Blackjack,
    Roulette,
    Chips,
    Help,
}

/// Line-oriented front end: reads commands, applies them to the casino and
/// prints the affected table after each one.
pub struct Shell<W: Write> {
    casino: Casino,
    manifest: CardArtManifest,
    options: ShellOptions,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(casino: Casino, manifest: CardArtManifest, options: ShellOptions, out: W) -> Self {
        Self {
            casino,
            manifest,
            options,
            out,
        }
    }

    pub fn casino(&self) -> &Casino {
        &self.casino
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Runs until `quit` or end of input. Bad commands are reported and
    /// skipped; only I/O failures end the session early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        if !self.options.json {
            writeln!(self.out, "Welcome to the casino. Type 'help' for commands.")?;
            writeln!(self.out, "{}", render::chips(self.casino.balance()))?;
        }
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        if !self.options.json {
            writeln!(self.out, "Leaving with {} chips.", self.casino.balance())?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                tracing::debug!(target: "casino_cli::shell", line, error = %err, "rejected command");
                self.report_error(&err.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let screen = match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => Ok(Screen::Help),
            Command::Chips => Ok(Screen::Chips),
            Command::Blackjack(command) => self.blackjack(command).map(|()| Screen::Blackjack),
            Command::Roulette(command) => self.roulette(command).map(|()| Screen::Roulette),
        };

        match screen {
            Ok(screen) => self.show(screen)?,
            Err(err) => {
                tracing::debug!(target: "casino_cli::shell", line, error = %err, "command failed");
                self.report_error(&err.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    fn blackjack(&mut self, command: BlackjackCommand) -> Result<(), GameError> {
        match command {
            BlackjackCommand::Show => {}
            BlackjackCommand::Bet(amount) => self.casino.blackjack_bet(amount)?,
            BlackjackCommand::Deal => {
                self.casino.blackjack_deal()?;
            }
            BlackjackCommand::Hit => {
                self.casino.blackjack_hit()?;
            }
            BlackjackCommand::Stand => {
                self.casino.blackjack_stand()?;
            }
            BlackjackCommand::NewRound => {
                self.casino.blackjack_new_round();
            }
        }
        Ok(())
    }

    fn roulette(&mut self, command: RouletteCommand) -> Result<(), GameError> {
        match command {
            RouletteCommand::Show => {}
            RouletteCommand::Amount(amount) => self.casino.roulette_select_amount(amount)?,
            RouletteCommand::Bet { descriptor, amount } => {
                self.casino.roulette_bet(descriptor, amount)?;
            }
            RouletteCommand::Clear => {
                self.casino.roulette_clear()?;
            }
            RouletteCommand::Spin => {
                self.casino.roulette_spin()?;
                self.drive_spin()?;
            }
        }
        Ok(())
    }

    /// Steps the wheel on a fixed interval until it settles.
    fn drive_spin(&mut self) -> Result<(), GameError> {
        loop {
            match self.casino.roulette_step()? {
                SpinProgress::Spinning { .. } => {
                    if !self.options.tick.is_zero() {
                        thread::sleep(self.options.tick);
                    }
                }
                SpinProgress::Finished(_) => return Ok(()),
            }
        }
    }

    fn show(&mut self, screen: Screen) -> Result<()> {
        if self.options.json {
            let line = match screen {
                Screen::Blackjack => self.casino.blackjack_view().to_json()?,
                Screen::Roulette => self.casino.roulette_view().to_json()?,
                Screen::Chips => json!({ "balance": self.casino.balance() }).to_string(),
                Screen::Help => json!({ "help": HELP }).to_string(),
            };
            writeln!(self.out, "{line}")?;
            return Ok(());
        }

        let text = match screen {
            Screen::Blackjack => {
                let art = CardArt::new(&self.manifest);
                let art = self.options.show_art.then_some(&art);
                render::blackjack(&self.casino.blackjack_view(), art)
            }
            Screen::Roulette => render::roulette(&self.casino.roulette_view()),
            Screen::Chips => render::chips(self.casino.balance()),
            Screen::Help => HELP.to_string(),
        };
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        if self.options.json {
            writeln!(self.out, "{}", json!({ "error": message }))?;
        } else {
            writeln!(self.out, "error: {message}")?;
        }
        Ok(())
    }
}
