use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use casino_cli::config::CasinoConfig;
use casino_cli::logging::init_logging;
use casino_cli::shell::{Shell, ShellOptions};
use casino_core::AppInfo;
use casino_core::game::Casino;
use casino_ui::CardArtManifest;

/// Terminal blackjack and roulette table.
#[derive(Debug, Parser)]
#[command(
    name = "casino",
    author,
    version,
    about = "Blackjack and roulette at the terminal"
)]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the deck and wheel (random when omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the starting chip stack.
    #[arg(long, value_name = "CHIPS")]
    chips: Option<u64>,

    /// Override the delay between wheel ticks, in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Print every table as a JSON line instead of text.
    #[arg(long)]
    json: bool,

    /// Exit after validating the configuration.
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => CasinoConfig::from_path(path)?,
        None => CasinoConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.table.seed = Some(seed);
    }

    if let Some(chips) = cli.chips {
        config.table.starting_chips = chips;
    }

    if let Some(tick_ms) = cli.tick_ms {
        config.roulette.tick_ms = tick_ms;
    }

    config.validate()?;

    if cli.validate_only {
        println!(
            "Configuration valid: {} starting chips, {} ms wheel tick",
            config.table.starting_chips, config.roulette.tick_ms
        );
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging)?;
    let seed = config.table.seed.unwrap_or_else(rand::random);
    tracing::info!(
        target: "casino_cli",
        app = AppInfo::name(),
        version = AppInfo::version(),
        seed,
        chips = config.table.starting_chips,
        "session starting"
    );

    let manifest = match config.assets.manifest.as_ref() {
        Some(path) => CardArtManifest::load(path).unwrap_or_else(CardArtManifest::standard),
        None => CardArtManifest::current().clone(),
    };
    let options = ShellOptions {
        json: cli.json,
        tick: config.roulette.tick_interval(),
        show_art: config.assets.show_art,
    };

    let casino = Casino::with_stake(seed, config.table.starting_chips);
    let mut shell = Shell::new(casino, manifest, options, io::stdout().lock());
    shell
        .run(io::stdin().lock())
        .context("running the casino session")?;
    Ok(())
}
