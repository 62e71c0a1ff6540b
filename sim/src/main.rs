use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use imperium_battle::{BattleLog, Dungeon};
use imperium_sim::{
    format_gauntlet, gauntlet, load_catalog, now_ms, parse_deck_list, run_pve, run_pvp,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "imperium-sim", version, about = "Imperium battle simulator")]
struct Cli {
    /// Card catalog (JSON array of card definitions)
    #[arg(long, global = true, default_value = "cards/cards.json")]
    cards: PathBuf,

    /// Log filter, e.g. `debug` or `imperium_battle=trace`. Falls back to
    /// the IMPERIUM_LOG environment variable, then `warn`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Battle start time in Unix milliseconds (defaults to now)
    #[arg(long, global = true)]
    started_at: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Player deck against a dungeon bot
    Pve {
        /// Comma-separated card ids, front first
        #[arg(long)]
        deck: String,
        /// easy, medium or hard
        #[arg(long, default_value = "easy", value_parser = Dungeon::from_str)]
        dungeon: Dungeon,
    },
    /// Two player decks
    Pvp {
        #[arg(long)]
        attacker: String,
        #[arg(long)]
        defender: String,
    },
    /// Every card one-on-one against every other card
    Gauntlet,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_env("IMPERIUM_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn print_log(log: &BattleLog, pretty: bool) -> Result<()> {
    let summary = log.summary();
    log::info!(
        "{} wins after {} rounds ({}v{} left)",
        summary.winner.as_str(),
        summary.rounds,
        summary.attacker_remaining,
        summary.defender_remaining
    );
    print_json(log, pretty)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let catalog = load_catalog(&cli.cards)?;
    let started_at = cli.started_at.unwrap_or_else(now_ms);

    match cli.command {
        Command::Pve { deck, dungeon } => {
            let log = run_pve(&catalog, &parse_deck_list(&deck), dungeon, started_at)?;
            print_log(&log, cli.pretty)
        }
        Command::Pvp { attacker, defender } => {
            let log = run_pvp(
                &catalog,
                &parse_deck_list(&attacker),
                &parse_deck_list(&defender),
                started_at,
            )?;
            print_log(&log, cli.pretty)
        }
        Command::Gauntlet => {
            let records = gauntlet(&catalog, started_at)?;
            print!("{}", format_gauntlet(&records));
            Ok(())
        }
    }
}
