//! Imperium battle simulator
//!
//! Loads a card catalog from JSON, builds decks from card id lists and runs
//! battles through `imperium-battle`. The binary in `main.rs` is a thin clap
//! wrapper around these functions.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use imperium_battle::{prepare_pve, prepare_pvp, BattleLog, CardDefinition, Catalog, Dungeon, Winner};
use rayon::prelude::*;
use serde::Serialize;

/// Parse a catalog from a JSON array of card definitions.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let definitions: Vec<CardDefinition> =
        serde_json::from_str(json).context("card catalog is not a valid list of cards")?;
    if definitions.is_empty() {
        bail!("card catalog is empty");
    }
    Ok(Catalog::new(definitions))
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read card catalog {}", path.display()))?;
    let catalog = parse_catalog(&json).with_context(|| format!("in {}", path.display()))?;
    log::info!("loaded {} cards from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Split `"thug, goon,capo"` into card ids, dropping empty entries.
pub fn parse_deck_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Current Unix time in milliseconds, used when no start time is given.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn run_pve(catalog: &Catalog, deck: &[String], dungeon: Dungeon, started_at_ms: u64) -> Result<BattleLog> {
    let matchup = prepare_pve(catalog, deck, dungeon)?;
    log::debug!(
        "pve: {} units against the {} dungeon",
        matchup.attacker.len(),
        dungeon.name()
    );
    Ok(matchup.resolve(started_at_ms))
}

pub fn run_pvp(
    catalog: &Catalog,
    attacker: &[String],
    defender: &[String],
    started_at_ms: u64,
) -> Result<BattleLog> {
    let matchup = prepare_pvp(catalog, attacker, defender)?;
    log::debug!(
        "pvp: {} attacking units against {}",
        matchup.attacker.len(),
        matchup.defender.len()
    );
    Ok(matchup.resolve(started_at_ms))
}

/// Results of one card across the gauntlet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GauntletRecord {
    pub card_id: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl GauntletRecord {
    pub fn battles(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// Fight every card one-on-one against every other card, once as attacker
/// and once as defender. Records come back sorted by card id.
pub fn gauntlet(catalog: &Catalog, started_at_ms: u64) -> Result<Vec<GauntletRecord>> {
    let card_ids: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
    let pairings: Vec<(&str, &str)> = card_ids
        .iter()
        .flat_map(|a| card_ids.iter().filter(move |b| *b != a).map(move |b| (*a, *b)))
        .collect();

    let outcomes = pairings
        .par_iter()
        .map(|&(a, b)| {
            let log = prepare_pvp(catalog, &[a], &[b])?.resolve(started_at_ms);
            Ok::<_, anyhow::Error>((a, b, log.winner))
        })
        .collect::<Result<Vec<_>>>()?;
    log::info!("gauntlet resolved {} battles", outcomes.len());

    let mut records: BTreeMap<&str, GauntletRecord> = card_ids
        .iter()
        .map(|id| {
            let record = GauntletRecord {
                card_id: id.to_string(),
                ..Default::default()
            };
            (*id, record)
        })
        .collect();

    for (attacker, defender, winner) in outcomes {
        let (win, lose) = match winner {
            Winner::Attacker => (attacker, defender),
            Winner::Defender => (defender, attacker),
            Winner::Tie => {
                for id in [attacker, defender] {
                    if let Some(record) = records.get_mut(id) {
                        record.ties += 1;
                    }
                }
                continue;
            }
        };
        if let Some(record) = records.get_mut(win) {
            record.wins += 1;
        }
        if let Some(record) = records.get_mut(lose) {
            record.losses += 1;
        }
    }

    Ok(records.into_values().collect())
}

/// Plain-text table of gauntlet results, best win count first.
pub fn format_gauntlet(records: &[GauntletRecord]) -> String {
    let mut sorted: Vec<&GauntletRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.card_id.cmp(&b.card_id)));

    let mut out = format!("{:<16} {:>5} {:>6} {:>5}\n", "card", "wins", "losses", "ties");
    for record in sorted {
        out.push_str(&format!(
            "{:<16} {:>5} {:>6} {:>5}\n",
            record.card_id, record.wins, record.losses, record.ties
        ));
    }
    out
}
