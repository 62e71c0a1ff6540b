//! Imperium battle engine
//!
//! Resolves a fight between two ordered decks of units and produces a
//! replayable round-by-round log. Pure and deterministic: no I/O, no
//! randomness, no global state.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod battle;
pub mod deck;
pub mod effects;
pub mod error;
pub mod limits;
pub mod replay;
pub mod roster;
pub mod types;

#[cfg(test)]
mod tests;

pub use battle::{determine_winner, resolve_battle, Battle};
pub use deck::Deck;
pub use effects::{Effect, EffectKind};
pub use error::{SetupError, SetupResult};
pub use replay::{Action, BattleLog, BattleSummary, LogEntry, Winner};
pub use roster::{prepare_pve, prepare_pvp, validate_decks, CardDefinition, Catalog, Dungeon, Matchup};
pub use types::{CardId, Side, Unit, UnitId};
