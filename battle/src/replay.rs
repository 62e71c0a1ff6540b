//! Battle log
//!
//! Everything a client needs to replay a battle: one [`LogEntry`] per round
//! with the actions taken and both decks as they stood afterwards.

use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::{Side, Unit, UnitId};

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Damage dealt by one unit to another. Thorns retaliation is logged as a
    /// second attack in the reverse direction.
    Attack {
        attacker_id: UnitId,
        defender_id: UnitId,
        damage: i32,
    },
    CardDied {
        died_card_id: UnitId,
        died_side: Side,
    },
    SpawnCard {
        side: Side,
        spawned_card: Unit,
    },
}

/// One resolved round
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct LogEntry {
    pub round: u32,
    pub turn_side: Side,
    /// Unix milliseconds at which the round starts playing back
    pub timestamp: u64,
    pub duration_ms: u64,
    pub actions: Vec<Action>,
    pub attacker_deck: Vec<Unit>,
    pub defender_deck: Vec<Unit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Attacker,
    Defender,
    Tie,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Attacker => "attacker",
            Winner::Defender => "defender",
            Winner::Tie => "tie",
        }
    }
}

/// Complete record of a finished battle
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct BattleLog {
    pub entries: Vec<LogEntry>,
    pub winner: Winner,
    pub total_rounds: u32,
    pub attacker_remaining: u32,
    pub defender_remaining: u32,
}

/// Headline numbers of a battle, without the round-by-round detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub winner: Winner,
    pub rounds: u32,
    pub attacker_remaining: u32,
    pub defender_remaining: u32,
}

impl BattleLog {
    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            winner: self.winner,
            rounds: self.total_rounds,
            attacker_remaining: self.attacker_remaining,
            defender_remaining: self.defender_remaining,
        }
    }

    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Every action across all rounds, in order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter().flat_map(|e| e.actions.iter())
    }
}
