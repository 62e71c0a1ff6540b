mod outcome;
mod turns;

use crate::battle::resolve_battle;
use crate::replay::{Action, BattleLog, LogEntry};
use crate::types::*;

/// Arbitrary fixed battle start so timestamps are predictable
const START_MS: u64 = 1_700_000_000_000;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_unit(id: u64, name: &str, atk: i32, hp: i32) -> Unit {
    Unit::new(id, name, name, atk, hp)
}

fn create_tagged_unit(id: u64, name: &str, atk: i32, hp: i32, tags: &[&str]) -> Unit {
    create_unit(id, name, atk, hp).with_tags(tags)
}

fn run_battle(attacker: &[Unit], defender: &[Unit]) -> BattleLog {
    resolve_battle(attacker.to_vec(), defender.to_vec(), START_MS)
}

fn entry(log: &BattleLog, round: u32) -> &LogEntry {
    log.entries
        .iter()
        .find(|e| e.round == round)
        .unwrap_or_else(|| panic!("no entry for round {}", round))
}

fn attack(from: u64, to: u64, damage: i32) -> Action {
    Action::Attack {
        attacker_id: UnitId(from),
        defender_id: UnitId(to),
        damage,
    }
}

fn died(id: u64, side: Side) -> Action {
    Action::CardDied {
        died_card_id: UnitId(id),
        died_side: side,
    }
}

fn ids(units: &[Unit]) -> Vec<u64> {
    units.iter().map(|u| u.id.0).collect()
}
