//! Battle limits and per-battle counters

use crate::types::UnitId;

/// Rounds after which a stalemate is settled on remaining health
pub const MAX_ROUNDS: u32 = 2000;
/// Playback length of a single round
pub const ROUND_DURATION_MS: u64 = 800;
/// Spawned unit ids start above this value
pub const SPAWN_ID_BASE: u64 = 10_000;
/// Card type spawned by a deathrattle that names no `spawns` target
pub const FILLER_CARD_ID: &str = "cobblestone";

/// Largest unit id a caller may supply. Leaves room for every spawn a
/// battle can produce (at most two deaths per round).
pub const MAX_SUPPLIED_UNIT_ID: u64 = u64::MAX - 2 * MAX_ROUNDS as u64;

/// Tracks the round counter and hands out spawn ids for one battle.
///
/// Each battle owns its own `BattleLimits`, so battles resolved side by side
/// never share a counter.
#[derive(Debug, Clone)]
pub struct BattleLimits {
    pub round: u32,
    next_spawn_id: Option<u64>,
}

impl BattleLimits {
    /// `highest_supplied_id` is the largest id already present in either deck;
    /// spawn ids always start above it.
    pub fn new(highest_supplied_id: Option<UnitId>) -> Self {
        let floor = highest_supplied_id
            .map(|id| id.0)
            .unwrap_or(0)
            .max(SPAWN_ID_BASE);
        Self {
            round: 0,
            next_spawn_id: floor.checked_add(1),
        }
    }

    /// Next unused spawn id, or `None` once the id space above the supplied
    /// ids is exhausted.
    pub fn generate_spawn_id(&mut self) -> Option<UnitId> {
        let id = self.next_spawn_id?;
        self.next_spawn_id = id.checked_add(1);
        Some(UnitId(id))
    }

    /// Advance to the next round. Returns its 1-based number, or `None` once
    /// the round cap has been played.
    pub fn record_round(&mut self) -> Option<u32> {
        if self.is_exceeded() {
            return None;
        }
        self.round += 1;
        Some(self.round)
    }

    pub fn is_exceeded(&self) -> bool {
        self.round >= MAX_ROUNDS
    }

    /// Wall-clock offset of a round from the battle start
    pub fn round_offset_ms(round: u32) -> u64 {
        u64::from(round.saturating_sub(1)) * ROUND_DURATION_MS
    }
}
