use alloc::vec::Vec;

use crate::deck::Deck;
use crate::effects::EffectKind;
use crate::limits::{BattleLimits, FILLER_CARD_ID, ROUND_DURATION_MS};
use crate::replay::{Action, BattleLog, LogEntry, Winner};
use crate::types::{Side, Unit};

// ==========================================
// MAIN BATTLE RESOLVER
// ==========================================

/// Run a battle to completion.
///
/// The defender acts first and the sides alternate until one deck is empty or
/// the round cap is hit. `started_at_ms` anchors the timestamps in the log;
/// nothing else reads the clock, so equal inputs give equal logs.
///
/// Unit ids must already be unique across both decks.
pub fn resolve_battle(attacker: Vec<Unit>, defender: Vec<Unit>, started_at_ms: u64) -> BattleLog {
    let mut battle = Battle::new(attacker, defender, started_at_ms);
    while battle.step().is_some() {}
    battle.finish()
}

/// In-progress battle state, advanced one round at a time by [`Battle::step`].
#[derive(Debug, Clone)]
pub struct Battle {
    attacker: Deck,
    defender: Deck,
    defender_turn: bool,
    limits: BattleLimits,
    started_at_ms: u64,
    entries: Vec<LogEntry>,
}

impl Battle {
    pub fn new(attacker: Vec<Unit>, defender: Vec<Unit>, started_at_ms: u64) -> Self {
        let attacker = Deck::new(attacker);
        let defender = Deck::new(defender);
        let highest_id = attacker.max_id().max(defender.max_id());
        Self {
            attacker,
            defender,
            defender_turn: true,
            limits: BattleLimits::new(highest_id),
            started_at_ms,
            entries: Vec::new(),
        }
    }

    pub fn attacker(&self) -> &Deck {
        &self.attacker
    }

    pub fn defender(&self) -> &Deck {
        &self.defender
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Side that acts in the next round
    pub fn turn_side(&self) -> Side {
        if self.defender_turn {
            Side::Defender
        } else {
            Side::Attacker
        }
    }

    pub fn is_over(&self) -> bool {
        self.attacker.is_empty() || self.defender.is_empty() || self.limits.is_exceeded()
    }

    /// Resolve one round and return its log entry, or `None` if the battle
    /// is already over.
    pub fn step(&mut self) -> Option<&LogEntry> {
        if self.attacker.is_empty() || self.defender.is_empty() {
            return None;
        }
        let round = self.limits.record_round()?;

        // Rampage ticks for everyone, acting or not
        self.attacker.apply_rampage();
        self.defender.apply_rampage();

        let active_side = self.turn_side();
        let (active, passive) = match active_side {
            Side::Defender => (&mut self.defender, &mut self.attacker),
            Side::Attacker => (&mut self.attacker, &mut self.defender),
        };
        let actions = resolve_turn(active_side, active, passive, &mut self.limits);

        log::debug!(
            "round {}: {} acts, {} actions, decks {}v{}",
            round,
            active_side,
            actions.len(),
            self.attacker.len(),
            self.defender.len()
        );
        for action in &actions {
            log::trace!("round {}: {:?}", round, action);
        }

        self.entries.push(LogEntry {
            round,
            turn_side: active_side,
            timestamp: self
                .started_at_ms
                .saturating_add(BattleLimits::round_offset_ms(round)),
            duration_ms: ROUND_DURATION_MS,
            actions,
            attacker_deck: self.attacker.snapshot(),
            defender_deck: self.defender.snapshot(),
        });

        self.defender_turn = !self.defender_turn;
        self.entries.last()
    }

    /// Settle the outcome and freeze the log.
    pub fn finish(self) -> BattleLog {
        let winner = determine_winner(&self.attacker, &self.defender);
        let log = BattleLog {
            total_rounds: self.entries.len() as u32,
            entries: self.entries,
            winner,
            attacker_remaining: self.attacker.len() as u32,
            defender_remaining: self.defender.len() as u32,
        };

        log::info!(
            "battle over after {} rounds: winner {}, remaining {}v{}",
            log.total_rounds,
            log.winner.as_str(),
            log.attacker_remaining,
            log.defender_remaining
        );
        log
    }
}

// ==========================================
// ROUND RESOLUTION
// ==========================================

/// One strike by the active front unit, its thorns retaliation, then deaths
/// (target first, actor second).
fn resolve_turn(
    active_side: Side,
    active: &mut Deck,
    passive: &mut Deck,
    limits: &mut BattleLimits,
) -> Vec<Action> {
    let mut actions = Vec::new();

    let target_index = match (active.front(), passive.target_index()) {
        (Some(_), Some(index)) => index,
        _ => return actions,
    };

    let actor_id = active[0].id;
    let target_id = passive[target_index].id;
    let damage = active[0].strike_damage();

    if damage > 0 {
        passive[target_index].take_damage(damage);
        actions.push(Action::Attack {
            attacker_id: actor_id,
            defender_id: target_id,
            damage,
        });

        // Thorns only answers a strike that landed
        let thorns = passive[target_index].thorns();
        if thorns > 0 {
            active[0].take_damage(thorns);
            actions.push(Action::Attack {
                attacker_id: target_id,
                defender_id: actor_id,
                damage: thorns,
            });
        }
    }

    let target_died = !passive[target_index].is_alive();
    let actor_died = !active[0].is_alive();

    if target_died {
        resolve_death(active_side.opponent(), passive, target_index, limits, &mut actions);
    }
    if actor_died {
        resolve_death(active_side, active, 0, limits, &mut actions);
    }

    actions
}

/// Log the death of `deck[index]`, then either splice its deathrattle spawn
/// into the same slot or drop it from the deck.
fn resolve_death(
    side: Side,
    deck: &mut Deck,
    index: usize,
    limits: &mut BattleLimits,
    actions: &mut Vec<Action>,
) {
    let dead = &deck[index];
    actions.push(Action::CardDied {
        died_card_id: dead.id,
        died_side: side,
    });

    if !dead.has_effect(EffectKind::Deathrattle) {
        deck.remove(index);
        return;
    }

    let spawn_id = match limits.generate_spawn_id() {
        Some(id) => id,
        None => {
            log::warn!("no spawn id left for the deathrattle of unit {}", dead.id);
            deck.remove(index);
            return;
        }
    };
    let card_id = dead.spawn_card_id().unwrap_or(FILLER_CARD_ID);
    let spawned = Unit::spawned(spawn_id, card_id);
    deck.replace(index, spawned.clone());
    actions.push(Action::SpawnCard {
        side,
        spawned_card: spawned,
    });
}

// ==========================================
// OUTCOME
// ==========================================

/// A side with units left beats an empty side. If both still have units the
/// higher total current health wins; anything else is a tie.
pub fn determine_winner(attacker: &Deck, defender: &Deck) -> Winner {
    match (attacker.is_empty(), defender.is_empty()) {
        (false, true) => Winner::Attacker,
        (true, false) => Winner::Defender,
        (false, false) => match attacker.total_health().cmp(&defender.total_health()) {
            core::cmp::Ordering::Greater => Winner::Attacker,
            core::cmp::Ordering::Less => Winner::Defender,
            core::cmp::Ordering::Equal => Winner::Tie,
        },
        (true, true) => Winner::Tie,
    }
}
