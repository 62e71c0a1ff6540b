//! Card catalog and deck preparation
//!
//! Turns persisted card definitions into battle-ready units, assigns ids so
//! the two decks never collide, and checks the preconditions the resolver
//! relies on.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::battle::resolve_battle;
use crate::error::{SetupError, SetupResult};
use crate::limits::MAX_SUPPLIED_UNIT_ID;
use crate::replay::BattleLog;
use crate::types::{CardId, Side, Unit, UnitId};

/// First unit id handed to bot decks
pub const BOT_ID_BASE: u64 = 100;

/// Static card data as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub base_hp: i32,
    pub base_damage: i32,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default)]
    pub effects: Vec<String>,
    /// Card type left behind on death, for cards with `deathrattle`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawns: Option<CardId>,
}

fn default_rarity() -> String {
    "common".to_string()
}

impl CardDefinition {
    /// Raw effect tags with the `spawns` column folded in as a `spawns:` tag.
    pub fn effect_tags(&self) -> Vec<String> {
        let mut tags = self.effects.clone();
        if let Some(spawns) = &self.spawns {
            let mut tag = String::from("spawns:");
            tag.push_str(spawns);
            tags.push(tag);
        }
        tags
    }

    /// A fresh unit at full health.
    pub fn instantiate(&self, id: u64) -> Unit {
        Unit::new(id, &self.id, &self.name, self.base_damage, self.base_hp)
            .with_rarity(&self.rarity)
            .with_tags(&self.effect_tags())
    }
}

/// Card definitions keyed by card id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: BTreeMap<CardId, CardDefinition>,
}

impl Catalog {
    pub fn new(definitions: impl IntoIterator<Item = CardDefinition>) -> Self {
        Self {
            cards: definitions.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }

    pub fn get(&self, card_id: &str) -> Option<&CardDefinition> {
        self.cards.get(card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Instantiate `card_ids` in order with ids `first_id`, `first_id + 1`, ...
    pub fn build_deck<S: AsRef<str>>(&self, card_ids: &[S], first_id: u64) -> SetupResult<Vec<Unit>> {
        card_ids
            .iter()
            .zip(first_id..)
            .map(|(card_id, id)| {
                let card_id = card_id.as_ref();
                self.get(card_id)
                    .map(|definition| definition.instantiate(id))
                    .ok_or_else(|| SetupError::UnknownCard {
                        card_id: card_id.to_string(),
                    })
            })
            .collect()
    }
}

/// Bot opponents for player-versus-environment battles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dungeon {
    Easy,
    Medium,
    Hard,
}

impl Dungeon {
    pub const ALL: [Dungeon; 3] = [Dungeon::Easy, Dungeon::Medium, Dungeon::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Dungeon::Easy => "easy",
            Dungeon::Medium => "medium",
            Dungeon::Hard => "hard",
        }
    }

    /// The bot's deck, front first
    pub fn card_ids(&self) -> &'static [&'static str] {
        match self {
            Dungeon::Easy => &["thug", "thug", "goon", "enforcer", "cobblestone"],
            Dungeon::Medium => &["enforcer", "hitman", "spider-man", "capo", "don"],
            Dungeon::Hard => &["don", "mastermind", "berserker", "godfather", "pvp-warlord"],
        }
    }
}

impl FromStr for Dungeon {
    type Err = SetupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Dungeon::ALL
            .iter()
            .copied()
            .find(|d| d.name() == name)
            .ok_or_else(|| SetupError::UnknownDungeon {
                name: name.to_string(),
            })
    }
}

/// Two validated decks ready to fight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub attacker: Vec<Unit>,
    pub defender: Vec<Unit>,
}

impl Matchup {
    pub fn new(attacker: Vec<Unit>, defender: Vec<Unit>) -> SetupResult<Self> {
        validate_decks(&attacker, &defender)?;
        Ok(Self { attacker, defender })
    }

    pub fn resolve(self, started_at_ms: u64) -> BattleLog {
        resolve_battle(self.attacker, self.defender, started_at_ms)
    }
}

/// Both decks non-empty, no id shared by two units, every id at most
/// [`MAX_SUPPLIED_UNIT_ID`].
pub fn validate_decks(attacker: &[Unit], defender: &[Unit]) -> SetupResult<()> {
    if attacker.is_empty() {
        return Err(SetupError::EmptyDeck {
            side: Side::Attacker,
        });
    }
    if defender.is_empty() {
        return Err(SetupError::EmptyDeck {
            side: Side::Defender,
        });
    }

    let mut seen: BTreeSet<UnitId> = BTreeSet::new();
    for unit in attacker.iter().chain(defender.iter()) {
        if unit.id.0 > MAX_SUPPLIED_UNIT_ID {
            return Err(SetupError::UnitIdOutOfRange { id: unit.id });
        }
        if !seen.insert(unit.id) {
            return Err(SetupError::DuplicateUnitId { id: unit.id });
        }
    }
    Ok(())
}

/// Player deck (ids from 1) against a dungeon bot (ids from [`BOT_ID_BASE`],
/// or just past the player's ids if the player deck is larger than that).
pub fn prepare_pve<S: AsRef<str>>(catalog: &Catalog, deck: &[S], dungeon: Dungeon) -> SetupResult<Matchup> {
    let attacker = catalog.build_deck(deck, 1)?;
    let bot_base = BOT_ID_BASE.max(attacker.len() as u64 + 1);
    let defender = catalog.build_deck(dungeon.card_ids(), bot_base)?;
    Matchup::new(attacker, defender)
}

/// Two player decks; the defender's ids continue after the attacker's.
pub fn prepare_pvp<A: AsRef<str>, D: AsRef<str>>(
    catalog: &Catalog,
    attacker: &[A],
    defender: &[D],
) -> SetupResult<Matchup> {
    let attacker = catalog.build_deck(attacker, 1)?;
    let defender = catalog.build_deck(defender, attacker.len() as u64 + 1)?;
    Matchup::new(attacker, defender)
}
