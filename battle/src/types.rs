use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::effects::{self, Effect, EffectKind};

/// Card type identifier, e.g. `"capo"`
pub type CardId = String;

/// Identifier of a unit instance, unique within one battle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Attacker => "attacker",
            Side::Defender => "defender",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A combat unit instance (tracks current health)
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub card_id: CardId,
    pub name: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    /// Cosmetic only
    pub rarity: String,
    pub effects: Vec<Effect>,
}

impl Unit {
    pub fn new(id: u64, card_id: &str, name: &str, attack: i32, health: i32) -> Self {
        Self {
            id: UnitId(id),
            card_id: card_id.to_string(),
            name: name.to_string(),
            current_hp: health,
            max_hp: health,
            attack,
            rarity: "common".to_string(),
            effects: vec![],
        }
    }

    /// The inert 1/1 filler left behind by a deathrattle.
    pub fn spawned(id: UnitId, card_id: &str) -> Self {
        Self {
            id,
            card_id: card_id.to_string(),
            name: card_id.to_string(),
            current_hp: 1,
            max_hp: 1,
            attack: 1,
            rarity: "common".to_string(),
            effects: vec![Effect::NoAttack],
        }
    }

    pub fn with_effects(mut self, effects: Vec<Effect>) -> Self {
        self.effects = effects;
        self
    }

    /// Parse raw tags into effects, replacing any existing ones.
    pub fn with_tags<S: AsRef<str>>(self, tags: &[S]) -> Self {
        let effects = tags.iter().map(|t| Effect::parse(t.as_ref())).collect();
        self.with_effects(effects)
    }

    pub fn with_rarity(mut self, rarity: &str) -> Self {
        self.rarity = rarity.to_string();
        self
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        effects::has_effect(&self.effects, kind)
    }

    pub fn thorns(&self) -> i32 {
        effects::thorns_damage(&self.effects)
    }

    pub fn spawn_card_id(&self) -> Option<&str> {
        effects::spawn_card_id(&self.effects)
    }

    /// Damage this unit deals when it acts.
    pub fn strike_damage(&self) -> i32 {
        if self.has_effect(EffectKind::NoAttack) {
            0
        } else {
            self.attack
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn grow(&mut self) {
        self.current_hp = self.current_hp.saturating_add(1);
        self.max_hp = self.max_hp.saturating_add(1);
    }
}
