//! Effect tags
//!
//! Persisted cards carry their behaviour as loose strings such as `"taunt"` or
//! `"thorns:2"`. They are parsed once into [`Effect`] when a unit is built, so
//! the resolver only ever matches on typed variants. Tags that do not parse
//! are kept verbatim as [`Effect::Unknown`] and have no combat meaning.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::CardId;

/// A single behaviour modifier attached to a unit.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effect {
    /// Must be attacked before any other unit in the deck.
    Taunt,
    /// Gains +1 current and +1 max health at the start of every round.
    Rampage,
    /// Deals this much damage back to any unit that damages it.
    Thorns(i32),
    /// Leaves a 1/1 filler unit in its place when it dies.
    Deathrattle,
    /// Card type of the filler left behind by [`Effect::Deathrattle`].
    Spawns(CardId),
    /// Never deals attack damage.
    NoAttack,
    /// Unrecognised or malformed tag, preserved for display only.
    Unknown(String),
}

/// The name half of an effect, without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Taunt,
    Rampage,
    Thorns,
    Deathrattle,
    Spawns,
    NoAttack,
}

impl EffectKind {
    /// Tag name as it appears in persisted card data.
    pub fn tag(&self) -> &'static str {
        match self {
            EffectKind::Taunt => "taunt",
            EffectKind::Rampage => "rampage",
            EffectKind::Thorns => "thorns",
            EffectKind::Deathrattle => "deathrattle",
            EffectKind::Spawns => "spawns",
            EffectKind::NoAttack => "no_attack",
        }
    }

    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "taunt" => Some(EffectKind::Taunt),
            "rampage" => Some(EffectKind::Rampage),
            "thorns" => Some(EffectKind::Thorns),
            "deathrattle" => Some(EffectKind::Deathrattle),
            "spawns" => Some(EffectKind::Spawns),
            "no_attack" => Some(EffectKind::NoAttack),
            _ => None,
        }
    }
}

impl Effect {
    /// Parse a raw tag. Never fails: anything unusable becomes `Unknown`.
    ///
    /// A tag names effect `E` when it is exactly `E` or starts with `E:`.
    /// Flag effects ignore any payload; `thorns` needs an integer payload and
    /// `spawns` needs a payload at all, otherwise the tag is inert.
    pub fn parse(tag: &str) -> Self {
        let (name, value) = match tag.split_once(':') {
            Some((name, value)) => (name, Some(value)),
            None => (tag, None),
        };

        match (EffectKind::from_tag(name), value) {
            (Some(EffectKind::Taunt), _) => Effect::Taunt,
            (Some(EffectKind::Rampage), _) => Effect::Rampage,
            (Some(EffectKind::Deathrattle), _) => Effect::Deathrattle,
            (Some(EffectKind::NoAttack), _) => Effect::NoAttack,
            (Some(EffectKind::Thorns), Some(value)) => match value.parse::<i32>() {
                Ok(amount) => Effect::Thorns(amount),
                Err(_) => Effect::Unknown(tag.to_string()),
            },
            (Some(EffectKind::Spawns), Some(value)) => Effect::Spawns(value.to_string()),
            _ => Effect::Unknown(tag.to_string()),
        }
    }

    pub fn kind(&self) -> Option<EffectKind> {
        match self {
            Effect::Taunt => Some(EffectKind::Taunt),
            Effect::Rampage => Some(EffectKind::Rampage),
            Effect::Thorns(_) => Some(EffectKind::Thorns),
            Effect::Deathrattle => Some(EffectKind::Deathrattle),
            Effect::Spawns(_) => Some(EffectKind::Spawns),
            Effect::NoAttack => Some(EffectKind::NoAttack),
            Effect::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Thorns(amount) => write!(f, "thorns:{}", amount),
            Effect::Spawns(card_id) => write!(f, "spawns:{}", card_id),
            Effect::Unknown(raw) => f.write_str(raw),
            other => match other.kind() {
                Some(kind) => f.write_str(kind.tag()),
                None => Ok(()),
            },
        }
    }
}

impl From<String> for Effect {
    fn from(tag: String) -> Self {
        Effect::parse(&tag)
    }
}

impl From<&str> for Effect {
    fn from(tag: &str) -> Self {
        Effect::parse(tag)
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> Self {
        format!("{}", effect)
    }
}

/// True if any effect in the list is of the given kind.
pub fn has_effect(effects: &[Effect], kind: EffectKind) -> bool {
    effects.iter().any(|e| e.kind() == Some(kind))
}

/// Retaliation damage from the first thorns effect, or 0.
pub fn thorns_damage(effects: &[Effect]) -> i32 {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Thorns(amount) => Some(*amount),
            _ => None,
        })
        .unwrap_or(0)
}

/// Card type named by the first `spawns` effect, if it names one.
pub fn spawn_card_id(effects: &[Effect]) -> Option<&str> {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Spawns(card_id) => Some(card_id.as_str()),
            _ => None,
        })
        .filter(|card_id| !card_id.is_empty())
}

// ==========================================
// RAW TAG PREDICATES
// ==========================================

/// Raw-string form of [`has_effect`] for callers still holding persisted tags.
pub fn has_tag<S: AsRef<str>>(tags: &[S], effect: &str) -> bool {
    tags.iter().any(|tag| {
        let tag = tag.as_ref();
        tag == effect
            || tag
                .strip_prefix(effect)
                .map_or(false, |rest| rest.starts_with(':'))
    })
}

/// Raw-string form of [`thorns_damage`]. Malformed values count as no thorns.
pub fn thorns_magnitude<S: AsRef<str>>(tags: &[S]) -> i32 {
    tags.iter()
        .filter_map(|tag| tag.as_ref().strip_prefix("thorns:"))
        .find_map(|value| value.parse::<i32>().ok())
        .unwrap_or(0)
}
