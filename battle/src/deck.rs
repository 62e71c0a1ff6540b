//! Ordered unit container. Index 0 is the front of the deck.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::effects::EffectKind;
use crate::types::{Unit, UnitId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck(Vec<Unit>);

impl Deck {
    pub fn new(units: Vec<Unit>) -> Self {
        Self(units)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn front(&self) -> Option<&Unit> {
        self.0.first()
    }

    /// Index of the unit an attack against this deck lands on: the first
    /// taunt unit, otherwise the front. `None` for an empty deck.
    pub fn target_index(&self) -> Option<usize> {
        if self.0.is_empty() {
            return None;
        }
        let taunt = self.0.iter().position(|u| u.has_effect(EffectKind::Taunt));
        Some(taunt.unwrap_or(0))
    }

    pub fn remove(&mut self, index: usize) -> Unit {
        self.0.remove(index)
    }

    /// Put `unit` at `index`, returning the unit that was there. Positions of
    /// every other unit are unchanged.
    pub fn replace(&mut self, index: usize, unit: Unit) -> Unit {
        core::mem::replace(&mut self.0[index], unit)
    }

    pub fn apply_rampage(&mut self) {
        for unit in self.0.iter_mut() {
            if unit.has_effect(EffectKind::Rampage) {
                unit.grow();
            }
        }
    }

    pub fn total_health(&self) -> i64 {
        self.0.iter().map(|u| i64::from(u.current_hp)).sum()
    }

    pub fn max_id(&self) -> Option<UnitId> {
        self.0.iter().map(|u| u.id).max()
    }

    /// Deep copy for the battle log.
    pub fn snapshot(&self) -> Vec<Unit> {
        self.0.clone()
    }
}

impl Index<usize> for Deck {
    type Output = Unit;

    fn index(&self, index: usize) -> &Unit {
        &self.0[index]
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Unit {
        &mut self.0[index]
    }
}
