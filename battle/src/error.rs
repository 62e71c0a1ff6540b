//! Error types for battle setup
//!
//! Resolution itself cannot fail. These errors cover the checks a caller runs
//! while turning card data into two decks, using plain enums so they stay
//! no_std compatible and SCALE encodable.

use alloc::string::String;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

use crate::types::{CardId, Side, UnitId};

/// Errors raised while preparing decks for a battle
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "type", rename_all = "camelCase"))]
pub enum SetupError {
    /// One side has no units to fight with
    EmptyDeck { side: Side },
    /// Deck references a card type the catalog does not know
    UnknownCard { card_id: CardId },
    /// Two units across the decks share an id
    DuplicateUnitId { id: UnitId },
    /// Unit id too close to the top of the id space to leave room for spawns
    UnitIdOutOfRange { id: UnitId },
    /// No bot deck is registered under this name
    UnknownDungeon { name: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyDeck { side } => write!(f, "{} deck is empty", side),
            SetupError::UnknownCard { card_id } => write!(f, "unknown card '{}'", card_id),
            SetupError::DuplicateUnitId { id } => write!(f, "unit id {} is used twice", id),
            SetupError::UnitIdOutOfRange { id } => write!(f, "unit id {} is too large", id),
            SetupError::UnknownDungeon { name } => write!(f, "invalid dungeon '{}'", name),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

/// Result type alias for battle setup
pub type SetupResult<T> = Result<T, SetupError>;
