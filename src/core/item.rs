//! Items: keys, props, and anything else a room can hold.
//!
//! Items are plain data. Rooms and inventories never own them directly;
//! they store [`ItemId`]s that resolve against the game's item registry.

use serde::{Deserialize, Serialize};

use super::entity::ItemId;

/// Wear state of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemState {
    #[default]
    New,
    Used,
    Broken,
    Hidden,
}

impl ItemState {
    /// Parse from free text, case-insensitive. Unrecognized input maps to `New`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "USED" => Self::Used,
            "BROKEN" => Self::Broken,
            "HIDDEN" => Self::Hidden,
            _ => Self::New,
        }
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::New => "NEW",
            Self::Used => "USED",
            Self::Broken => "BROKEN",
            Self::Hidden => "HIDDEN",
        };
        f.write_str(name)
    }
}

/// A physical object in the facility.
///
/// `is_key` marks items that exist to open a lock; the unlock protocol
/// itself only compares ids, so the flag is descriptive, not load-bearing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier. Entity equality is id equality.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Display description, returned by `inspect`.
    pub description: String,

    /// Whether a player can pick this item up.
    pub portable: bool,

    /// Whether this item is a key for some lock.
    pub is_key: bool,

    /// Wear state.
    pub state: ItemState,
}

impl Item {
    /// Create a portable, non-key item in `New` state.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            portable: true,
            is_key: false,
            state: ItemState::New,
        }
    }

    /// Create a portable key item in `New` state.
    #[must_use]
    pub fn key(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            is_key: true,
            ..Self::new(id, name, description)
        }
    }

    /// Set whether the item can be carried.
    #[must_use]
    pub fn with_portable(mut self, portable: bool) -> Self {
        self.portable = portable;
        self
    }

    /// Set the wear state.
    #[must_use]
    pub fn with_state(mut self, state: ItemState) -> Self {
        self.state = state;
        self
    }

    /// Look the item over.
    #[must_use]
    pub fn inspect(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}
