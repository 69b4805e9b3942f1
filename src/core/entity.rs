//! Entity identification system.
//!
//! Every world object (item, puzzle, room, game, player) has a typed id.
//! Ids are plain `u64` newtypes: cheap to copy, hashable, and safe to
//! store as cross-references without borrowing the entity graph.
//!
//! ## Construction
//!
//! Ids come from two places: explicit raw values (`ItemId::new(7)`), or
//! stable derivation from a name or external ref string
//! (`ItemId::from_name("Cryo Bay Access Key")`). The same string always
//! produces the same id, which is what keeps key linkage intact across
//! save/load.
//!
//! ## Usage
//!
//! ```
//! use escape_nexus::core::ItemId;
//!
//! let a = ItemId::from_name("Core Vault Key");
//! let b = ItemId::from_name("Core Vault Key");
//! assert_eq!(a, b);
//! assert_ne!(a, ItemId::from_name("Cryo Bay Access Key"));
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// Stable hash of a name/ref string, used for deterministic id derivation.
///
/// FxHasher is keyed by nothing, so the mapping is identical across runs
/// and platforms with the same pointer width behavior for `str`.
pub(crate) fn stable_hash(name: &str) -> u64 {
    let mut hasher = FxHasher::default();
    name.hash(&mut hasher);
    hasher.finish()
}

/// Unique identifier for an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create an item ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive an item ID deterministically from a name or ref string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(stable_hash(name))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Unique identifier for a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PuzzleId(pub u64);

impl PuzzleId {
    /// Create a puzzle ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive a puzzle ID deterministically from a title or ref string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(stable_hash(name))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PuzzleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Puzzle({})", self.0)
    }
}

/// Unique identifier for a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u64);

impl RoomId {
    /// Create a room ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive a room ID deterministically from a name or ref string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(stable_hash(name))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for RoomId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// Unique identifier for a game definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a game ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive a game ID deterministically from a title or ref string.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(stable_hash(name))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Unique identifier for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a player ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Derive a player ID deterministically from a username.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(stable_hash(name))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}
