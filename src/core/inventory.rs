//! Player inventory: an id-unique, insertion-ordered collection of items.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::ItemId;

/// A collection of item ids held by a player.
///
/// Adding is idempotent per id, and iteration preserves the order items
/// were picked up in. Sized for the common case of a handful of keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: SmallVec<[ItemId; 4]>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns false if it is already held.
    pub fn add(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Remove an item. Returns false if it was not held.
    pub fn remove(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|held| *held == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether an item is held.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    /// Held items in pickup order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of held items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
