//! Item registry for definition lookup.
//!
//! The `ItemRegistry` is the authoritative owner of item definitions for
//! a game. Rooms and puzzles refer to items by [`ItemId`] and resolve
//! them here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Item, ItemId};

/// Registry of item definitions.
///
/// Keeps insertion order so save files and room listings come out the
/// way the content was authored.
///
/// ## Example
///
/// ```
/// use escape_nexus::core::{Item, ItemId};
/// use escape_nexus::world::ItemRegistry;
///
/// let mut registry = ItemRegistry::new();
/// let id = ItemId::from_name("brass-key");
/// registry.register(Item::key(id, "Brass Key", "Opens the vault door."));
///
/// assert_eq!(registry.get(id).map(|i| i.name.as_str()), Some("Brass Key"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemRegistry {
    items: Vec<Item>,
    #[serde(skip)]
    index: FxHashMap<ItemId, usize>,
}

impl ItemRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item definition. The first definition of an id wins;
    /// re-registrations are rejected and reported as `false`.
    pub fn register(&mut self, item: Item) -> bool {
        if self.index.contains_key(&item.id) {
            return false;
        }
        self.index.insert(item.id, self.items.len());
        self.items.push(item);
        true
    }

    /// Get an item definition by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&slot| &self.items[slot])
    }

    /// Get a mutable item definition by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.index.get(&id).map(|&slot| &mut self.items[slot])
    }

    /// Check if an item id is registered.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over item definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Rebuild the id index after deserialization.
    pub(crate) fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(slot, item)| (item.id, slot))
            .collect();
    }
}
