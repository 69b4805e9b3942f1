//! The player: identity, difficulty, inventory, and room placement.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Inventory, Item, PlayerId, RoomId};
use crate::world::Difficulty;

use super::progress::RoomProgress;

/// A player and everything they carry between rooms.
///
/// The id is derived from the username, so the same name always maps to
/// the same player across sessions and store files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    username: String,
    difficulty: Difficulty,
    inventory: Inventory,
    current_room: Option<RoomId>,
    progress: FxHashMap<RoomId, RoomProgress>,
}

impl Player {
    /// Create a player at medium difficulty, placed nowhere.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id: PlayerId::from_name(&username),
            username,
            difficulty: Difficulty::Medium,
            inventory: Inventory::new(),
            current_room: None,
            progress: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Where the player currently stands.
    #[must_use]
    pub fn current_room(&self) -> Option<RoomId> {
        self.current_room
    }

    /// Move to a room, opening a progress record for it if none exists.
    pub fn move_to(&mut self, room: RoomId) {
        self.current_room = Some(room);
        self.progress.entry(room).or_default();
    }

    /// Pick up an item. Only portable items can be carried; duplicates
    /// are rejected.
    pub fn pick_up(&mut self, item: &Item) -> bool {
        if !item.portable {
            return false;
        }
        self.inventory.add(item.id)
    }

    /// Progress for a room, if the player has been there.
    #[must_use]
    pub fn progress(&self, room: RoomId) -> Option<&RoomProgress> {
        self.progress.get(&room)
    }

    /// Progress for a room, created on first touch.
    pub fn progress_mut(&mut self, room: RoomId) -> &mut RoomProgress {
        self.progress.entry(room).or_default()
    }

    /// Overwrite a room's progress record.
    pub fn put_progress(&mut self, room: RoomId, progress: RoomProgress) {
        self.progress.insert(room, progress);
    }

    /// All progress records, in arbitrary order.
    pub fn progress_entries(&self) -> impl Iterator<Item = (RoomId, &RoomProgress)> {
        self.progress.iter().map(|(&id, p)| (id, p))
    }

    /// Forget every progress record. Placement and inventory stay.
    pub fn clear_progress(&mut self) {
        self.progress.clear();
    }
}
