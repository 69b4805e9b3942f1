//! Rooms: puzzle containers with a lock and a hint budget.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ItemId, PuzzleId, RoomId};
use crate::puzzles::Puzzle;

/// One room in an escape game.
///
/// A room holds puzzles, placed items (by id, resolved against the game
/// registry), an optional lock keyed to an item, and the remaining hint
/// budget for the room. The room is cleared when every puzzle in it is
/// solved; a room with no puzzles counts as cleared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    description: String,
    puzzles: Vec<Puzzle>,
    items: SmallVec<[ItemId; 4]>,
    locked: bool,
    key_required: Option<ItemId>,
    hint_limit: u32,
}

impl Room {
    /// Create an unlocked room with no puzzles and an empty hint budget.
    #[must_use]
    pub fn new(id: RoomId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            puzzles: Vec::new(),
            items: SmallVec::new(),
            locked: false,
            key_required: None,
            hint_limit: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzles.push(puzzle);
    }

    /// Place an item in the room. Duplicate placements are ignored.
    pub fn add_item(&mut self, item: ItemId) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    /// Ids of items placed in the room.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// The puzzles in attempt order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn puzzles_mut(&mut self) -> &mut [Puzzle] {
        &mut self.puzzles
    }

    /// Look up a puzzle by id.
    #[must_use]
    pub fn puzzle(&self, id: PuzzleId) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id() == id)
    }

    pub fn puzzle_mut(&mut self, id: PuzzleId) -> Option<&mut Puzzle> {
        self.puzzles.iter_mut().find(|p| p.id() == id)
    }

    /// Look up a puzzle by title, case-insensitive.
    #[must_use]
    pub fn find_puzzle(&self, title: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.title().eq_ignore_ascii_case(title))
    }

    /// True when every puzzle is solved. Vacuously true with no puzzles.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.puzzles.iter().all(Puzzle::is_solved)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// The key that opens this room, if it locks at all.
    #[must_use]
    pub fn key_required(&self) -> Option<ItemId> {
        self.key_required
    }

    pub fn set_key_required(&mut self, key: ItemId) {
        self.key_required = Some(key);
    }

    /// Try to unlock the room with a key. Succeeds only when the room is
    /// currently locked, requires a key, and the offered key matches.
    pub fn unlock(&mut self, key: ItemId) -> bool {
        if !self.locked {
            return false;
        }
        match self.key_required {
            Some(required) if required == key => {
                self.locked = false;
                true
            }
            _ => false,
        }
    }

    /// Hints left in the room budget.
    #[must_use]
    pub fn hint_limit(&self) -> u32 {
        self.hint_limit
    }

    pub fn set_hint_limit(&mut self, limit: u32) {
        self.hint_limit = limit;
    }

    /// Consume one hint from the budget. Returns false when exhausted.
    pub fn take_hint(&mut self) -> bool {
        if self.hint_limit == 0 {
            return false;
        }
        self.hint_limit -= 1;
        true
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleId;
    use crate::puzzles::Attempt;

    fn room() -> Room {
        Room::new(RoomId::from_name("test-room"), "Test Room", "A bare room.")
    }

    fn riddle(name: &str) -> Puzzle {
        Puzzle::riddle(PuzzleId::from_name(name), name, "Say the word.", ["river"])
    }

    #[test]
    fn test_empty_room_is_cleared() {
        assert!(room().is_cleared());
    }

    #[test]
    fn test_cleared_requires_every_puzzle_solved() {
        let mut room = room();
        room.add_puzzle(riddle("first"));
        room.add_puzzle(riddle("second"));
        assert!(!room.is_cleared());

        let first = PuzzleId::from_name("first");
        assert!(room.puzzle_mut(first).is_some_and(|p| p.attempt(&Attempt::text("river"))));
        assert!(!room.is_cleared());

        let second = PuzzleId::from_name("second");
        assert!(room.puzzle_mut(second).is_some_and(|p| p.attempt(&Attempt::text("river"))));
        assert!(room.is_cleared());
    }

    #[test]
    fn test_find_puzzle_is_case_insensitive() {
        let mut room = room();
        room.add_puzzle(riddle("Voice Lock"));
        assert!(room.find_puzzle("voice lock").is_some());
        assert!(room.find_puzzle("VOICE LOCK").is_some());
        assert!(room.find_puzzle("silent lock").is_none());
    }

    #[test]
    fn test_unlock_needs_lock_key_and_match() {
        let key = ItemId::from_name("brass-key");
        let wrong = ItemId::from_name("tin-key");

        let mut open = room();
        assert!(!open.unlock(key));

        let mut keyless = room();
        keyless.set_locked(true);
        assert!(!keyless.unlock(key));
        assert!(keyless.is_locked());

        let mut locked = room();
        locked.set_locked(true);
        locked.set_key_required(key);
        assert!(!locked.unlock(wrong));
        assert!(locked.is_locked());
        assert!(locked.unlock(key));
        assert!(!locked.is_locked());
        assert!(!locked.unlock(key));
    }

    #[test]
    fn test_take_hint_counts_down_to_zero() {
        let mut room = room();
        room.set_hint_limit(2);
        assert!(room.take_hint());
        assert!(room.take_hint());
        assert!(!room.take_hint());
        assert_eq!(room.hint_limit(), 0);
    }

    #[test]
    fn test_duplicate_item_placement_is_ignored() {
        let mut room = room();
        let lantern = ItemId::from_name("lantern");
        room.add_item(lantern);
        room.add_item(lantern);
        assert_eq!(room.items(), [lantern]);
    }
}
