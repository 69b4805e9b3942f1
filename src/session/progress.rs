//! Per-room progress bookkeeping.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PuzzleId;
use crate::world::Room;

/// What a player has done inside one room.
///
/// This is the record persistence works from: which puzzles the player
/// solved, how many hints each consumed, and which puzzle was active
/// when the room was last touched. Live puzzle flags on the [`Room`]
/// mirror this; the store layer reconciles the two on restore.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoomProgress {
    solved: FxHashMap<PuzzleId, bool>,
    hints_used: FxHashMap<PuzzleId, u32>,
    current_puzzle: Option<PuzzleId>,
}

impl RoomProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a puzzle's solved flag. Explicit false overwrites true.
    pub fn set_solved(&mut self, puzzle: PuzzleId, solved: bool) {
        self.solved.insert(puzzle, solved);
    }

    /// True only when the puzzle was recorded as solved.
    #[must_use]
    pub fn is_solved(&self, puzzle: PuzzleId) -> bool {
        self.solved.get(&puzzle).copied().unwrap_or(false)
    }

    /// Count one hint against a puzzle.
    pub fn add_hint(&mut self, puzzle: PuzzleId) {
        *self.hints_used.entry(puzzle).or_insert(0) += 1;
    }

    /// Overwrite a puzzle's hint count.
    pub fn set_hint_count(&mut self, puzzle: PuzzleId, count: u32) {
        self.hints_used.insert(puzzle, count);
    }

    /// Hints consumed by a puzzle. Zero when never recorded.
    #[must_use]
    pub fn hints_used(&self, puzzle: PuzzleId) -> u32 {
        self.hints_used.get(&puzzle).copied().unwrap_or(0)
    }

    /// Total hints consumed across a room's puzzles.
    #[must_use]
    pub fn room_hint_total(&self, room: &Room) -> u32 {
        room.puzzles().iter().map(|p| self.hints_used(p.id())).sum()
    }

    /// The puzzle that was active when this room was last played.
    #[must_use]
    pub fn current_puzzle(&self) -> Option<PuzzleId> {
        self.current_puzzle
    }

    pub fn set_current_puzzle(&mut self, puzzle: PuzzleId) {
        self.current_puzzle = Some(puzzle);
    }

    /// Recorded solved flags, in arbitrary order.
    pub fn solved_entries(&self) -> impl Iterator<Item = (PuzzleId, bool)> + '_ {
        self.solved.iter().map(|(&id, &solved)| (id, solved))
    }

    /// Recorded hint counts, in arbitrary order.
    pub fn hint_entries(&self) -> impl Iterator<Item = (PuzzleId, u32)> + '_ {
        self.hints_used.iter().map(|(&id, &count)| (id, count))
    }
}
