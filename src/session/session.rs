//! A live playthrough: one player bound to one game.

use serde::{Deserialize, Serialize};

use crate::core::RoomId;
use crate::puzzles::{Attempt, Color, Puzzle};
use crate::world::{Game, Room};

use super::player::Player;

/// Reply when the room's hint budget is exhausted.
pub const NO_HINTS_LEFT: &str = "No hints left.";

/// Reply when there is nothing to hint about.
pub const NO_HINTS_AVAILABLE: &str = "No hints available.";

/// One player working through one game.
///
/// The session owns both sides and is the only place attempt and hint
/// rules run. The active puzzle is always the first puzzle of the
/// player's current room.
///
/// # Example
///
/// ```
/// use escape_nexus::games::build_default_game;
/// use escape_nexus::session::{Player, Session};
/// use escape_nexus::world::Difficulty;
///
/// let mut player = Player::new("nova");
/// player.set_difficulty(Difficulty::Easy);
/// let game = build_default_game(Difficulty::Easy, 7);
///
/// let session = Session::new(player, game);
/// assert!(session.current_room().is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    player: Player,
    game: Game,
}

impl Session {
    /// Bind a player to a game. An unplaced player starts in the game's
    /// first room; hint budgets and locks are taken as the game provides
    /// them, so a restored save keeps its spent budgets.
    #[must_use]
    pub fn new(player: Player, game: Game) -> Self {
        let mut session = Self { player, game };
        if session.player.current_room().is_none() {
            if let Some(first) = session.game.first_room() {
                session.player.move_to(first);
            }
        }
        session
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Swap in a different game, keeping the player. Hint budgets reset
    /// to the player's difficulty and the player restarts in the first
    /// room; their progress records survive.
    pub fn replace_game(&mut self, game: Game) {
        self.game = game;
        self.game.apply_hint_allowance(self.player.difficulty());
        if let Some(first) = self.game.first_room() {
            self.player.move_to(first);
        }
    }

    /// The room the player is standing in.
    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.game.room(self.player.current_room()?)
    }

    /// The active puzzle: the first puzzle of the current room.
    #[must_use]
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current_room()?.puzzles().first()
    }

    /// True when every room in the facility is cleared.
    #[must_use]
    pub fn is_facility_cleared(&self) -> bool {
        self.game.is_cleared()
    }

    /// Apply an attempt to the active puzzle.
    ///
    /// On success the puzzle is recorded solved in the room's progress,
    /// its key (if any) lands in the inventory and unlocks the next room
    /// in clear order, and a cleared room advances the player to the
    /// first uncleared room. Returns false when there is nothing to
    /// attempt or the input missed.
    pub fn attempt_current(&mut self, input: &Attempt) -> bool {
        let Some(room_id) = self.player.current_room() else {
            return false;
        };
        let Some(room) = self.game.room_mut(room_id) else {
            return false;
        };
        let Some(puzzle) = room.puzzles_mut().first_mut() else {
            return false;
        };

        let puzzle_id = puzzle.id();
        if !puzzle.attempt(input) {
            return false;
        }
        let key_provided = puzzle.key_provided();

        self.player.progress_mut(room_id).set_solved(puzzle_id, true);

        if let Some(key) = key_provided {
            if let Some(item) = self.game.item(key) {
                self.player.pick_up(item);
            }
            if let Some(next_id) = self.game.room_after(room_id) {
                if let Some(next) = self.game.room_mut(next_id) {
                    next.unlock(key);
                }
            }
        }

        let cleared = self.game.room(room_id).is_some_and(Room::is_cleared);
        if cleared {
            if let Some(next) = self.game.advance_room() {
                if next != room_id {
                    self.player.move_to(next);
                }
            }
        }

        true
    }

    /// Ask for a hint on the active puzzle.
    ///
    /// Hints draw down the room's shared budget. The reply is always
    /// display text: an authored hint, the kind's standing guidance once
    /// authored hints run out, or one of the two refusal lines.
    pub fn request_hint(&mut self) -> String {
        match self.player.current_room() {
            Some(room_id) => self.request_hint_in(room_id),
            None => NO_HINTS_AVAILABLE.to_string(),
        }
    }

    /// Ask for a hint on a specific room's active puzzle.
    pub fn request_hint_in(&mut self, room_id: RoomId) -> String {
        let Some(room) = self.game.room_mut(room_id) else {
            return NO_HINTS_AVAILABLE.to_string();
        };
        let Some(puzzle_id) = room.puzzles().first().map(Puzzle::id) else {
            return NO_HINTS_AVAILABLE.to_string();
        };

        let progress = self.player.progress_mut(room_id);
        if progress.current_puzzle().is_none() {
            progress.set_current_puzzle(puzzle_id);
        }

        if !room.take_hint() {
            return NO_HINTS_LEFT.to_string();
        }
        progress.add_hint(puzzle_id);

        match room.puzzles_mut().first_mut() {
            Some(puzzle) => puzzle.next_hint().to_string(),
            None => NO_HINTS_AVAILABLE.to_string(),
        }
    }

    /// The current light sequence, when the active puzzle is a sequence.
    #[must_use]
    pub fn show_sequence(&self) -> Option<&[Color]> {
        let state = self.current_puzzle()?.kind().as_sequence()?;
        Some(state.current_sequence())
    }

    /// Wipe the player's progress records and inventory. Live puzzle
    /// state and room locks are untouched.
    pub fn reset_progress(&mut self) {
        self.player.clear_progress();
        self.player.inventory_mut().clear();
    }
}
