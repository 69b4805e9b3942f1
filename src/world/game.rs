//! Game definitions: difficulty, lifecycle status, rooms, and runs.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{GameId, Item, ItemId, PlayerId, RoomId};

use super::registry::ItemRegistry;
use super::room::Room;

/// Difficulty setting. Controls the per-room hint budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Hints granted per room at this difficulty.
    #[must_use]
    pub fn hint_allowance(self) -> u32 {
        match self {
            Self::Easy => 3,
            Self::Medium => 2,
            Self::Hard => 1,
        }
    }

    /// Parse a difficulty token, case-insensitive. Unknown or missing
    /// values fall back to [`Difficulty::Medium`].
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "EASY" => Self::Easy,
            "HARD" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        };
        f.write_str(name)
    }
}

/// Lifecycle of a game definition within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Unique identifier for a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl RunId {
    /// Create a run ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Run({})", self.0)
    }
}

/// One finished playthrough on a game's leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: RunId,
    pub player_id: PlayerId,
    pub duration: Duration,
    pub success: bool,
    pub completed_at: DateTime<Utc>,
}

/// A complete escape game: rooms in clear order plus the item registry.
///
/// Rooms appear in authored order, which is also the intended clear
/// order. The registry owns every item definition; rooms and puzzles
/// hold [`ItemId`]s into it.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use escape_nexus::core::{GameId, RoomId};
/// use escape_nexus::world::{Difficulty, Game, GameStatus, Room};
///
/// let mut game = Game::new(
///     GameId::from_name("demo"),
///     "Demo Run",
///     "Two empty rooms.",
///     Difficulty::Medium,
///     Duration::from_secs(30 * 60),
///     1,
/// );
/// game.add_room(Room::new(RoomId::from_name("a"), "A", "First."));
/// game.add_room(Room::new(RoomId::from_name("b"), "B", "Second."));
///
/// game.start();
/// assert_eq!(game.status(), GameStatus::InProgress);
/// assert_eq!(game.first_room(), Some(RoomId::from_name("a")));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    title: String,
    description: String,
    difficulty: Difficulty,
    time_limit: Duration,
    max_players: u32,
    rooms: Vec<Room>,
    items: ItemRegistry,
    status: GameStatus,
    leaderboard: Vec<RunRecord>,
}

impl Game {
    /// Create a game with no rooms or items.
    #[must_use]
    pub fn new(
        id: GameId,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        time_limit: Duration,
        max_players: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            difficulty,
            time_limit,
            max_players,
            rooms: Vec::new(),
            items: ItemRegistry::new(),
            status: GameStatus::NotStarted,
            leaderboard: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The advisory time limit. Nothing in the engine enforces it; it is
    /// carried for display and persistence.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[must_use]
    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Mark the game in progress.
    pub fn start(&mut self) {
        self.status = GameStatus::InProgress;
    }

    /// Mark the game completed. Calling it again changes nothing.
    pub fn end(&mut self) {
        self.status = GameStatus::Completed;
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Register an item definition. The first definition of an id wins.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.items.register(item)
    }

    /// The item registry.
    #[must_use]
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    /// Resolve an item definition by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Rooms in authored (clear) order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id() == id)
    }

    /// The first room in clear order.
    #[must_use]
    pub fn first_room(&self) -> Option<RoomId> {
        self.rooms.first().map(Room::id)
    }

    /// The room immediately after `id` in clear order.
    #[must_use]
    pub fn room_after(&self, id: RoomId) -> Option<RoomId> {
        let position = self.rooms.iter().position(|r| r.id() == id)?;
        self.rooms.get(position + 1).map(Room::id)
    }

    /// The first uncleared room, recomputed from live puzzle state.
    #[must_use]
    pub fn advance_room(&self) -> Option<RoomId> {
        self.rooms.iter().find(|r| !r.is_cleared()).map(Room::id)
    }

    /// True when every room is cleared.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.rooms.iter().all(Room::is_cleared)
    }

    /// Reset every room's hint budget to the difficulty's allowance.
    pub fn apply_hint_allowance(&mut self, difficulty: Difficulty) {
        let allowance = difficulty.hint_allowance();
        for room in &mut self.rooms {
            room.set_hint_limit(allowance);
        }
    }

    /// Append a finished run to the leaderboard.
    pub fn record_run(&mut self, record: RunRecord) {
        self.leaderboard.push(record);
    }

    /// Finished runs in completion order.
    #[must_use]
    pub fn leaderboard(&self) -> &[RunRecord] {
        &self.leaderboard
    }

    /// Rebuild indexes after deserialization.
    pub fn reindex(&mut self) {
        self.items.reindex();
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Game {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PuzzleId;
    use crate::puzzles::{Attempt, Puzzle};

    fn game() -> Game {
        Game::new(
            GameId::from_name("test-game"),
            "Test Game",
            "For tests.",
            Difficulty::Medium,
            Duration::from_secs(30 * 60),
            1,
        )
    }

    fn room_with_riddle(room_name: &str, puzzle_name: &str) -> Room {
        let mut room = Room::new(RoomId::from_name(room_name), room_name, "A room.");
        room.add_puzzle(Puzzle::riddle(
            PuzzleId::from_name(puzzle_name),
            puzzle_name,
            "Say the word.",
            ["river"],
        ));
        room
    }

    #[test]
    fn test_difficulty_allowances() {
        assert_eq!(Difficulty::Easy.hint_allowance(), 3);
        assert_eq!(Difficulty::Medium.hint_allowance(), 2);
        assert_eq!(Difficulty::Hard.hint_allowance(), 1);
    }

    #[test]
    fn test_difficulty_parse_defaults_to_medium() {
        assert_eq!(Difficulty::parse("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::parse("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::parse(""), Difficulty::Medium);
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut game = game();
        assert_eq!(game.status(), GameStatus::NotStarted);
        game.start();
        assert_eq!(game.status(), GameStatus::InProgress);
        game.end();
        game.end();
        assert_eq!(game.status(), GameStatus::Completed);
    }

    #[test]
    fn test_room_after_follows_authored_order() {
        let mut game = game();
        game.add_room(room_with_riddle("first", "p1"));
        game.add_room(room_with_riddle("second", "p2"));

        let first = RoomId::from_name("first");
        let second = RoomId::from_name("second");
        assert_eq!(game.room_after(first), Some(second));
        assert_eq!(game.room_after(second), None);
        assert_eq!(game.room_after(RoomId::from_name("elsewhere")), None);
    }

    #[test]
    fn test_advance_room_skips_cleared_rooms() {
        let mut game = game();
        game.add_room(room_with_riddle("first", "p1"));
        game.add_room(room_with_riddle("second", "p2"));

        assert_eq!(game.advance_room(), Some(RoomId::from_name("first")));

        let first = RoomId::from_name("first");
        let solved = game
            .room_mut(first)
            .and_then(|r| r.puzzle_mut(PuzzleId::from_name("p1")))
            .is_some_and(|p| p.attempt(&Attempt::text("river")));
        assert!(solved);

        assert_eq!(game.advance_room(), Some(RoomId::from_name("second")));
        assert!(!game.is_cleared());

        let second = RoomId::from_name("second");
        let solved = game
            .room_mut(second)
            .and_then(|r| r.puzzle_mut(PuzzleId::from_name("p2")))
            .is_some_and(|p| p.attempt(&Attempt::text("river")));
        assert!(solved);

        assert_eq!(game.advance_room(), None);
        assert!(game.is_cleared());
    }

    #[test]
    fn test_apply_hint_allowance_resets_every_room() {
        let mut game = game();
        game.add_room(room_with_riddle("first", "p1"));
        game.add_room(room_with_riddle("second", "p2"));

        game.apply_hint_allowance(Difficulty::Easy);
        assert!(game.rooms().iter().all(|r| r.hint_limit() == 3));

        game.apply_hint_allowance(Difficulty::Hard);
        assert!(game.rooms().iter().all(|r| r.hint_limit() == 1));
    }

    #[test]
    fn test_item_lookup_goes_through_registry() {
        let mut game = game();
        let id = ItemId::from_name("brass-key");
        assert!(game.add_item(Item::key(id, "Brass Key", "Opens the vault.")));
        assert!(!game.add_item(Item::key(id, "Brass Key", "Duplicate.")));

        assert_eq!(game.item(id).map(|i| i.name.as_str()), Some("Brass Key"));
        assert!(game.item(ItemId::from_name("missing")).is_none());
    }

    #[test]
    fn test_reindex_restores_lookup_after_serde() {
        let mut game = game();
        let id = ItemId::from_name("brass-key");
        game.add_item(Item::key(id, "Brass Key", "Opens the vault."));

        let json = serde_json::to_string(&game).unwrap();
        let mut restored: Game = serde_json::from_str(&json).unwrap();
        assert!(restored.item(id).is_none());

        restored.reindex();
        let name = restored.item(id).map(|i| i.name.as_str());
        assert_eq!(name, Some("Brass Key"));
    }

    #[test]
    fn test_leaderboard_keeps_completion_order() {
        let mut game = game();
        let record = |n: u64| RunRecord {
            id: RunId::new(n),
            player_id: PlayerId::from_name("nova"),
            duration: Duration::from_secs(60 * n),
            success: true,
            completed_at: Utc::now(),
        };
        game.record_run(record(1));
        game.record_run(record(2));

        let ids: Vec<_> = game.leaderboard().iter().map(|r| r.id).collect();
        assert_eq!(ids, [RunId::new(1), RunId::new(2)]);
    }
}
