//! # escape-nexus
//!
//! A single-player room-escape engine: a facility of sequential rooms,
//! each gated by a puzzle, cleared in order under a limited hint budget
//! while keys produced by puzzles unlock the doors ahead.
//!
//! ## Design Principles
//!
//! 1. **Ids over references**: rooms, items, and puzzles live in arenas
//!    and point at each other with copyable ids. No shared ownership.
//!
//! 2. **Derived, never stored**: room clearing, unlock eligibility, and
//!    player placement recompute from puzzle state on demand.
//!
//! 3. **Pure core, thin edges**: game rules answer in bools, options,
//!    and sentinel strings. Only the persistence layer touches the
//!    filesystem and returns `Result`.
//!
//! ## Modules
//!
//! - `core`: entity ids, items, inventories, deterministic RNG
//! - `puzzles`: the three puzzle kinds and the attempt/hint protocol
//! - `world`: rooms, games, difficulty, the run leaderboard
//! - `session`: one player bound to one game; attempts, hints, progress
//! - `data`: JSON persistence for game definitions and player records
//! - `games`: the built-in three-room facility
//! - `manager`: session orchestration and store plumbing

pub mod core;
pub mod puzzles;
pub mod world;
pub mod session;
pub mod data;
pub mod games;
pub mod manager;

// Re-export commonly used types
pub use crate::core::{
    GameId, GameRng, GameRngState, Inventory, Item, ItemId, ItemState, PlayerId, PuzzleId, RoomId,
};

pub use crate::puzzles::{Attempt, Color, Puzzle, PuzzleKind};

pub use crate::world::{Difficulty, Game, GameStatus, Room, RunId, RunRecord};

pub use crate::session::{Player, RoomProgress, Session, NO_HINTS_AVAILABLE, NO_HINTS_LEFT};

pub use crate::data::{DataError, DataResult, PlayerRecord};

pub use crate::games::build_default_game;

pub use crate::manager::SessionManager;
