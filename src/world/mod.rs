//! World model: games, rooms, and the item registry.
//!
//! ## Key Types
//!
//! - `Game`: Rooms in clear order, item registry, status, leaderboard
//! - `Room`: Puzzles, placed items, lock state, hint budget
//! - `ItemRegistry`: Authoritative item definitions, id-addressed
//! - `Difficulty` / `GameStatus`: Tuning and lifecycle enums
//! - `RunRecord`: One finished playthrough
//!
//! Rooms and puzzles never own items; they hold [`crate::core::ItemId`]s
//! resolved against the game's registry.

pub mod game;
pub mod registry;
pub mod room;

pub use game::{Difficulty, Game, GameStatus, RunId, RunRecord};
pub use registry::ItemRegistry;
pub use room::Room;
