//! Session layer: players and live playthroughs.
//!
//! ## Key Types
//!
//! - `Player`: Identity, difficulty, inventory, room placement
//! - `RoomProgress`: Per-room solved flags and hint counts
//! - `Session`: One player bound to one game; runs attempts and hints
//!
//! ## Progress vs. Live State
//!
//! Puzzles carry a live solved flag; [`RoomProgress`] carries the
//! durable record. Attempts write both. The store layer reconciles the
//! two when a saved player rejoins a game.

pub mod player;
pub mod progress;
pub mod session;

pub use player::Player;
pub use progress::RoomProgress;
pub use session::{Session, NO_HINTS_AVAILABLE, NO_HINTS_LEFT};
