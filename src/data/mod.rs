//! Persistence: game definitions and the player store.
//!
//! This is the only layer that touches the filesystem. The engine core
//! stays pure; everything here converts between live state and the two
//! JSON documents:
//!
//! - The game definition (`{ "games": [...] }`), read by [`load`] and
//!   written by [`save`]. Structure only, no play state beyond the
//!   remaining hint budgets.
//! - The player store (`{ "players": [...] }`), handled by [`players`].
//!   Per-username progress that [`players::apply`] can push back into a
//!   freshly built game.
//!
//! All fallible operations return [`DataResult`]; see [`error`].

pub mod document;
pub mod error;
pub mod load;
pub mod players;
pub mod save;

pub use document::{GameDoc, GamesDoc, ItemDoc, PuzzleDoc, RoomDoc};
pub use error::{DataError, DataResult};
pub use load::{games_from_str, load_games};
pub use players::{
    apply, capture, find_player, load_players, save_players, upsert_player, PlayerRecord,
    PlayersDoc, ProgressRecord,
};
pub use save::{games_to_string, save_game, save_games};
