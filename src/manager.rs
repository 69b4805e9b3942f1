//! Session orchestration: the one front door for a running process.
//!
//! [`SessionManager`] owns the optional live [`Session`], the master RNG
//! that seeds each run, and the two store paths. Everything a driver
//! loop needs goes through here: starting runs, routing attempts and
//! hint requests, saving and loading, and switching players.
//!
//! The manager keeps the error taxonomy of the layers below: game rules
//! answer in bools and sentinel strings, only file I/O returns
//! [`DataResult`]. Persistence during `quit` and `switch_player` is
//! best-effort; failures log at warn and the session still closes.
//!
//! # Example
//!
//! ```
//! use escape_nexus::manager::SessionManager;
//! use escape_nexus::world::Difficulty;
//!
//! let mut manager = SessionManager::new(7);
//! assert!(manager.start_new("nova", Difficulty::Medium));
//! assert!(manager.session().is_some());
//! assert!(manager.show_sequence().is_some());
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::core::GameRng;
use crate::data::{self, players, DataError, DataResult};
use crate::games::build_default_game;
use crate::puzzles::{Attempt, Color};
use crate::session::{Player, Session, NO_HINTS_AVAILABLE};
use crate::world::{Difficulty, GameStatus, RunId, RunRecord};

/// Where the game definition lands when no path is configured.
pub const DEFAULT_SAVE_PATH: &str = "saves/current-game.json";

/// Where player records land when no path is configured.
pub const DEFAULT_PLAYERS_PATH: &str = "saves/players.json";

/// Owns the live session and its persistence plumbing.
#[derive(Debug)]
pub struct SessionManager {
    session: Option<Session>,
    rng: GameRng,
    save_path: PathBuf,
    players_path: PathBuf,
    started_at: DateTime<Utc>,
}

impl SessionManager {
    /// Create a manager with default store paths. `seed` drives every
    /// run this manager starts.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            session: None,
            rng: GameRng::new(seed),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            players_path: PathBuf::from(DEFAULT_PLAYERS_PATH),
            started_at: Utc::now(),
        }
    }

    /// Override the game save location.
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Override the player store location.
    #[must_use]
    pub fn with_players_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.players_path = path.into();
        self
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// Start a fresh run for `username` at `difficulty`.
    ///
    /// The built-in facility is rebuilt with a forked seed and started,
    /// and any stored progress for the username is applied before the
    /// session binds. A blank username refuses.
    pub fn start_new(&mut self, username: &str, difficulty: Difficulty) -> bool {
        let username = username.trim();
        if username.is_empty() {
            return false;
        }

        let mut player = Player::new(username);
        player.set_difficulty(difficulty);
        let mut game = build_default_game(difficulty, self.rng.fork().seed());
        game.start();

        match players::load_players(&self.players_path) {
            Ok(records) => {
                if let Some(record) = players::find_player(&records, username) {
                    players::apply(record, &mut player, &mut game);
                }
            }
            Err(error) => tracing::warn!(error = %error, "failed to read player store"),
        }

        tracing::info!(player = %username, %difficulty, "session started");
        self.session = Some(Session::new(player, game));
        self.started_at = Utc::now();
        true
    }

    /// Load the default save file into the current session.
    ///
    /// A missing file is not an error: the built-in facility stands in,
    /// rebuilt at the player's difficulty with a fresh seed. An existing
    /// but empty library falls back the same way. Corrupt JSON surfaces
    /// as the one real error. Returns `Ok(false)` when no session is
    /// bound.
    pub fn load_default(&mut self) -> DataResult<bool> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };

        let loaded = if self.save_path.exists() {
            data::load_games(&self.save_path)?.into_iter().next()
        } else {
            None
        };
        let game = match loaded {
            Some(game) => game,
            None => build_default_game(session.player().difficulty(), self.rng.fork().seed()),
        };

        session.replace_game(game);
        Ok(true)
    }

    /// Load a specific save file, which must define at least one game.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> DataResult<bool> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        let path = path.as_ref();

        let Some(game) = data::load_games(path)?.into_iter().next() else {
            return Err(DataError::Empty {
                path: path.to_path_buf(),
            });
        };

        session.replace_game(game);
        Ok(true)
    }

    /// Write the current game to the default save location.
    pub fn save_default(&self) -> DataResult<bool> {
        self.save_to(&self.save_path)
    }

    /// Write the current game, remaining hint budgets included, to
    /// `path`. Returns `Ok(false)` when no session is bound.
    pub fn save_to(&self, path: impl AsRef<Path>) -> DataResult<bool> {
        let Some(session) = self.session.as_ref() else {
            return Ok(false);
        };
        data::save_game(path, session.game())?;
        Ok(true)
    }

    /// Route an attempt to the active puzzle.
    ///
    /// When the attempt clears the last room, the game ends and the run
    /// lands on the leaderboard. Without a session this is false, same
    /// as a wrong answer.
    pub fn attempt_current(&mut self, input: &Attempt) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let hit = session.attempt_current(input);
        if hit
            && session.is_facility_cleared()
            && session.game().status() != GameStatus::Completed
        {
            session.game_mut().end();
            let record = RunRecord {
                id: RunId::new(self.rng.gen_u64()),
                player_id: session.player().id(),
                duration: (Utc::now() - self.started_at).to_std().unwrap_or_default(),
                success: true,
                completed_at: Utc::now(),
            };
            tracing::info!(player = %session.player().username(), "facility cleared");
            session.game_mut().record_run(record);
        }
        hit
    }

    /// Ask for a hint on the active puzzle. Without a session there is
    /// nothing to hint about.
    pub fn request_hint(&mut self) -> String {
        match self.session.as_mut() {
            Some(session) => session.request_hint(),
            None => NO_HINTS_AVAILABLE.to_string(),
        }
    }

    /// The current light sequence, when the active puzzle is one.
    #[must_use]
    pub fn show_sequence(&self) -> Option<&[Color]> {
        self.session.as_ref()?.show_sequence()
    }

    /// Persist the current run and start one for another player.
    pub fn switch_player(&mut self, username: &str, difficulty: Difficulty) -> bool {
        self.persist_current();
        self.start_new(username, difficulty)
    }

    /// Persist the current run and unbind the session. False when no
    /// session was open.
    pub fn quit(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        self.persist_current();
        self.session = None;
        true
    }

    /// Basic instructions for a driver loop to present.
    #[must_use]
    pub fn instructions(&self) -> &'static str {
        "Solve puzzles in each room. Use hints wisely based on difficulty. \
         Keys from puzzles unlock subsequent rooms."
    }

    /// Push the live session into both stores; failures log at warn.
    fn persist_current(&self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let record = players::capture(session.player(), session.game());
        match players::load_players(&self.players_path) {
            Ok(mut records) => {
                players::upsert_player(&mut records, record);
                if let Err(error) = players::save_players(&self.players_path, &records) {
                    tracing::warn!(error = %error, "failed to write player store");
                }
            }
            Err(error) => tracing::warn!(error = %error, "failed to read player store"),
        }

        if let Err(error) = data::save_game(&self.save_path, session.game()) {
            tracing::warn!(error = %error, "failed to write game save");
        }
    }
}
