//! Game-definition saving: live [`Game`] values out to the JSON the
//! loader reads.
//!
//! Ids are written as decimal strings of the raw id values. The loader
//! re-derives ids from those strings, so raw values change across a
//! round trip while every reference keeps pointing where it pointed.
//! Live play state is not written here: puzzle solved flags and hint
//! spends belong to the player store. Room hint budgets are the one
//! exception, they serialize at their current remaining value.

use std::path::Path;

use crate::core::Item;
use crate::puzzles::{Puzzle, PuzzleKind};
use crate::world::{Game, Room};

use super::document::{GameDoc, GamesDoc, ItemDoc, PuzzleDoc, RoomDoc};
use super::error::DataResult;

/// Write one game as a complete definition file.
pub fn save_game(path: impl AsRef<Path>, game: &Game) -> DataResult<()> {
    save_games(path, std::slice::from_ref(game))
}

/// Write a definition file holding every given game, creating parent
/// directories as needed.
pub fn save_games(path: impl AsRef<Path>, games: &[Game]) -> DataResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, games_to_string(games)?)?;
    Ok(())
}

/// Render games as a pretty-printed definition document.
pub fn games_to_string(games: &[Game]) -> DataResult<String> {
    let doc = GamesDoc {
        games: games.iter().map(game_to_doc).collect(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn game_to_doc(game: &Game) -> GameDoc {
    GameDoc {
        id: Some(game.id().raw().to_string()),
        title: game.title().to_string(),
        description: game.description().to_string(),
        difficulty: Some(game.difficulty().to_string()),
        time_limit_minutes: Some(game.time_limit().as_secs() / 60),
        max_players: Some(game.max_players()),
        items: game.items().iter().map(item_to_doc).collect(),
        rooms: game.rooms().iter().map(room_to_doc).collect(),
    }
}

fn item_to_doc(item: &Item) -> ItemDoc {
    ItemDoc {
        id: Some(item.id.raw().to_string()),
        name: item.name.clone(),
        description: item.description.clone(),
        portable: Some(item.portable),
        key: Some(item.is_key),
        state: Some(item.state.to_string()),
    }
}

fn room_to_doc(room: &Room) -> RoomDoc {
    RoomDoc {
        id: Some(room.id().raw().to_string()),
        name: room.name().to_string(),
        description: room.description().to_string(),
        locked: Some(room.is_locked()),
        hint_limit: Some(i64::from(room.hint_limit())),
        key_required: room.key_required().map(|id| id.raw().to_string()),
        items: room.items().iter().map(|id| id.raw().to_string()).collect(),
        puzzles: room.puzzles().iter().map(puzzle_to_doc).collect(),
    }
}

fn puzzle_to_doc(puzzle: &Puzzle) -> PuzzleDoc {
    let mut doc = PuzzleDoc {
        id: Some(puzzle.id().raw().to_string()),
        title: puzzle.title().to_string(),
        description: puzzle.description().to_string(),
        hints: puzzle.hints().to_vec(),
        key_provided: puzzle.key_provided().map(|id| id.raw().to_string()),
        ..PuzzleDoc::default()
    };

    match puzzle.kind() {
        PuzzleKind::Sequence(state) => {
            doc.kind = Some("sequence".to_string());
            doc.rounds = Some(state.total_rounds() as u32);
            doc.seed = Some(state.seed());
        }
        PuzzleKind::Riddle(state) => {
            doc.kind = Some("riddle".to_string());
            doc.answers = state.answers().to_vec();
        }
        PuzzleKind::Arithmetic(state) => {
            doc.kind = Some("math".to_string());
            doc.answer = Some(state.answer());
            doc.tolerance = Some(state.tolerance());
        }
    }

    doc
}
