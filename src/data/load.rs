//! Game-definition loading: lenient JSON in, live [`Game`] values out.
//!
//! Only malformed JSON is an error. Everything else degrades record by
//! record: a game without a title is skipped, an item reference nothing
//! declares is dropped, a puzzle with no usable type becomes a riddle
//! that accepts nothing. Every skip logs at debug so bad documents can
//! be diagnosed without failing the load.
//!
//! Ids are re-derived from the document's ref strings (or display names
//! when absent), so the same ref always lands on the same id and key
//! linkage holds within and across documents.

use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::core::{GameId, Item, ItemId, ItemState, PuzzleId, RoomId};
use crate::puzzles::{ArithmeticState, Puzzle, PuzzleKind, RiddleState, SequenceState};
use crate::world::{Difficulty, Game, Room};

use super::document::{GameDoc, ItemDoc, PuzzleDoc, RoomDoc};
use super::error::DataResult;

/// Play budget when a document does not set one, in minutes.
const DEFAULT_TIME_LIMIT_MINUTES: u64 = 30;

/// Load every game defined in the file at `path`.
pub fn load_games(path: impl AsRef<Path>) -> DataResult<Vec<Game>> {
    let text = std::fs::read_to_string(path)?;
    games_from_str(&text)
}

/// Parse games out of a JSON document string.
pub fn games_from_str(text: &str) -> DataResult<Vec<Game>> {
    let value: Value = serde_json::from_str(text)?;
    Ok(games_from_value(&value))
}

/// A document without a `games` array defines no games; that is not an
/// error, it is an empty library.
fn games_from_value(value: &Value) -> Vec<Game> {
    let Some(entries) = value.get("games").and_then(Value::as_array) else {
        tracing::debug!("document has no games array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<GameDoc>(entry.clone()) {
            Ok(doc) => build_game(&doc),
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed game record");
                None
            }
        })
        .collect()
}

fn build_game(doc: &GameDoc) -> Option<Game> {
    let title = doc.title.trim();
    if title.is_empty() {
        tracing::debug!("skipping game record with no title");
        return None;
    }

    let difficulty = doc.difficulty.as_deref().map(Difficulty::parse).unwrap_or_default();
    let minutes = doc.time_limit_minutes.unwrap_or(DEFAULT_TIME_LIMIT_MINUTES);
    let mut game = Game::new(
        GameId::from_name(ref_or(doc.id.as_deref(), title)),
        title,
        doc.description.clone(),
        difficulty,
        Duration::from_secs(minutes * 60),
        doc.max_players.unwrap_or(1),
    );

    // Items first: rooms and puzzles resolve against their ref strings.
    let mut refs: FxHashMap<&str, ItemId> = FxHashMap::default();
    for item_doc in &doc.items {
        let Some(item) = build_item(item_doc) else {
            continue;
        };
        if let Some(key) = item_doc.id.as_deref() {
            refs.insert(key, item.id);
        }
        if !game.add_item(item) {
            tracing::debug!(name = %item_doc.name, "ignoring item with duplicate id");
        }
    }

    for room_doc in &doc.rooms {
        if let Some(room) = build_room(room_doc, &refs) {
            game.add_room(room);
        }
    }

    Some(game)
}

fn build_item(doc: &ItemDoc) -> Option<Item> {
    let name = doc.name.trim();
    if name.is_empty() {
        tracing::debug!("skipping item record with no name");
        return None;
    }

    let id = ItemId::from_name(ref_or(doc.id.as_deref(), name));
    let item = if doc.key.unwrap_or(false) {
        Item::key(id, name, doc.description.clone())
    } else {
        Item::new(id, name, doc.description.clone())
    };
    Some(
        item.with_portable(doc.portable.unwrap_or(true))
            .with_state(doc.state.as_deref().map(ItemState::parse).unwrap_or_default()),
    )
}

fn build_room(doc: &RoomDoc, refs: &FxHashMap<&str, ItemId>) -> Option<Room> {
    let name = doc.name.trim();
    if name.is_empty() {
        tracing::debug!("skipping room record with no name");
        return None;
    }

    let mut room = Room::new(
        RoomId::from_name(ref_or(doc.id.as_deref(), name)),
        name,
        doc.description.clone(),
    );

    if let Some(locked) = doc.locked {
        room.set_locked(locked);
    }
    if let Some(limit) = doc.hint_limit {
        // Negative or absurd limits are ignored, not clamped.
        if let Ok(limit) = u32::try_from(limit) {
            room.set_hint_limit(limit);
        }
    }
    if let Some(wanted) = doc.key_required.as_deref() {
        match refs.get(wanted) {
            Some(&key) => room.set_key_required(key),
            None => tracing::debug!(room = %name, target = %wanted, "dropping unresolvable key requirement"),
        }
    }
    for wanted in &doc.items {
        match refs.get(wanted.as_str()) {
            Some(&id) => room.add_item(id),
            None => tracing::debug!(room = %name, target = %wanted, "dropping unresolvable room item"),
        }
    }
    for puzzle_doc in &doc.puzzles {
        if let Some(puzzle) = build_puzzle(puzzle_doc, refs) {
            room.add_puzzle(puzzle);
        }
    }

    Some(room)
}

fn build_puzzle(doc: &PuzzleDoc, refs: &FxHashMap<&str, ItemId>) -> Option<Puzzle> {
    let title = doc.title.trim();
    if title.is_empty() {
        tracing::debug!("skipping puzzle record with no title");
        return None;
    }

    let id = PuzzleId::from_name(ref_or(doc.id.as_deref(), title));
    let mut puzzle = Puzzle::with_kind(id, title, doc.description.clone(), puzzle_kind(doc, id));
    for hint in &doc.hints {
        puzzle = puzzle.with_hint(hint.clone());
    }
    if let Some(wanted) = doc.key_provided.as_deref() {
        match refs.get(wanted) {
            Some(&key) => puzzle = puzzle.with_key(key),
            None => tracing::debug!(puzzle = %title, target = %wanted, "dropping unresolvable key grant"),
        }
    }

    Some(puzzle)
}

/// An explicit `type` wins; otherwise the payload fields decide. A
/// record with neither becomes a riddle with no accepted answers, which
/// never solves but never fails the load either.
fn puzzle_kind(doc: &PuzzleDoc, id: PuzzleId) -> PuzzleKind {
    let declared = doc.kind.as_deref().map(|k| k.trim().to_ascii_lowercase());
    match declared.as_deref() {
        Some("sequence") => PuzzleKind::Sequence(sequence_state(doc, id)),
        Some("riddle") => PuzzleKind::Riddle(RiddleState::new(doc.answers.iter().cloned())),
        Some("math" | "arithmetic") => PuzzleKind::Arithmetic(arithmetic_state(doc)),
        _ => {
            if !doc.answers.is_empty() {
                PuzzleKind::Riddle(RiddleState::new(doc.answers.iter().cloned()))
            } else if doc.answer.is_some() {
                PuzzleKind::Arithmetic(arithmetic_state(doc))
            } else {
                PuzzleKind::Riddle(RiddleState::new(Vec::<String>::new()))
            }
        }
    }
}

fn sequence_state(doc: &PuzzleDoc, id: PuzzleId) -> SequenceState {
    // Without an explicit seed the sequence still has to be stable
    // across loads, so the puzzle's own id seeds it.
    let seed = doc.seed.unwrap_or(id.raw());
    match doc.rounds {
        Some(rounds) => SequenceState::with_rounds(seed, rounds as usize),
        None => SequenceState::new(seed),
    }
}

fn arithmetic_state(doc: &PuzzleDoc) -> ArithmeticState {
    ArithmeticState::new(doc.answer.unwrap_or(0.0), doc.tolerance.unwrap_or(0.0))
}

/// The string an entity id derives from: the explicit document ref when
/// present and non-blank, otherwise the display name.
fn ref_or<'a>(id: Option<&'a str>, name: &'a str) -> &'a str {
    match id {
        Some(id) if !id.trim().is_empty() => id,
        _ => name,
    }
}
