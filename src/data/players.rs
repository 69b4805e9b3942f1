//! Per-username progress store.
//!
//! A [`PlayerRecord`] carries everything needed to resume a run:
//! difficulty, current room, and per-room progress (solved flags, hint
//! spends, the active-puzzle marker). [`capture`] snapshots live state
//! into a record; [`apply`] pushes a record back into a freshly built
//! game, re-deriving budgets and locks rather than trusting the file.
//!
//! Ids travel as decimal strings of the raw id values. Those are stable
//! run to run because entity ids derive from names, so records written
//! against one build of a game resolve against the next.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{PuzzleId, RoomId};
use crate::session::{Player, RoomProgress};
use crate::world::{Game, Room};

use super::error::DataResult;

/// Root of a player-store file: `{ "players": [...] }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayersDoc {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

/// Everything persisted about one player.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_room_id: Option<String>,
    #[serde(default)]
    pub progress_by_room_id: BTreeMap<String, ProgressRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

/// One room's stored progress.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub puzzles_solved: BTreeMap<String, bool>,
    #[serde(default)]
    pub puzzle_hints: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_puzzle_id: Option<String>,
}

/// Load the store at `path`. A missing file is an empty store.
pub fn load_players(path: impl AsRef<Path>) -> DataResult<Vec<PlayerRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path)?;
    let doc: PlayersDoc = serde_json::from_str(&text)?;
    Ok(doc.players)
}

/// Write the whole store, creating parent directories as needed.
pub fn save_players(path: impl AsRef<Path>, players: &[PlayerRecord]) -> DataResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = PlayersDoc {
        players: players.to_vec(),
    };
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

/// Find a record by username, case-insensitive.
#[must_use]
pub fn find_player<'a>(players: &'a [PlayerRecord], username: &str) -> Option<&'a PlayerRecord> {
    players
        .iter()
        .find(|record| record.username.eq_ignore_ascii_case(username))
}

/// Insert or replace the record for its username.
pub fn upsert_player(players: &mut Vec<PlayerRecord>, record: PlayerRecord) {
    match players
        .iter_mut()
        .find(|existing| existing.username.eq_ignore_ascii_case(&record.username))
    {
        Some(slot) => *slot = record,
        None => players.push(record),
    }
}

/// Snapshot a player's live progress against a game.
///
/// Solved flags come from the live puzzles. Hint counts come from the
/// progress records; when a room's budget shows spend that no puzzle
/// recorded, the whole spend is attributed to the room's first puzzle
/// so the restored budget still comes out right. The active-puzzle
/// marker is recomputed as the first unsolved puzzle per room, absent
/// once a room is fully solved.
#[must_use]
pub fn capture(player: &Player, game: &Game) -> PlayerRecord {
    let allowance = player.difficulty().hint_allowance();
    let mut progress_by_room_id = BTreeMap::new();
    for room in game.rooms() {
        progress_by_room_id.insert(
            room.id().raw().to_string(),
            capture_room(player, room, allowance),
        );
    }

    PlayerRecord {
        id: Some(player.id().raw().to_string()),
        username: player.username().to_string(),
        difficulty: Some(player.difficulty().to_string()),
        current_room_id: player.current_room().map(|id| id.raw().to_string()),
        progress_by_room_id,
        saved_at: Some(Utc::now()),
    }
}

fn capture_room(player: &Player, room: &Room, allowance: u32) -> ProgressRecord {
    let progress = player.progress(room.id());

    let mut puzzles_solved = BTreeMap::new();
    for puzzle in room.puzzles() {
        puzzles_solved.insert(puzzle.id().raw().to_string(), puzzle.is_solved());
    }

    let mut puzzle_hints = BTreeMap::new();
    let mut recorded = 0u32;
    for puzzle in room.puzzles() {
        let count = progress.map_or(0, |p| p.hints_used(puzzle.id()));
        if count > 0 {
            puzzle_hints.insert(puzzle.id().raw().to_string(), count);
            recorded += count;
        }
    }
    let used = allowance.saturating_sub(room.hint_limit());
    if recorded == 0 && used > 0 {
        if let Some(head) = room.puzzles().first() {
            puzzle_hints.insert(head.id().raw().to_string(), used);
        }
    }

    ProgressRecord {
        puzzles_solved,
        puzzle_hints,
        current_puzzle_id: room
            .puzzles()
            .iter()
            .find(|puzzle| !puzzle.is_solved())
            .map(|puzzle| puzzle.id().raw().to_string()),
    }
}

/// Push a stored record into a player and a freshly built game.
///
/// Budgets start from the player's allowance and lose what the record
/// says was spent. Solved flags overwrite the live puzzles, explicit
/// false included. Locks re-derive: the first room opens, and every
/// room whose predecessor is cleared opens. The player lands on the
/// first room holding an active-puzzle marker, else the first uncleared
/// room, else the first room.
pub fn apply(record: &PlayerRecord, player: &mut Player, game: &mut Game) {
    let allowance = player.difficulty().hint_allowance();
    for room in game.rooms_mut() {
        room.set_hint_limit(allowance);
    }
    if let Some(first) = game.rooms_mut().first_mut() {
        first.set_locked(false);
    }

    player.clear_progress();
    for (room_key, stored) in &record.progress_by_room_id {
        let Some(room_id) = parse_id(room_key).map(RoomId::new) else {
            tracing::debug!(key = %room_key, "ignoring progress for unparseable room id");
            continue;
        };
        let Some(room) = game.room_mut(room_id) else {
            tracing::debug!(key = %room_key, "ignoring progress for unknown room");
            continue;
        };
        let progress = apply_room(stored, room, allowance);
        player.put_progress(room_id, progress);
    }

    for index in 1..game.rooms().len() {
        if game.rooms()[index - 1].is_cleared() {
            game.rooms_mut()[index].set_locked(false);
        }
    }

    let marked = game.rooms().iter().map(Room::id).find(|room_id| {
        record
            .progress_by_room_id
            .get(&room_id.raw().to_string())
            .is_some_and(|stored| stored.current_puzzle_id.is_some())
    });
    if let Some(target) = marked
        .or_else(|| game.advance_room())
        .or_else(|| game.first_room())
    {
        player.move_to(target);
    }
}

fn apply_room(stored: &ProgressRecord, room: &mut Room, allowance: u32) -> RoomProgress {
    let mut progress = RoomProgress::new();

    for puzzle in room.puzzles_mut() {
        let solved = stored
            .puzzles_solved
            .get(&puzzle.id().raw().to_string())
            .copied()
            .unwrap_or(false);
        puzzle.set_solved(solved);
        progress.set_solved(puzzle.id(), solved);
    }

    for (key, &count) in &stored.puzzle_hints {
        match parse_id(key).map(PuzzleId::new) {
            Some(puzzle_id) => progress.set_hint_count(puzzle_id, count),
            None => tracing::debug!(key = %key, "ignoring hint count for unparseable puzzle id"),
        }
    }
    if let Some(marker) = stored.current_puzzle_id.as_deref() {
        match parse_id(marker).map(PuzzleId::new) {
            Some(puzzle_id) => progress.set_current_puzzle(puzzle_id),
            None => tracing::debug!(key = %marker, "ignoring unparseable active-puzzle marker"),
        }
    }

    let spent = progress.room_hint_total(room);
    room.set_hint_limit(allowance.saturating_sub(spent));
    progress
}

fn parse_id(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}
