//! End-to-end gameplay tests.
//!
//! These drive the built-in facility through [`Session`] and
//! [`SessionManager`] the way a terminal loop would: replay light
//! sequences, answer riddles, spend hints, and clear rooms in order.

use std::time::Duration;

use escape_nexus::core::{GameId, Item, ItemId, PuzzleId, RoomId};
use escape_nexus::games::build_default_game;
use escape_nexus::manager::SessionManager;
use escape_nexus::puzzles::{Attempt, Puzzle};
use escape_nexus::session::{Player, Session, NO_HINTS_LEFT};
use escape_nexus::world::{Difficulty, Game, GameStatus, Room};

/// Replay the current light sequence until the head puzzle of the
/// player's room stops being a sequence or the room changes.
fn clear_sequence(session: &mut Session) {
    for _ in 0..16 {
        let Some(sequence) = session.show_sequence().map(<[_]>::to_vec) else {
            return;
        };
        assert!(session.attempt_current(&Attempt::colors(sequence)));
    }
    panic!("sequence puzzle did not resolve within 16 rounds");
}

fn medium_session(seed: u64) -> Session {
    let mut player = Player::new("nova");
    player.set_difficulty(Difficulty::Medium);
    let mut game = build_default_game(Difficulty::Medium, seed);
    game.start();
    Session::new(player, game)
}

// =============================================================================
// Full Walkthrough
// =============================================================================

/// Test that a correct run clears all three rooms and lands on the
/// leaderboard exactly once.
#[test]
fn test_full_run_clears_the_facility() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SessionManager::new(404)
        .with_save_path(dir.path().join("game.json"))
        .with_players_path(dir.path().join("players.json"));
    assert!(manager.start_new("nova", Difficulty::Medium));

    for _ in 0..16 {
        let Some(sequence) = manager.show_sequence().map(<[_]>::to_vec) else {
            break;
        };
        assert!(manager.attempt_current(&Attempt::colors(sequence)));
    }
    let session = manager.session().unwrap();
    assert_eq!(session.current_room().unwrap().name(), "Transit Hall");

    assert!(manager.attempt_current(&Attempt::text("river")));
    let session = manager.session().unwrap();
    assert_eq!(session.current_room().unwrap().name(), "Core Vault");

    assert!(manager.attempt_current(&Attempt::number(12.0)));
    let session = manager.session().unwrap();
    assert!(session.is_facility_cleared());
    assert_eq!(session.game().status(), GameStatus::Completed);

    let leaderboard = session.game().leaderboard();
    assert_eq!(leaderboard.len(), 1);
    assert!(leaderboard[0].success);
    assert_eq!(leaderboard[0].player_id, session.player().id());

    // The player stays in the last room after the game ends.
    assert_eq!(session.current_room().unwrap().name(), "Core Vault");
}

/// Test that finishing the run records one leaderboard entry even when
/// attempts keep landing on the solved final puzzle.
#[test]
fn test_completion_is_recorded_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = SessionManager::new(405)
        .with_save_path(dir.path().join("game.json"))
        .with_players_path(dir.path().join("players.json"));
    assert!(manager.start_new("nova", Difficulty::Medium));

    for _ in 0..16 {
        let Some(sequence) = manager.show_sequence().map(<[_]>::to_vec) else {
            break;
        };
        manager.attempt_current(&Attempt::colors(sequence));
    }
    manager.attempt_current(&Attempt::text("river"));
    manager.attempt_current(&Attempt::number(12.0));

    // Solved puzzles accept any further input without side effects.
    assert!(manager.attempt_current(&Attempt::number(999.0)));
    assert!(manager.attempt_current(&Attempt::text("anything")));

    let session = manager.session().unwrap();
    assert_eq!(session.game().status(), GameStatus::Completed);
    assert_eq!(session.game().leaderboard().len(), 1);
}

/// Test that the first correct replay hands over the key and unlocks the
/// next room while the player keeps working the sequence.
#[test]
fn test_sequence_round_grants_key_before_room_clears() {
    let mut session = medium_session(7);

    let sequence = session.show_sequence().unwrap().to_vec();
    assert!(session.attempt_current(&Attempt::colors(sequence)));

    let cryo_key = ItemId::from_name("Cryo Bay Access Key");
    assert!(session.player().inventory().contains(cryo_key));

    let transit = RoomId::from_name("Transit Hall");
    assert!(!session.game().room(transit).unwrap().is_locked());

    // Still one round in: the room is not cleared, the player stays put.
    assert_eq!(session.current_room().unwrap().name(), "Cryo Intake");
    assert!(!session.current_room().unwrap().is_cleared());
}

// =============================================================================
// Misses and Locks
// =============================================================================

/// Test that a wrong riddle answer leaves the session untouched.
#[test]
fn test_wrong_riddle_answer_changes_nothing() {
    let mut session = medium_session(8);
    clear_sequence(&mut session);
    assert_eq!(session.current_room().unwrap().name(), "Transit Hall");

    assert!(!session.attempt_current(&Attempt::text("ocean")));
    assert!(!session.attempt_current(&Attempt::number(12.0)));

    assert_eq!(session.current_room().unwrap().name(), "Transit Hall");
    assert!(!session.current_room().unwrap().is_cleared());

    let vault = RoomId::from_name("Core Vault");
    assert!(session.game().room(vault).unwrap().is_locked());
}

/// Test that only the matching key opens a locked room, and only while
/// it is still locked.
#[test]
fn test_unlock_requires_the_matching_key() {
    let game = build_default_game(Difficulty::Medium, 9);
    let transit = RoomId::from_name("Transit Hall");
    let mut room = game.room(transit).unwrap().clone();

    assert!(!room.unlock(ItemId::from_name("Core Vault Key")));
    assert!(room.is_locked());

    assert!(room.unlock(ItemId::from_name("Cryo Bay Access Key")));
    assert!(!room.is_locked());

    // A second offer has nothing left to open.
    assert!(!room.unlock(ItemId::from_name("Cryo Bay Access Key")));
}

// =============================================================================
// Hints
// =============================================================================

/// Test that hints come out in authored order and stop at the budget.
#[test]
fn test_hints_run_down_to_the_sentinel() {
    let mut session = medium_session(10);

    assert_eq!(
        session.request_hint(),
        "Watch carefully - each new flash extends the full sequence."
    );
    assert_eq!(
        session.request_hint(),
        "Group colors in pairs or triples to memorize faster."
    );

    // Medium grants two hints per room; the third ask refuses.
    assert_eq!(session.request_hint(), NO_HINTS_LEFT);
    assert_eq!(session.current_room().unwrap().hint_limit(), 0);
}

/// Test that a puzzle with fewer authored hints than budget falls back
/// to its standing guidance.
#[test]
fn test_hints_fall_back_to_standing_guidance() {
    let mut game = Game::new(
        GameId::from_name("drill"),
        "Drill",
        "One-room hint drill.",
        Difficulty::Medium,
        Duration::from_secs(600),
        1,
    );
    let cell = RoomId::from_name("Cell");
    let mut room = Room::new(cell, "Cell", "A bare cell.");
    room.add_puzzle(
        Puzzle::riddle(
            PuzzleId::from_name("gate-riddle"),
            "Gate Riddle",
            "I have a bed but do not sleep. What am I?",
            ["river"],
        )
        .with_hint("It is drawn on every map."),
    );
    room.set_hint_limit(3);
    game.add_room(room);
    game.start();

    let mut session = Session::new(Player::new("vex"), game);
    assert_eq!(session.request_hint(), "It is drawn on every map.");
    assert_eq!(
        session.request_hint(),
        "Picture something with a bed, a mouth, and a foot that never leaves its place."
    );
    assert_eq!(
        session.request_hint(),
        "Picture something with a bed, a mouth, and a foot that never leaves its place."
    );
    assert_eq!(session.request_hint(), NO_HINTS_LEFT);
}

/// Test that hint spend lands in the per-room progress ledger.
#[test]
fn test_hint_spend_is_tracked_per_room() {
    let mut session = medium_session(11);
    let cryo = RoomId::from_name("Cryo Intake");
    let reboot = PuzzleId::from_name("Reboot Sequence");

    session.request_hint();

    let progress = session.player().progress(cryo).unwrap();
    assert_eq!(progress.hints_used(reboot), 1);
    assert_eq!(progress.current_puzzle(), Some(reboot));
    assert_eq!(session.game().room(cryo).unwrap().hint_limit(), 1);
}

// =============================================================================
// Reset and Room Advancement
// =============================================================================

/// Test that a reset wipes progress records and inventory but leaves the
/// live puzzles and locks alone.
#[test]
fn test_reset_clears_progress_and_inventory_only() {
    let mut session = medium_session(12);
    clear_sequence(&mut session);
    session.request_hint();

    assert!(!session.player().inventory().is_empty());
    session.reset_progress();

    assert!(session.player().inventory().is_empty());
    let cryo = RoomId::from_name("Cryo Intake");
    assert!(session.player().progress(cryo).is_none());

    // Live world state is untouched by a progress reset.
    assert!(session.game().room(cryo).unwrap().is_cleared());
    let transit = RoomId::from_name("Transit Hall");
    assert!(!session.game().room(transit).unwrap().is_locked());
    assert_eq!(session.current_room().unwrap().name(), "Transit Hall");
}

/// Test that a room holding two puzzles keeps the player until both are
/// solved, even after its head puzzle hands out the next key.
#[test]
fn test_player_stays_until_room_fully_cleared() {
    let mut game = Game::new(
        GameId::from_name("double"),
        "Double",
        "Two puzzles gate the first door.",
        Difficulty::Medium,
        Duration::from_secs(600),
        1,
    );
    let brig_key = ItemId::from_name("Brig Key");
    game.add_item(Item::key(brig_key, "Brig Key", "Opens the brig."));

    let hold = RoomId::from_name("Hold");
    let mut first = Room::new(hold, "Hold", "The cargo hold.");
    first.add_puzzle(
        Puzzle::riddle(
            PuzzleId::from_name("crate-riddle"),
            "Crate Riddle",
            "What has a neck but no head?",
            ["bottle"],
        )
        .with_key(brig_key),
    );
    first.add_puzzle(Puzzle::arithmetic(
        PuzzleId::from_name("manifest-count"),
        "Manifest Count",
        "How many crates are stacked here?",
        4.0,
        0.0,
    ));
    game.add_room(first);

    let brig = RoomId::from_name("Brig");
    let mut second = Room::new(brig, "Brig", "The ship's brig.");
    second.set_locked(true);
    second.set_key_required(brig_key);
    second.add_puzzle(Puzzle::riddle(
        PuzzleId::from_name("cell-riddle"),
        "Cell Riddle",
        "What gets wetter as it dries?",
        ["towel"],
    ));
    game.add_room(second);
    game.apply_hint_allowance(Difficulty::Medium);
    game.start();

    let mut session = Session::new(Player::new("nova"), game);

    // Head puzzle solved: key granted, next room open, player stays.
    assert!(session.attempt_current(&Attempt::text("bottle")));
    assert!(session.player().inventory().contains(brig_key));
    assert!(!session.game().room(brig).unwrap().is_locked());
    assert_eq!(session.current_room().unwrap().name(), "Hold");

    // Solve the tail puzzle directly; the next accepted attempt on the
    // head notices the cleared room and moves the player forward.
    let manifest = PuzzleId::from_name("manifest-count");
    let room = session.game_mut().room_mut(hold).unwrap();
    assert!(room.puzzle_mut(manifest).unwrap().attempt(&Attempt::number(4.0)));
    assert!(session.attempt_current(&Attempt::text("bottle")));
    assert_eq!(session.current_room().unwrap().name(), "Brig");
}
