//! The built-in facility: a three-room singularity escape.
//!
//! Cryo Intake opens the run with a light-sequence puzzle whose key
//! unlocks the Transit Hall; the hall's riddle yields the key to the
//! Core Vault; the vault's calibration puzzle finishes the run. The
//! same layout backs the default session and most integration tests.

use std::time::Duration;

use crate::core::{GameId, GameRng, Item, ItemId, PuzzleId, RoomId};
use crate::puzzles::Puzzle;
use crate::world::{Difficulty, Game, Room};

/// Build the default three-room game at the given difficulty.
///
/// `seed` drives the light-sequence puzzle; the same seed always builds
/// the same flashes, which is what makes recorded walkthroughs replay.
/// Entity ids derive from the display names, so every build of this
/// game agrees with every other about who is who.
#[must_use]
pub fn build_default_game(difficulty: Difficulty, seed: u64) -> Game {
    let mut game = Game::new(
        GameId::from_name("Escape Nexus: Singularity Run"),
        "Escape Nexus: Singularity Run",
        "Race through the facility before the singularity ignites.",
        difficulty,
        Duration::from_secs(30 * 60),
        1,
    );

    let cryo_key = ItemId::from_name("Cryo Bay Access Key");
    let vault_key = ItemId::from_name("Core Vault Key");
    game.add_item(Item::key(
        cryo_key,
        "Cryo Bay Access Key",
        "Unlocks the transit hall mag-lock.",
    ));
    game.add_item(Item::key(
        vault_key,
        "Core Vault Key",
        "Unlocks the reactor core vault.",
    ));

    let mut cryo_intake = Room::new(
        RoomId::from_name("Cryo Intake"),
        "Cryo Intake",
        "Wake up and stabilize the cryo systems before sprinting out.",
    );
    cryo_intake.add_puzzle(
        Puzzle::sequence(
            PuzzleId::from_name("Reboot Sequence"),
            "Reboot Sequence",
            "Replay each flashing sequence on the cryo console.",
            GameRng::new(seed).for_context("reboot-sequence").seed(),
        )
        .with_hint("Watch carefully - each new flash extends the full sequence.")
        .with_hint("Group colors in pairs or triples to memorize faster.")
        .with_hint("Say each color out loud as you replay it.")
        .with_key(cryo_key),
    );

    let mut transit_hall = Room::new(
        RoomId::from_name("Transit Hall"),
        "Transit Hall",
        "Navigate the evacuated hall and bypass the mag-lock pattern wall.",
    );
    transit_hall.set_locked(true);
    transit_hall.set_key_required(cryo_key);
    transit_hall.add_puzzle(
        Puzzle::riddle(
            PuzzleId::from_name("Mag-Lock Riddle"),
            "Mag-Lock Riddle",
            "I have a bed but do not sleep, a mouth but do not speak, \
             and a foot but do not walk. What am I?",
            ["river"],
        )
        .with_hint("It moves yet stays in its place.")
        .with_hint("Its mouth isn't for speaking.")
        .with_hint("You can follow its banks.")
        .with_key(vault_key),
    );

    let mut core_vault = Room::new(
        RoomId::from_name("Core Vault"),
        "Core Vault",
        "Align the reactor and vent energy before the singularity stabilizes.",
    );
    core_vault.set_locked(true);
    core_vault.set_key_required(vault_key);
    core_vault.add_puzzle(
        Puzzle::arithmetic(
            PuzzleId::from_name("Reactor Calibration"),
            "Reactor Calibration",
            "Two calibration panels display 5 and 7. Enter their sum to confirm alignment.",
            12.0,
            0.0,
        )
        .with_hint("Add the two numbers you see.")
        .with_hint("It's simple arithmetic, not degrees or timing.")
        .with_hint("Five plus seven equals...?"),
    );

    game.add_room(cryo_intake);
    game.add_room(transit_hall);
    game.add_room(core_vault);
    game.apply_hint_allowance(difficulty);
    game
}
