//! Pattern-memory puzzle: replay a growing sequence of console lights.
//!
//! The puzzle holds a pseudo-random color sequence that starts at one
//! element and grows by one per cleared round. An attempt must reproduce
//! the entire current sequence exactly. Clearing the final round solves
//! the puzzle.
//!
//! The generator state is stored as a [`GameRngState`] so a half-played
//! sequence serializes and resumes without replaying draws.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, GameRngState};

use super::{Attempt, AttemptOutcome};

/// One console light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
}

impl Color {
    /// The full light alphabet, in draw order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];

    /// Parse a color token, case-insensitive. Returns `None` for anything
    /// outside the alphabet.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "RED" => Some(Self::Red),
            "GREEN" => Some(Self::Green),
            "BLUE" => Some(Self::Blue),
            "YELLOW" => Some(Self::Yellow),
            "WHITE" => Some(Self::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Yellow => "YELLOW",
            Self::White => "WHITE",
        };
        f.write_str(name)
    }
}

/// State of a pattern-memory puzzle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceState {
    rng: GameRngState,
    sequence: SmallVec<[Color; 8]>,
    round: usize,
    total_rounds: usize,
}

impl SequenceState {
    /// Canonical number of rounds.
    pub const DEFAULT_ROUNDS: usize = 5;

    /// Create a sequence puzzle with the canonical round count.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rounds(seed, Self::DEFAULT_ROUNDS)
    }

    /// Create a sequence puzzle with an explicit round count (minimum 1).
    #[must_use]
    pub fn with_rounds(seed: u64, rounds: usize) -> Self {
        let mut state = Self {
            rng: GameRngState::fresh(seed),
            sequence: SmallVec::new(),
            round: 0,
            total_rounds: rounds.max(1),
        };
        state.extend();
        state
    }

    /// Draw one more color onto the sequence.
    fn extend(&mut self) {
        let mut rng = GameRng::from_state(&self.rng);
        let index = rng.gen_range_usize(0..Color::ALL.len());
        self.sequence.push(Color::ALL[index]);
        self.rng = rng.state();
    }

    /// The sequence to reproduce for the current round.
    #[must_use]
    pub fn current_sequence(&self) -> &[Color] {
        &self.sequence
    }

    /// Zero-based round counter.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Total rounds required to solve.
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// The seed the sequence was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed
    }

    pub(crate) fn attempt(&mut self, input: &Attempt) -> AttemptOutcome {
        let guess: SmallVec<[Color; 8]> = match input {
            Attempt::Colors(colors) => colors.clone(),
            Attempt::Text(text) => {
                match text.split_whitespace().map(Color::parse).collect() {
                    Some(parsed) => parsed,
                    None => return AttemptOutcome::Miss,
                }
            }
            Attempt::Number(_) => return AttemptOutcome::Miss,
        };

        if guess.is_empty() || guess.len() != self.sequence.len() {
            return AttemptOutcome::Miss;
        }
        if guess.iter().zip(self.sequence.iter()).any(|(g, t)| g != t) {
            return AttemptOutcome::Miss;
        }

        if self.round + 1 >= self.total_rounds {
            return AttemptOutcome::Solved;
        }

        self.round += 1;
        self.extend();
        AttemptOutcome::Progressed
    }

    pub(crate) fn canned_hint(&self) -> &'static str {
        match self.round {
            0 | 1 => "Count the flashes and replay in order.",
            2 | 3 => "Chunk colors into small groups.",
            _ => "Say each color out loud as you input it.",
        }
    }
}
