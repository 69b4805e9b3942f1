//! Puzzle shell: identity, hints, solved state, and kind dispatch.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ItemId, PuzzleId};

use super::arithmetic::ArithmeticState;
use super::riddle::RiddleState;
use super::sequence::{Color, SequenceState};

/// Player input for a puzzle attempt.
///
/// Text is the universal form: every kind accepts it and parses what it
/// needs. The structured variants skip parsing when the caller already
/// has typed data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Attempt {
    /// An ordered color sequence.
    Colors(SmallVec<[Color; 8]>),
    /// Free text. Kinds parse this into their native input.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl Attempt {
    /// Build a color-sequence attempt.
    #[must_use]
    pub fn colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Color>,
    {
        Self::Colors(colors.into_iter().collect())
    }

    /// Build a free-text attempt.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Build a numeric attempt.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }
}

/// What a single attempt did to the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AttemptOutcome {
    /// Input rejected, nothing changed.
    Miss,
    /// Input accepted, puzzle advanced but is not finished.
    Progressed,
    /// Input accepted and the puzzle is finished.
    Solved,
}

/// Kind-specific puzzle state and matching rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum PuzzleKind {
    /// Replay a growing color sequence.
    Sequence(SequenceState),
    /// Answer a free-text riddle.
    Riddle(RiddleState),
    /// Produce a number within tolerance.
    Arithmetic(ArithmeticState),
}

impl PuzzleKind {
    pub(crate) fn attempt(&mut self, input: &Attempt) -> AttemptOutcome {
        match self {
            Self::Sequence(state) => state.attempt(input),
            Self::Riddle(state) => state.attempt(input),
            Self::Arithmetic(state) => state.attempt(input),
        }
    }

    pub(crate) fn canned_hint(&self) -> &'static str {
        match self {
            Self::Sequence(state) => state.canned_hint(),
            Self::Riddle(state) => state.canned_hint(),
            Self::Arithmetic(state) => state.canned_hint(),
        }
    }

    /// The sequence state, if this is a sequence puzzle.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&SequenceState> {
        match self {
            Self::Sequence(state) => Some(state),
            _ => None,
        }
    }
}

/// A single challenge inside a room.
///
/// The shell owns everything common to all kinds: identity, prose, the
/// authored hint list with its cursor, the solved flag, and the key the
/// puzzle yields. Matching rules live in the [`PuzzleKind`].
///
/// # Example
///
/// ```
/// use escape_nexus::core::PuzzleId;
/// use escape_nexus::puzzles::{Attempt, Puzzle};
///
/// let mut puzzle = Puzzle::riddle(
///     PuzzleId::from_name("demo-riddle"),
///     "Voice Lock",
///     "I have a mouth but never speak.",
///     ["river"],
/// )
/// .with_hint("It flows.");
///
/// assert!(!puzzle.attempt(&Attempt::text("ocean")));
/// assert!(puzzle.attempt(&Attempt::text("river")));
/// assert!(puzzle.is_solved());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Puzzle {
    id: PuzzleId,
    title: String,
    description: String,
    hints: Vec<String>,
    hints_issued: usize,
    solved: bool,
    key_provided: Option<ItemId>,
    kind: PuzzleKind,
}

impl Puzzle {
    /// Create a puzzle from an explicit kind.
    #[must_use]
    pub fn with_kind(
        id: PuzzleId,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: PuzzleKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            hints: Vec::new(),
            hints_issued: 0,
            solved: false,
            key_provided: None,
            kind,
        }
    }

    /// Create a sequence puzzle with the canonical round count.
    #[must_use]
    pub fn sequence(
        id: PuzzleId,
        title: impl Into<String>,
        description: impl Into<String>,
        seed: u64,
    ) -> Self {
        Self::with_kind(id, title, description, PuzzleKind::Sequence(SequenceState::new(seed)))
    }

    /// Create a riddle puzzle.
    #[must_use]
    pub fn riddle<I, S>(
        id: PuzzleId,
        title: impl Into<String>,
        description: impl Into<String>,
        answers: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(id, title, description, PuzzleKind::Riddle(RiddleState::new(answers)))
    }

    /// Create an arithmetic puzzle.
    #[must_use]
    pub fn arithmetic(
        id: PuzzleId,
        title: impl Into<String>,
        description: impl Into<String>,
        answer: f64,
        tolerance: f64,
    ) -> Self {
        Self::with_kind(
            id,
            title,
            description,
            PuzzleKind::Arithmetic(ArithmeticState::new(answer, tolerance)),
        )
    }

    /// Append an authored hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Set the key this puzzle yields when attempted successfully.
    #[must_use]
    pub fn with_key(mut self, item: ItemId) -> Self {
        self.key_provided = Some(item);
        self
    }

    #[must_use]
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The authored hint list, in issue order.
    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// How many authored hints have been issued.
    #[must_use]
    pub fn hints_issued(&self) -> usize {
        self.hints_issued
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The key yielded on a successful attempt, if any.
    #[must_use]
    pub fn key_provided(&self) -> Option<ItemId> {
        self.key_provided
    }

    /// The kind-specific state.
    #[must_use]
    pub fn kind(&self) -> &PuzzleKind {
        &self.kind
    }

    /// Apply an attempt. Returns true when the input was accepted, which
    /// includes intermediate progress on multi-round puzzles. A solved
    /// puzzle accepts every attempt without touching its state.
    pub fn attempt(&mut self, input: &Attempt) -> bool {
        if self.solved {
            return true;
        }
        match self.kind.attempt(input) {
            AttemptOutcome::Miss => false,
            AttemptOutcome::Progressed => true,
            AttemptOutcome::Solved => {
                self.solved = true;
                true
            }
        }
    }

    /// The next hint. Authored hints are issued in order; once they run
    /// out (or none were authored) the kind supplies standing guidance.
    pub fn next_hint(&mut self) -> &str {
        if self.hints_issued < self.hints.len() {
            let index = self.hints_issued;
            self.hints_issued += 1;
            &self.hints[index]
        } else {
            self.kind.canned_hint()
        }
    }

    /// Clear the solved flag. Kind state and the hint cursor keep their
    /// positions.
    pub fn reset(&mut self) {
        self.solved = false;
    }

    pub(crate) fn set_solved(&mut self, solved: bool) {
        self.solved = solved;
    }
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Puzzle {}

#[cfg(test)]
mod tests {
    use super::*;

    fn riddle() -> Puzzle {
        Puzzle::riddle(
            PuzzleId::from_name("test-riddle"),
            "Voice Lock",
            "I have a mouth but never speak.",
            ["river"],
        )
    }

    #[test]
    fn test_solving_sets_the_flag() {
        let mut puzzle = riddle();
        assert!(!puzzle.is_solved());
        assert!(puzzle.attempt(&Attempt::text("river")));
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_miss_leaves_the_flag() {
        let mut puzzle = riddle();
        assert!(!puzzle.attempt(&Attempt::text("ocean")));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_solved_puzzle_accepts_anything() {
        let mut puzzle = riddle();
        assert!(puzzle.attempt(&Attempt::text("river")));
        assert!(puzzle.attempt(&Attempt::text("complete gibberish")));
    }

    #[test]
    fn test_intermediate_round_accepts_without_solving() {
        let mut puzzle = Puzzle::sequence(PuzzleId::from_name("test-seq"), "Lights", "Replay.", 42);
        let replay = match puzzle.kind().as_sequence() {
            Some(state) => Attempt::colors(state.current_sequence().iter().copied()),
            None => unreachable!(),
        };
        assert!(puzzle.attempt(&replay));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_authored_hints_issue_in_order_then_fall_back() {
        let mut puzzle = riddle().with_hint("first").with_hint("second");
        assert_eq!(puzzle.next_hint(), "first");
        assert_eq!(puzzle.next_hint(), "second");
        assert_eq!(puzzle.hints_issued(), 2);
        assert_eq!(
            puzzle.next_hint(),
            "Picture something with a bed, a mouth, and a foot that never leaves its place."
        );
        assert_eq!(puzzle.hints_issued(), 2);
    }

    #[test]
    fn test_no_authored_hints_falls_back_immediately() {
        let mut puzzle = Puzzle::arithmetic(
            PuzzleId::from_name("test-math"),
            "Console",
            "Add the dials.",
            12.0,
            0.0,
        );
        assert_eq!(
            puzzle.next_hint(),
            "Combine the displayed values exactly as the prompt describes."
        );
    }

    #[test]
    fn test_reset_clears_only_the_solved_flag() {
        let mut puzzle = riddle().with_hint("first");
        let _ = puzzle.next_hint();
        assert!(puzzle.attempt(&Attempt::text("river")));

        puzzle.reset();
        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.hints_issued(), 1);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = riddle();
        let b = Puzzle::riddle(PuzzleId::from_name("test-riddle"), "Other", "Other.", ["x"]);
        let c = Puzzle::riddle(PuzzleId::from_name("another"), "Voice Lock", "Same.", ["river"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_builder() {
        use crate::core::ItemId;
        let key = ItemId::from_name("brass-key");
        let puzzle = riddle().with_key(key);
        assert_eq!(puzzle.key_provided(), Some(key));
    }
}
