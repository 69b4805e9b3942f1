//! Puzzle kinds and the attempt pipeline.
//!
//! ## Key Types
//!
//! - `Puzzle`: Kind-agnostic shell (identity, hints, solved flag, key)
//! - `PuzzleKind`: Kind-specific state and matching rules
//! - `Attempt`: Player input, structured or free text
//! - `SequenceState` / `RiddleState` / `ArithmeticState`: The kinds
//!
//! ## Attempt Flow
//!
//! Every kind consumes an [`Attempt`] and reports a miss, intermediate
//! progress, or a solve. Only the shell flips the solved flag; kinds
//! stay pure matchers over their own state.

pub mod arithmetic;
pub mod puzzle;
pub mod riddle;
pub mod sequence;

pub use arithmetic::ArithmeticState;
pub use puzzle::{Attempt, Puzzle, PuzzleKind};
pub use riddle::RiddleState;
pub use sequence::{Color, SequenceState};

pub(crate) use puzzle::AttemptOutcome;
