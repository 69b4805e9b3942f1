//! Numeric puzzle with a tolerance band.
//!
//! An arithmetic puzzle stores one expected value and accepts any number
//! within `tolerance` of it (inclusive). Text input is parsed as a number
//! first, so "12" and `12.0` behave the same.

use serde::{Deserialize, Serialize};

use super::{Attempt, AttemptOutcome};

/// State of a numeric puzzle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArithmeticState {
    answer: f64,
    tolerance: f64,
}

impl ArithmeticState {
    /// Create a numeric puzzle. Negative tolerances clamp to zero.
    #[must_use]
    pub fn new(answer: f64, tolerance: f64) -> Self {
        Self {
            answer,
            tolerance: tolerance.max(0.0),
        }
    }

    /// The expected value.
    #[must_use]
    pub fn answer(&self) -> f64 {
        self.answer
    }

    /// The accepted deviation from the expected value.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub(crate) fn attempt(&self, input: &Attempt) -> AttemptOutcome {
        let guess = match input {
            Attempt::Number(value) => *value,
            Attempt::Text(text) => match text.trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => return AttemptOutcome::Miss,
            },
            Attempt::Colors(_) => return AttemptOutcome::Miss,
        };
        if (guess - self.answer).abs() <= self.tolerance {
            AttemptOutcome::Solved
        } else {
            AttemptOutcome::Miss
        }
    }

    pub(crate) fn canned_hint(&self) -> &'static str {
        "Combine the displayed values exactly as the prompt describes."
    }
}
