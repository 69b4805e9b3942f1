//! Free-text riddle puzzle.
//!
//! A riddle accepts any of a set of answers, compared after trimming and
//! lowercasing. There is no intermediate progress: an attempt either
//! solves the riddle or misses.

use serde::{Deserialize, Serialize};

use super::{Attempt, AttemptOutcome};

/// State of a free-text riddle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RiddleState {
    answers: Vec<String>,
}

impl RiddleState {
    /// Create a riddle from its accepted answers. Answers are normalized
    /// (trimmed, lowercased) at construction so attempts compare cheaply.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers
                .into_iter()
                .map(|s| normalize(&s.into()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// The normalized accepted answers.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub(crate) fn attempt(&self, input: &Attempt) -> AttemptOutcome {
        let guess = match input {
            Attempt::Text(text) => normalize(text),
            Attempt::Colors(_) | Attempt::Number(_) => return AttemptOutcome::Miss,
        };
        if !guess.is_empty() && self.answers.iter().any(|a| *a == guess) {
            AttemptOutcome::Solved
        } else {
            AttemptOutcome::Miss
        }
    }

    pub(crate) fn canned_hint(&self) -> &'static str {
        "Picture something with a bed, a mouth, and a foot that never leaves its place."
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
