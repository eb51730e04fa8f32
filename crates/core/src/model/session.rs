use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a session is in its per-question cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    NotStarted,
    AwaitingAnswer,
    Answered,
    Exhausted,
}

impl SessionStatus {
    /// True once no further questions can be drawn.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Running tally for a session.
///
/// `correct` never exceeds `asked`; both only grow through [`Score::record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    asked: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one answered question.
    pub fn record(&mut self, correct: bool) {
        self.asked = self.asked.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1).min(self.asked);
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn asked(&self) -> u32 {
        self.asked
    }

    /// Share of correct answers, rounded to whole percent. `None` before the
    /// first answer.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.asked == 0 {
            return None;
        }
        let asked = u64::from(self.asked);
        let pct = (u64::from(self.correct) * 100 + asked / 2) / asked;
        u32::try_from(pct).ok()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.asked)
    }
}
