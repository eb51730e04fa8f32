use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("answer set size must be at least 2")]
    InvalidAnswerSetSize,

    #[error("question limit must be > 0 when set")]
    InvalidQuestionLimit,
}

//
// ─── POLICY ────────────────────────────────────────────────────────────────────
//

/// What a session does with subjects that have no correct location on record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLocationPolicy {
    /// Leave such subjects out of the draw.
    #[default]
    Skip,
    /// Refuse to start a session whose pool contains one.
    Reject,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

pub const DEFAULT_ANSWER_SET_SIZE: usize = 4;
pub const MIN_ANSWER_SET_SIZE: usize = 2;

/// Knobs for a single quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    answer_set_size: usize,
    question_limit: Option<u32>,
    missing_location: MissingLocationPolicy,
}

impl QuizSettings {
    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError::InvalidAnswerSetSize` if fewer than two choices
    /// are requested, or `QuizSettingsError::InvalidQuestionLimit` for a zero limit.
    pub fn new(
        answer_set_size: usize,
        question_limit: Option<u32>,
        missing_location: MissingLocationPolicy,
    ) -> Result<Self, QuizSettingsError> {
        if answer_set_size < MIN_ANSWER_SET_SIZE {
            return Err(QuizSettingsError::InvalidAnswerSetSize);
        }
        if question_limit == Some(0) {
            return Err(QuizSettingsError::InvalidQuestionLimit);
        }
        Ok(Self {
            answer_set_size,
            question_limit,
            missing_location,
        })
    }

    /// Number of choices shown per question, including the correct one.
    #[must_use]
    pub fn answer_set_size(&self) -> usize {
        self.answer_set_size
    }

    /// Maximum number of questions per session; `None` means the whole pool.
    #[must_use]
    pub fn question_limit(&self) -> Option<u32> {
        self.question_limit
    }

    #[must_use]
    pub fn missing_location(&self) -> MissingLocationPolicy {
        self.missing_location
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            answer_set_size: DEFAULT_ANSWER_SET_SIZE,
            question_limit: None,
            missing_location: MissingLocationPolicy::default(),
        }
    }
}

/// Unvalidated settings, as read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuizSettingsDraft {
    pub answer_set_size: Option<usize>,
    pub question_limit: Option<u32>,
    pub missing_location: Option<MissingLocationPolicy>,
}

impl QuizSettingsDraft {
    /// Fill unset fields from the defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `QuizSettingsError` for out-of-range values.
    pub fn validate(self) -> Result<QuizSettings, QuizSettingsError> {
        QuizSettings::new(
            self.answer_set_size.unwrap_or(DEFAULT_ANSWER_SET_SIZE),
            self.question_limit,
            self.missing_location.unwrap_or_default(),
        )
    }
}
