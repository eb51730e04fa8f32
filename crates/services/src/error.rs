//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::{LocationId, SubjectId};

/// Errors emitted by `AnswerSetBuilder`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerSetError {
    #[error("subject {subject_id} has no correct location on record")]
    DegenerateQuestion { subject_id: SubjectId },
    #[error("answer set size must be at least 2, got {size}")]
    InvalidSize { size: usize },
}

/// Errors emitted by session services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no subjects available for session")]
    EmptyPool,
    #[error("session has not been started")]
    NotStarted,
    #[error("session is exhausted")]
    Exhausted,
    #[error("current question was already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered")]
    NotAnswered,
    #[error("location {location_id} is not one of the current choices")]
    NotACandidate { location_id: LocationId },
    #[error("choice {index} is out of range for {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    AnswerSet(#[from] AnswerSetError),
}
