#![forbid(unsafe_code)]

pub mod answer_set;
pub mod error;
pub mod sessions;

pub use sessions as session;

pub use answer_set::{AnswerSet, AnswerSetBuilder};
pub use error::{AnswerSetError, SessionError};
pub use sessions::{QuizSession, SessionProgress};
