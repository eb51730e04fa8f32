use thiserror::Error;

use crate::model::{LocationError, QuizSettingsError, SubjectError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
}
