mod ids;
mod location;
mod question;
pub mod records;
mod session;
mod settings;
mod subject;

pub use ids::{LocationId, ParseIdError, SubjectId};
pub use records::{LocationRecord, SubjectRecord};

pub use location::{Location, LocationError};
pub use question::{AnswerVerdict, QuestionRecord};
pub use session::{Score, SessionStatus};
pub use settings::{
    DEFAULT_ANSWER_SET_SIZE, MIN_ANSWER_SET_SIZE, MissingLocationPolicy, QuizSettings,
    QuizSettingsDraft, QuizSettingsError,
};
pub use subject::{Subject, SubjectError};
