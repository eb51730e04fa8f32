use crate::model::ids::LocationId;
use crate::model::location::Location;
use crate::model::subject::Subject;

/// A question as shown to the player: the subject and its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    subject: Subject,
    candidates: Vec<Location>,
    correct_index: Option<usize>,
}

impl QuestionRecord {
    /// Pair a subject with its candidate list.
    ///
    /// The correct index is derived from the subject's correct location, so it
    /// can never disagree with the candidates.
    #[must_use]
    pub fn new(subject: Subject, candidates: Vec<Location>) -> Self {
        let correct_index = subject
            .correct_location_id()
            .and_then(|id| candidates.iter().position(|c| c.id() == id));
        Self {
            subject,
            candidates,
            correct_index,
        }
    }

    /// Pair a subject with candidates whose correct slot is already known.
    ///
    /// `correct_index` must point at the subject's correct location.
    #[must_use]
    pub fn with_correct_index(
        subject: Subject,
        candidates: Vec<Location>,
        correct_index: usize,
    ) -> Self {
        debug_assert_eq!(
            candidates.get(correct_index).map(Location::id),
            subject.correct_location_id()
        );
        Self {
            subject,
            candidates,
            correct_index: Some(correct_index),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    #[must_use]
    pub fn candidates(&self) -> &[Location] {
        &self.candidates
    }

    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.correct_index
    }

    #[must_use]
    pub fn correct_location(&self) -> Option<&Location> {
        self.correct_index.and_then(|i| self.candidates.get(i))
    }

    /// Index of the candidate with the given id, if it is on offer.
    #[must_use]
    pub fn position_of(&self, id: &LocationId) -> Option<usize> {
        self.candidates.iter().position(|c| c.id() == id)
    }
}

/// Outcome of a single submission.
///
/// Carries the correct choice so a front end can reveal it after a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerVerdict {
    pub correct: bool,
    pub selected_index: usize,
    pub correct_index: Option<usize>,
    pub correct_location_id: Option<LocationId>,
}
