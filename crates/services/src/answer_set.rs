use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use trivia_core::model::{
    DEFAULT_ANSWER_SET_SIZE, Location, LocationId, MIN_ANSWER_SET_SIZE, QuestionRecord,
    QuizSettings, Subject,
};

use crate::error::AnswerSetError;

/// Ordered choices for one question, with the slot holding the correct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    candidates: Vec<Location>,
    correct_index: usize,
}

impl AnswerSet {
    #[must_use]
    pub fn candidates(&self) -> &[Location] {
        &self.candidates
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Attach the set to the subject it was built for.
    #[must_use]
    pub fn into_question(self, subject: Subject) -> QuestionRecord {
        QuestionRecord::with_correct_index(subject, self.candidates, self.correct_index)
    }
}

/// Builds the shuffled candidate list for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerSetBuilder {
    size: usize,
}

impl AnswerSetBuilder {
    /// # Errors
    ///
    /// Returns `AnswerSetError::InvalidSize` for sizes below two.
    pub fn new(size: usize) -> Result<Self, AnswerSetError> {
        if size < MIN_ANSWER_SET_SIZE {
            return Err(AnswerSetError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    #[must_use]
    pub fn from_settings(settings: &QuizSettings) -> Self {
        Self {
            size: settings.answer_set_size(),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Build the candidates for `subject` out of `locations`.
    ///
    /// Any pool entry sharing the correct location's id is dropped and repeated
    /// ids keep only their first occurrence. The rest is shuffled and cut to
    /// `size - 1` distractors, and the correct location is inserted at a
    /// uniformly chosen slot. With a short pool every distractor is used and
    /// the set ends up smaller than `size`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerSetError::DegenerateQuestion` if the subject has no
    /// correct location.
    pub fn build<R: Rng + ?Sized>(
        &self,
        subject: &Subject,
        locations: &[Location],
        rng: &mut R,
    ) -> Result<AnswerSet, AnswerSetError> {
        let Some(correct) = subject.correct_location() else {
            return Err(AnswerSetError::DegenerateQuestion {
                subject_id: subject.id().clone(),
            });
        };

        let mut seen: HashSet<&LocationId> = HashSet::from([correct.id()]);
        let mut candidates: Vec<Location> = locations
            .iter()
            .filter(|location| seen.insert(location.id()))
            .cloned()
            .collect();
        candidates.as_mut_slice().shuffle(rng);
        candidates.truncate(self.size - 1);

        let correct_index = rng.random_range(0..=candidates.len());
        candidates.insert(correct_index, correct.clone());

        Ok(AnswerSet {
            candidates,
            correct_index,
        })
    }
}

impl Default for AnswerSetBuilder {
    fn default() -> Self {
        Self {
            size: DEFAULT_ANSWER_SET_SIZE,
        }
    }
}
