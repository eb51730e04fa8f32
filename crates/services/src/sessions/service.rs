use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, instrument};

use trivia_core::model::{
    AnswerVerdict, Location, LocationId, MissingLocationPolicy, QuestionRecord, QuizSettings,
    Score, SessionStatus, Subject,
};

use super::draw::SubjectDraw;
use super::progress::SessionProgress;
use crate::answer_set::AnswerSetBuilder;
use crate::error::{AnswerSetError, SessionError};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    NotStarted,
    AwaitingAnswer,
    Answered(AnswerVerdict),
    Exhausted,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session.
///
/// Draws subjects without repetition, builds a candidate set for each one and
/// keeps the running score. Every transition takes `&mut self`; hosts that
/// share a session across threads must serialize access themselves.
pub struct QuizSession<R = StdRng> {
    settings: QuizSettings,
    builder: AnswerSetBuilder,
    rng: R,
    locations: Vec<Location>,
    draw: SubjectDraw,
    current: Option<QuestionRecord>,
    phase: Phase,
    score: Score,
}

impl QuizSession<StdRng> {
    /// Create a session seeded from the thread-local generator.
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self::with_rng(settings, StdRng::from_rng(&mut rand::rng()))
    }

    /// Create a session whose draws are reproducible for a given seed.
    #[must_use]
    pub fn seeded(settings: QuizSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    #[must_use]
    pub fn with_rng(settings: QuizSettings, rng: R) -> Self {
        Self {
            builder: AnswerSetBuilder::from_settings(&settings),
            settings,
            rng,
            locations: Vec::new(),
            draw: SubjectDraw::default(),
            current: None,
            phase: Phase::NotStarted,
            score: Score::new(),
        }
    }

    /// Start (or restart) the session and draw the first question.
    ///
    /// Subjects without a correct location are dropped or rejected according
    /// to the settings. On error the previous state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyPool` if no drawable subject remains, and
    /// `AnswerSetError::DegenerateQuestion` under `MissingLocationPolicy::Reject`.
    #[instrument(level = "debug", skip_all)]
    pub fn start(
        &mut self,
        subjects: impl IntoIterator<Item = Subject>,
        locations: impl IntoIterator<Item = Location>,
    ) -> Result<&QuestionRecord, SessionError> {
        let mut drawable = Vec::new();
        for subject in subjects {
            if !subject.is_degenerate() {
                drawable.push(subject);
                continue;
            }
            match self.settings.missing_location() {
                MissingLocationPolicy::Skip => {
                    debug!(subject_id = %subject.id(), "skipping subject without location");
                }
                MissingLocationPolicy::Reject => {
                    return Err(AnswerSetError::DegenerateQuestion {
                        subject_id: subject.id().clone(),
                    }
                    .into());
                }
            }
        }
        if drawable.is_empty() {
            return Err(SessionError::EmptyPool);
        }

        self.draw = SubjectDraw::new(drawable, self.settings.question_limit());
        self.locations = locations.into_iter().collect();
        self.score = Score::new();
        self.current = None;
        debug!(
            subjects = self.draw.total(),
            locations = self.locations.len(),
            "session started"
        );

        self.draw_next()?;
        self.current.as_ref().ok_or(SessionError::EmptyPool)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::NotStarted => SessionStatus::NotStarted,
            Phase::AwaitingAnswer => SessionStatus::AwaitingAnswer,
            Phase::Answered(_) => SessionStatus::Answered,
            Phase::Exhausted => SessionStatus::Exhausted,
        }
    }

    /// The active question; `None` before `start` and once exhausted.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Verdict for the current question, held until `advance`.
    #[must_use]
    pub fn last_verdict(&self) -> Option<&AnswerVerdict> {
        match &self.phase {
            Phase::Answered(verdict) => Some(verdict),
            _ => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.draw.total(),
            drawn: self.draw.drawn(),
            answered: usize::try_from(self.score.asked()).unwrap_or(usize::MAX),
            remaining: self.draw.remaining(),
            is_complete: self.phase == Phase::Exhausted,
        }
    }

    /// Answer the current question by location id.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` on a second submission,
    /// `SessionError::NotACandidate` if the id is not among the choices, and
    /// `NotStarted` / `Exhausted` outside an active question.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_answer(
        &mut self,
        location_id: &LocationId,
    ) -> Result<AnswerVerdict, SessionError> {
        let question = self.awaiting_question()?;
        let selected_index = question.position_of(location_id).ok_or_else(|| {
            SessionError::NotACandidate {
                location_id: location_id.clone(),
            }
        })?;
        Ok(self.record_answer(selected_index))
    }

    /// Answer the current question by choice slot.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_answer`], with `SessionError::ChoiceOutOfRange`
    /// for an index past the last choice.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_choice(&mut self, index: usize) -> Result<AnswerVerdict, SessionError> {
        let question = self.awaiting_question()?;
        let len = question.candidates().len();
        if index >= len {
            return Err(SessionError::ChoiceOutOfRange { index, len });
        }
        Ok(self.record_answer(index))
    }

    /// Move past an answered question.
    ///
    /// Returns the next question, or `None` once the pool or question limit is
    /// used up and the session is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while the current question is open,
    /// and `NotStarted` / `Exhausted` outside a running session.
    #[instrument(level = "debug", skip(self))]
    pub fn advance(&mut self) -> Result<Option<&QuestionRecord>, SessionError> {
        match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Exhausted => return Err(SessionError::Exhausted),
            Phase::AwaitingAnswer => return Err(SessionError::NotAnswered),
            Phase::Answered(_) => {}
        }
        self.draw_next()?;
        Ok(self.current.as_ref())
    }

    fn awaiting_question(&self) -> Result<&QuestionRecord, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::Exhausted => Err(SessionError::Exhausted),
            Phase::Answered(_) => Err(SessionError::AlreadyAnswered),
            Phase::AwaitingAnswer => self.current.as_ref().ok_or(SessionError::Exhausted),
        }
    }

    fn record_answer(&mut self, selected_index: usize) -> AnswerVerdict {
        let (correct_index, correct_location_id) = match &self.current {
            Some(question) => (
                question.correct_index(),
                question.subject().correct_location_id().cloned(),
            ),
            None => (None, None),
        };
        let verdict = AnswerVerdict {
            correct: correct_index == Some(selected_index),
            selected_index,
            correct_index,
            correct_location_id,
        };
        self.score.record(verdict.correct);
        debug!(correct = verdict.correct, score = %self.score, "answer recorded");
        self.phase = Phase::Answered(verdict.clone());
        verdict
    }

    fn draw_next(&mut self) -> Result<(), SessionError> {
        let Some(subject) = self.draw.next(&mut self.rng) else {
            debug!(score = %self.score, "session exhausted");
            self.current = None;
            self.phase = Phase::Exhausted;
            return Ok(());
        };
        let answers = self.builder.build(&subject, &self.locations, &mut self.rng)?;
        debug!(
            subject_id = %subject.id(),
            choices = answers.len(),
            drawn = self.draw.drawn(),
            "question drawn"
        );
        self.current = Some(answers.into_question(subject));
        self.phase = Phase::AwaitingAnswer;
        Ok(())
    }
}

impl<R> fmt::Debug for QuizSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("settings", &self.settings)
            .field("locations_len", &self.locations.len())
            .field("drawn", &self.draw.drawn())
            .field("current", &self.current.as_ref().map(|q| q.subject().id()))
            .field("phase", &self.phase)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
