//! Line-oriented quiz front end over any reader/writer pair.

use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, instrument};

use services::{QuizSession, SessionError};
use trivia_core::model::{QuestionRecord, Score};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished(Score),
    Quit(Score),
}

pub struct Terminal<'a, I, O> {
    input: I,
    output: O,
    config: &'a AppConfig,
}

impl<'a, I: BufRead, O: Write> Terminal<'a, I, O> {
    pub fn new(input: I, output: O, config: &'a AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play a started session until it is exhausted or the player quits.
    #[instrument(level = "debug", skip_all)]
    pub fn run<R: Rng>(&mut self, session: &mut QuizSession<R>) -> Result<Outcome, TerminalError> {
        while let Some(question) = session.current_question() {
            let progress = session.progress();
            writeln!(self.output)?;
            writeln!(self.output, "Q: {} / {}", progress.drawn, progress.total)?;
            self.render_question(question)?;

            let Some(choice) = self.read_choice(question.candidates().len())? else {
                debug!("player quit");
                return self.finish(Outcome::Quit(session.score()));
            };
            let verdict = session.submit_choice(choice)?;

            if verdict.correct {
                writeln!(self.output, "Correct!")?;
            } else {
                let answer = session
                    .current_question()
                    .and_then(QuestionRecord::correct_location)
                    .map_or("unknown", |l| l.name());
                writeln!(self.output, "Wrong! The answer was {answer}.")?;
            }
            writeln!(self.output, "Results: {}", session.score())?;

            if progress.remaining > 0 {
                write!(self.output, "Press Enter for the next question...")?;
                self.output.flush()?;
                let mut line = String::new();
                self.input.read_line(&mut line)?;
            }
            session.advance()?;
        }
        self.finish(Outcome::Finished(session.score()))
    }

    fn render_question(&mut self, question: &QuestionRecord) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            self.config.question_for(question.subject().name())
        )?;
        for (i, candidate) in question.candidates().iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, candidate.name())?;
        }
        Ok(())
    }

    /// Read a 1-based choice. `None` on EOF or an explicit quit.
    fn read_choice(&mut self, len: usize) -> io::Result<Option<usize>> {
        loop {
            write!(self.output, "Your answer (1-{len}, q to quit): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Pick a number between 1 and {len}.")?,
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, TerminalError> {
        let (Outcome::Finished(score) | Outcome::Quit(score)) = outcome;
        writeln!(self.output)?;
        match score.accuracy_percent() {
            Some(pct) => writeln!(self.output, "Final score: {score} ({pct}%)")?,
            None => writeln!(self.output, "Final score: {score}")?,
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use trivia_core::model::{Location, QuizSettings, Subject};

    fn loc(id: &str, name: &str) -> Location {
        Location::new(id, name).unwrap()
    }

    fn started(subjects: Vec<Subject>) -> QuizSession {
        let mut session = QuizSession::seeded(QuizSettings::default(), 5);
        let planets = vec![
            loc("T", "Tatooine"),
            loc("A", "Alderaan"),
            loc("D", "Dagobah"),
            loc("H", "Hoth"),
        ];
        session.start(subjects, planets).unwrap();
        session
    }

    fn luke() -> Subject {
        Subject::new("1", "Luke", Some(loc("T", "Tatooine"))).unwrap()
    }

    fn play(session: &mut QuizSession, script: &str) -> (Outcome, String) {
        let config = AppConfig::default();
        let mut out = Vec::new();
        let outcome = Terminal::new(Cursor::new(script.to_string()), &mut out, &config)
            .run(session)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn correct_answer_finishes_with_full_score() {
        let mut session = started(vec![luke()]);
        let slot = session.current_question().unwrap().correct_index().unwrap() + 1;

        let (outcome, out) = play(&mut session, &format!("{slot}\n"));

        assert!(out.contains("What planet is Luke from?"));
        assert!(out.contains("Q: 1 / 1"));
        assert!(out.contains("Correct!"));
        assert!(out.contains("Final score: 1 / 1 (100%)"));
        assert!(matches!(outcome, Outcome::Finished(score) if score.correct() == 1));
    }

    #[test]
    fn wrong_answer_reveals_correct_location() {
        let mut session = started(vec![luke()]);
        let correct = session.current_question().unwrap().correct_index().unwrap();
        let wrong = (correct + 1) % 4 + 1;

        let (_, out) = play(&mut session, &format!("{wrong}\n"));

        assert!(out.contains("Wrong! The answer was Tatooine."));
        assert!(out.contains("Results: 0 / 1"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let mut session = started(vec![luke()]);
        let (_, out) = play(&mut session, "abc\n9\n1\n");
        assert_eq!(out.matches("Pick a number between 1 and 4.").count(), 2);
        assert_eq!(session.score().asked(), 1);
    }

    #[test]
    fn quit_stops_before_answering() {
        let leia = Subject::new("5", "Leia", Some(loc("A", "Alderaan"))).unwrap();
        let mut session = started(vec![luke(), leia]);

        let (outcome, out) = play(&mut session, "1\n\nq\n");

        assert!(matches!(outcome, Outcome::Quit(score) if score.asked() == 1));
        assert!(out.contains("Press Enter for the next question"));
        assert!(out.contains("Q: 2 / 2"));
    }

    #[test]
    fn eof_counts_as_quit() {
        let mut session = started(vec![luke()]);
        let (outcome, out) = play(&mut session, "");
        assert_eq!(outcome, Outcome::Quit(Score::new()));
        assert!(out.contains("Final score: 0 / 0"));
    }
}
