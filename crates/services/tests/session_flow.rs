use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use services::{AnswerSetBuilder, QuizSession, SessionError};
use trivia_core::model::{
    Location, LocationId, LocationRecord, QuizSettings, SessionStatus, Subject, SubjectRecord,
    records::convert_all,
};

fn loc(id: &str, name: &str) -> Location {
    Location::new(id, name).unwrap()
}

fn planets() -> Vec<Location> {
    vec![
        loc("T", "Tatooine"),
        loc("A", "Alderaan"),
        loc("D", "Dagobah"),
        loc("H", "Hoth"),
        loc("B", "Bespin"),
        loc("N", "Naboo"),
    ]
}

fn people() -> Vec<Subject> {
    let homeworlds = ["T", "A", "N", "T", "D", "B", "N", "H", "A", "T"];
    homeworlds
        .iter()
        .enumerate()
        .map(|(i, home)| {
            let planet = planets().into_iter().find(|p| p.id().as_str() == *home);
            Subject::new(format!("p{i}"), format!("Person {i}"), planet).unwrap()
        })
        .collect()
}

#[test]
fn no_subject_is_drawn_twice() {
    for seed in 0..50 {
        let mut session = QuizSession::seeded(QuizSettings::default(), seed);
        session.start(people(), planets()).unwrap();
        let mut seen = HashSet::new();

        while let Some(question) = session.current_question() {
            assert!(seen.insert(question.subject().id().clone()));
            session.submit_choice(0).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(seen.len(), people().len());
    }
}

#[test]
fn correct_never_exceeds_asked() {
    for seed in 0..50 {
        let mut session = QuizSession::seeded(QuizSettings::default(), seed);
        session.start(people(), planets()).unwrap();
        let mut picker = StdRng::seed_from_u64(seed.wrapping_add(1000));

        while let Some(question) = session.current_question() {
            let choice = picker.random_range(0..question.candidates().len());
            session.submit_choice(choice).unwrap();
            let score = session.score();
            assert!(score.correct() <= score.asked());
            session.advance().unwrap();
        }
    }
}

#[test]
fn exhausts_after_one_cycle_per_subject() {
    let mut session = QuizSession::seeded(QuizSettings::default(), 3);
    session.start(people(), planets()).unwrap();

    let mut cycles = 0;
    loop {
        assert_eq!(session.status(), SessionStatus::AwaitingAnswer);
        let correct = session.current_question().unwrap().correct_index().unwrap();
        session.submit_choice(correct).unwrap();
        cycles += 1;
        if session.advance().unwrap().is_none() {
            break;
        }
    }

    assert_eq!(cycles, people().len());
    assert_eq!(session.status(), SessionStatus::Exhausted);
    assert!(session.current_question().is_none());
    assert_eq!(session.score().correct(), 10);
    assert_eq!(session.score().asked(), 10);
    assert_eq!(session.score().accuracy_percent(), Some(100));

    let progress = session.progress();
    assert_eq!(progress.total, 10);
    assert_eq!(progress.answered, 10);
    assert_eq!(progress.remaining, 0);
}

#[test]
fn every_question_has_exactly_one_correct_choice() {
    let mut session = QuizSession::seeded(QuizSettings::default(), 21);
    session.start(people(), planets()).unwrap();

    while let Some(question) = session.current_question() {
        let correct_id = question.subject().correct_location_id().unwrap().clone();
        assert_eq!(question.candidates().len(), 4);
        let hits = question
            .candidates()
            .iter()
            .filter(|c| *c.id() == correct_id)
            .count();
        assert_eq!(hits, 1);

        session.submit_answer(&correct_id).unwrap();
        session.advance().unwrap();
    }
}

#[test]
fn luke_scenario() {
    let subject_json = r#"[{"id":"1","name":"Luke","correctLocation":{"id":"T","name":"Tatooine"}}]"#;
    let location_json = r#"[
        {"id":"T","name":"Tatooine"},
        {"id":"A","name":"Alderaan"},
        {"id":"D","name":"Dagobah"},
        {"id":"H","name":"Hoth"}
    ]"#;
    let subjects: Vec<Subject> =
        convert_all(serde_json::from_str::<Vec<SubjectRecord>>(subject_json).unwrap()).unwrap();
    let locations: Vec<Location> =
        convert_all(serde_json::from_str::<Vec<LocationRecord>>(location_json).unwrap()).unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    let set = AnswerSetBuilder::default()
        .build(&subjects[0], &locations, &mut rng)
        .unwrap();
    assert_eq!(set.len(), 4);
    let mut ids: Vec<_> = set.candidates().iter().map(|c| c.id().as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["A", "D", "H", "T"]);

    let mut session = QuizSession::seeded(QuizSettings::default(), 99);
    session.start(subjects.clone(), locations.clone()).unwrap();
    assert!(session.submit_answer(&LocationId::new("T")).unwrap().correct);

    let mut session = QuizSession::seeded(QuizSettings::default(), 99);
    session.start(subjects, locations).unwrap();
    assert!(!session.submit_answer(&LocationId::new("A")).unwrap().correct);
}

#[test]
fn empty_subject_pool_fails() {
    let mut session = QuizSession::new(QuizSettings::default());
    assert_eq!(
        session.start(Vec::new(), planets()).unwrap_err(),
        SessionError::EmptyPool
    );
}

#[test]
fn double_submit_and_early_advance_fail() {
    let mut session = QuizSession::new(QuizSettings::default());
    session.start(people(), planets()).unwrap();

    assert_eq!(session.advance().unwrap_err(), SessionError::NotAnswered);
    session.submit_choice(2).unwrap();
    assert_eq!(session.submit_choice(1), Err(SessionError::AlreadyAnswered));
}

#[test]
fn repeated_location_ids_show_up_once_per_question() {
    let luke = Subject::new("1", "Luke", Some(loc("T", "Tatooine"))).unwrap();
    let pool = vec![
        loc("T", "Tatooine"),
        loc("A", "Alderaan"),
        loc("A", "Alderaan"),
        loc("A", "Alderaan"),
        loc("H", "Hoth"),
    ];

    for seed in 0..50 {
        let mut session = QuizSession::seeded(QuizSettings::default(), seed);
        let question = session.start(vec![luke.clone()], pool.clone()).unwrap();
        let alderaan = question
            .candidates()
            .iter()
            .filter(|c| c.id().as_str() == "A")
            .count();
        assert_eq!(alderaan, 1);
        assert_eq!(question.candidates().len(), 3);
    }
}
