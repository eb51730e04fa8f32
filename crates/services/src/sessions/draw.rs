use rand::Rng;
use std::collections::HashSet;

use trivia_core::model::{Subject, SubjectId};

/// Non-repeating random draw over a subject pool.
///
/// Ids enter `asked` before the subject is handed out and never leave it, so a
/// subject comes up at most once per draw.
#[derive(Debug, Clone, Default)]
pub(crate) struct SubjectDraw {
    pool: Vec<Subject>,
    asked: HashSet<SubjectId>,
    limit: usize,
}

impl SubjectDraw {
    /// Duplicate ids in `pool` collapse to their first occurrence.
    pub(crate) fn new(pool: impl IntoIterator<Item = Subject>, limit: Option<u32>) -> Self {
        let mut seen = HashSet::new();
        let pool: Vec<Subject> = pool
            .into_iter()
            .filter(|s| seen.insert(s.id().clone()))
            .collect();
        let limit = limit
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(usize::MAX)
            .min(pool.len());
        Self {
            pool,
            asked: HashSet::new(),
            limit,
        }
    }

    /// Pick uniformly among subjects not yet asked.
    pub(crate) fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Subject> {
        if self.asked.len() >= self.limit {
            return None;
        }
        let available: Vec<&Subject> = self
            .pool
            .iter()
            .filter(|s| !self.asked.contains(s.id()))
            .collect();
        if available.is_empty() {
            return None;
        }
        let picked = available[rng.random_range(0..available.len())].clone();
        self.asked.insert(picked.id().clone());
        Some(picked)
    }

    /// Number of questions this draw will hand out in total.
    pub(crate) fn total(&self) -> usize {
        self.limit
    }

    pub(crate) fn drawn(&self) -> usize {
        self.asked.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.asked.len())
    }
}
