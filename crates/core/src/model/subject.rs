use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{LocationId, SubjectId};
use crate::model::location::Location;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject id cannot be empty")]
    EmptyId,

    #[error("subject name cannot be empty")]
    EmptyName,
}

/// The entity a question is asked about.
///
/// `correct_location` is `None` when the data source has no association on
/// record; such subjects cannot produce an answerable question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    id: SubjectId,
    name: String,
    correct_location: Option<Location>,
}

impl Subject {
    /// Create a validated subject. Id and name are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyId` or `SubjectError::EmptyName` when either
    /// value is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        correct_location: Option<Location>,
    ) -> Result<Self, SubjectError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(SubjectError::EmptyId);
        }
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(SubjectError::EmptyName);
        }
        Ok(Self {
            id: SubjectId::new(id),
            name: name.to_string(),
            correct_location,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn correct_location(&self) -> Option<&Location> {
        self.correct_location.as_ref()
    }

    #[must_use]
    pub fn correct_location_id(&self) -> Option<&LocationId> {
        self.correct_location.as_ref().map(Location::id)
    }

    /// True when the subject has no correct location on record.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.correct_location.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_exposes_correct_location() {
        let tatooine = Location::new("T", "Tatooine").unwrap();
        let luke = Subject::new("1", "Luke Skywalker", Some(tatooine.clone())).unwrap();

        assert_eq!(luke.correct_location(), Some(&tatooine));
        assert_eq!(luke.correct_location_id(), Some(&LocationId::new("T")));
        assert!(!luke.is_degenerate());
    }

    #[test]
    fn subject_without_location_is_degenerate() {
        let droid = Subject::new("2", "IG-88", None).unwrap();
        assert!(droid.is_degenerate());
        assert_eq!(droid.correct_location_id(), None);
    }

    #[test]
    fn subject_rejects_blank_values() {
        assert_eq!(Subject::new(" ", "Leia", None), Err(SubjectError::EmptyId));
        assert_eq!(Subject::new("5", "", None), Err(SubjectError::EmptyName));
    }
}
