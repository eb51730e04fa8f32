use serde::Serialize;
use thiserror::Error;

use crate::model::ids::LocationId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LocationError {
    #[error("location id cannot be empty")]
    EmptyId,

    #[error("location name cannot be empty")]
    EmptyName,
}

/// An answer choice, and the correct association of a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    id: LocationId,
    name: String,
}

impl Location {
    /// Create a validated location. Id and name are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `LocationError::EmptyId` or `LocationError::EmptyName` when either
    /// value is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, LocationError> {
        let id = id.into();
        let id = id.trim();
        if id.is_empty() {
            return Err(LocationError::EmptyId);
        }
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(LocationError::EmptyName);
        }
        Ok(Self {
            id: LocationId::new(id),
            name: name.to_string(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
