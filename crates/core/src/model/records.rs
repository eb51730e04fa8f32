//! Wire shapes handed over by the data-fetch collaborator.
//!
//! Records are unvalidated; convert them with `TryFrom` before use.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::location::Location;
use crate::model::subject::Subject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRecord {
    pub id: String,
    pub name: String,
    // `homeworld` is the field name used by the people/planets schema.
    #[serde(default, alias = "homeworld")]
    pub correct_location: Option<LocationRecord>,
}

impl TryFrom<LocationRecord> for Location {
    type Error = Error;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        Ok(Location::new(record.id, record.name)?)
    }
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = Error;

    fn try_from(record: SubjectRecord) -> Result<Self, Self::Error> {
        let correct_location = record
            .correct_location
            .map(Location::try_from)
            .transpose()?;
        Ok(Subject::new(record.id, record.name, correct_location)?)
    }
}

/// Convert a batch of records, stopping at the first invalid one.
///
/// # Errors
///
/// Returns the validation error of the first record that fails.
pub fn convert_all<R, T>(records: impl IntoIterator<Item = R>) -> Result<Vec<T>, Error>
where
    T: TryFrom<R, Error = Error>,
{
    records.into_iter().map(T::try_from).collect()
}
