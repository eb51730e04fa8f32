use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use trivia_core::model::{Location, LocationRecord, Subject, SubjectRecord, records::convert_all};

const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dataset entry: {0}")]
    Invalid(#[from] trivia_core::Error),
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    subjects: Vec<SubjectRecord>,
    #[serde(default)]
    locations: Vec<LocationRecord>,
}

/// Subject and location pools, validated and ready for a session.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub subjects: Vec<Subject>,
    pub locations: Vec<Location>,
}

impl Dataset {
    /// Load from `path`, or the bundled sample when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&raw)
            }
            None => Self::from_json(SAMPLE_DATASET),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        Ok(Self {
            subjects: convert_all(file.subjects)?,
            locations: convert_all(file.locations)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::SubjectError;

    #[test]
    fn sample_dataset_loads() {
        let dataset = Dataset::load(None).unwrap();
        assert!(dataset.subjects.len() >= 10);
        assert!(dataset.locations.len() >= 4);
        assert!(dataset.subjects.iter().any(Subject::is_degenerate));
    }

    #[test]
    fn blank_subject_name_is_invalid() {
        let raw = r#"{"subjects":[{"id":"1","name":" "}],"locations":[]}"#;
        let err = Dataset::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Invalid(trivia_core::Error::Subject(SubjectError::EmptyName))
        ));
    }

    #[test]
    fn missing_subjects_is_malformed() {
        let err = Dataset::from_json(r#"{"locations":[]}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.json");
        fs::write(
            &path,
            r#"{"subjects":[{"id":"1","name":"Luke","homeworld":{"id":"T","name":"Tatooine"}}],
                "locations":[{"id":"T","name":"Tatooine"},{"id":"H","name":"Hoth"}]}"#,
        )
        .unwrap();

        let dataset = Dataset::load(Some(&path)).unwrap();
        assert_eq!(dataset.subjects.len(), 1);
        assert_eq!(dataset.locations.len(), 2);
    }
}
