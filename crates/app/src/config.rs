use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use trivia_core::model::{QuizSettings, QuizSettingsDraft, QuizSettingsError};

pub const DEFAULT_QUESTION_TEMPLATE: &str = "What planet is {name} from?";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Settings(#[from] QuizSettingsError),
    #[error("question template must contain {{name}}")]
    InvalidTemplate,
}

/// On-disk layout of the TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    question_template: Option<String>,
    quiz: QuizSettingsDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub settings: QuizSettings,
    pub question_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: QuizSettings::default(),
            question_template: DEFAULT_QUESTION_TEMPLATE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(raw)?;
        let question_template = file
            .question_template
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_QUESTION_TEMPLATE.to_string());
        if !question_template.contains("{name}") {
            return Err(ConfigError::InvalidTemplate);
        }
        Ok(Self {
            settings: file.quiz.validate()?,
            question_template,
        })
    }

    pub fn question_for(&self, subject_name: &str) -> String {
        self.question_template.replace("{name}", subject_name)
    }
}
