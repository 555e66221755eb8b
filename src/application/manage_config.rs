//! Config management use case

use crate::domain::StudyConfig;
use crate::error::{GradeTrackError, Result};
use crate::infrastructure::{Config, StudyRepository};
use tracing::warn;

/// Supplies study goals when none can be loaded
pub trait ConfigPrompt {
    /// Ask for goals; `None` when the user declines
    fn prompt(&self) -> Option<StudyConfig>;
}

/// Service for managing study configuration
pub struct ConfigService<R: StudyRepository> {
    repository: R,
}

impl<R: StudyRepository> ConfigService<R> {
    /// Create a new config service
    pub fn new(repository: R) -> Self {
        ConfigService { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "target_time" => Ok(config.target_time.to_string()),
            "target_grade" => Ok(config.target_grade.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(GradeTrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: target_time, target_grade, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "target_time" => {
                config.target_time = value.parse().map_err(|_| {
                    GradeTrackError::InvalidInput(format!(
                        "target_time must be a whole number of years, got '{}'",
                        value
                    ))
                })?;
            }
            "target_grade" => {
                config.target_grade = value.parse().map_err(|_| {
                    GradeTrackError::InvalidInput(format!(
                        "target_grade must be a number, got '{}'",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(GradeTrackError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(GradeTrackError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: target_time, target_grade",
                    key
                )));
            }
        }

        config.study().validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }

    /// Load the config, asking `prompt` for goals when it is missing or
    /// unreadable. Prompted goals are persisted.
    pub fn load_or_prompt(&self, prompt: &dyn ConfigPrompt) -> Result<Config> {
        match self.repository.load_config() {
            Ok(config) => Ok(config),
            Err(GradeTrackError::Config(reason)) => {
                warn!(%reason, "configuration unavailable, asking for study goals");
                let study = prompt.prompt().ok_or_else(|| {
                    GradeTrackError::Config(format!(
                        "{}; no study goals were provided",
                        reason
                    ))
                })?;
                study.validate()?;

                let config = Config::new(study);
                self.repository.save_config(&config)?;
                Ok(config)
            }
            Err(e) => Err(e),
        }
    }
}
