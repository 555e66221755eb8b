//! Configuration store

use crate::domain::StudyConfig;
use crate::error::{GradeTrackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding all gradetrack state inside a workspace
pub const STATE_DIR: &str = ".gradetrack";

const CONFIG_FILE: &str = "config.toml";

/// Persisted study goals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion horizon in years
    pub target_time: u32,
    pub target_grade: f64,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config stamped with the current time
    pub fn new(study: StudyConfig) -> Self {
        Config {
            target_time: study.target_time,
            target_grade: study.target_grade,
            created: Utc::now(),
        }
    }

    /// The part of the config the calculations consume
    pub fn study(&self) -> StudyConfig {
        StudyConfig::new(self.target_time, self.target_grade)
    }

    /// Load config from .gradetrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let state_dir = path.join(STATE_DIR);
        if !state_dir.is_dir() {
            return Err(GradeTrackError::NotGradeTrackDirectory(path.to_path_buf()));
        }

        let config_path = state_dir.join(CONFIG_FILE);
        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GradeTrackError::Config(format!("{} not found", config_path.display()))
            } else {
                GradeTrackError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| GradeTrackError::Config(format!("Failed to parse config.toml: {}", e)))?;

        // Out-of-range goals count as a corrupt file
        config
            .study()
            .validate()
            .map_err(|e| GradeTrackError::Config(format!("Invalid config.toml: {}", e)))?;

        Ok(config)
    }

    /// Save config to .gradetrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join(CONFIG_FILE);

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| GradeTrackError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
