//! Initialize workspace use case

use crate::domain::StudyConfig;
use crate::error::{GradeTrackError, Result};
use crate::infrastructure::{Config, FileSystemRepository, StudyRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new workspace at the specified path with the given goals.
pub fn init(path: &Path, study: StudyConfig) -> Result<Config> {
    study.validate()?;

    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(GradeTrackError::Config(format!(
            "Directory already initialized: {}",
            path.display()
        )));
    }

    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    repo.initialize()?;

    let config = Config::new(study);
    repo.save_config(&config)?;
    repo.save_courses(&[])?;

    info!(path = %path.display(), "workspace initialized");
    Ok(config)
}
