//! In-memory repository, used as a test double for the services

use crate::domain::{duplicate_names, Course, SaveOutcome};
use crate::error::{GradeTrackError, Result};
use crate::infrastructure::{Config, StudyRepository};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    root: PathBuf,
    initialized: Cell<bool>,
    config: RefCell<Option<Config>>,
    courses: RefCell<Vec<Course>>,
    writes: Cell<usize>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// An initialized repository holding `config` and `courses`
    pub fn with_state(config: Config, courses: Vec<Course>) -> Self {
        let repo = Self::new();
        repo.initialized.set(true);
        *repo.config.borrow_mut() = Some(config);
        *repo.courses.borrow_mut() = courses;
        repo
    }

    /// Courses as last persisted
    pub fn stored_courses(&self) -> Vec<Course> {
        self.courses.borrow().clone()
    }

    /// Number of successful course writes
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl StudyRepository for InMemoryRepository {
    fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    fn initialize(&self) -> Result<()> {
        if self.initialized.replace(true) {
            return Err(GradeTrackError::Config(
                "Directory already initialized".to_string(),
            ));
        }
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        if !self.initialized.get() {
            return Err(GradeTrackError::NotGradeTrackDirectory(self.root.clone()));
        }
        self.config
            .borrow()
            .clone()
            .ok_or_else(|| GradeTrackError::Config("config not found".to_string()))
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }

    fn load_courses(&self) -> Result<Vec<Course>> {
        Ok(self.stored_courses())
    }

    fn save_courses(&self, courses: &[Course]) -> Result<SaveOutcome> {
        let names = duplicate_names(courses);
        if !names.is_empty() {
            return Ok(SaveOutcome::DuplicatesRejected { names });
        }
        *self.courses.borrow_mut() = courses.to_vec();
        self.writes.set(self.writes.get() + 1);
        Ok(SaveOutcome::Saved)
    }
}
