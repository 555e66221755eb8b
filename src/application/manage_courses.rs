//! Course add/edit/list use cases

use crate::domain::course::{BEST_GRADE, MAX_CREDITS, WORST_GRADE};
use crate::domain::study_config::check_grade_range;
use crate::domain::{Course, CourseRegistry, SaveOutcome, StudyConfig, PENDING_GRADE};
use crate::error::{GradeTrackError, Result};
use crate::infrastructure::StudyRepository;
use tracing::{info, warn};

/// Fields entered for a new course. New courses start without a grade.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    pub name: String,
    pub credits: u32,
    pub target_grade: f64,
    pub semester: u32,
}

/// Fields to change on an existing course; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseChanges {
    pub rename: Option<String>,
    pub credits: Option<u32>,
    /// `0` clears the grade back to "not graded yet"
    pub grade: Option<f64>,
    pub target_grade: Option<f64>,
    pub semester: Option<u32>,
}

/// Service owning the loaded course registry for one load/mutate/save cycle
pub struct CourseService<R: StudyRepository> {
    repository: R,
    registry: CourseRegistry,
}

impl<R: StudyRepository> CourseService<R> {
    /// Load the stored courses into a new service
    pub fn load(repository: R) -> Result<Self> {
        let registry = CourseRegistry::new(repository.load_courses()?);
        Ok(CourseService {
            repository,
            registry,
        })
    }

    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    /// Add a course and save. A rejected save rolls the addition back.
    pub fn add(&mut self, config: &StudyConfig, draft: CourseDraft) -> Result<SaveOutcome> {
        let name = checked_name(&draft.name)?;
        check_credit_limit(draft.credits)?;
        check_grade_range("target_grade", draft.target_grade)?;
        CourseRegistry::check_placement(config, draft.semester)?;

        let course = Course::new(
            name,
            draft.credits,
            Some(PENDING_GRADE),
            draft.target_grade,
            draft.semester,
        )?;

        let index = self.registry.push(course);
        let outcome = self.repository.save_courses(self.registry.courses())?;

        if outcome.is_saved() {
            info!(course = %draft.name.trim(), "course added");
        } else {
            self.registry.remove(index);
            warn!(course = %draft.name.trim(), "course already exists, addition rolled back");
        }

        Ok(outcome)
    }

    /// Apply `changes` to the course called `name` and save. A rejected save
    /// restores the previous course.
    pub fn edit(
        &mut self,
        config: &StudyConfig,
        name: &str,
        changes: CourseChanges,
    ) -> Result<SaveOutcome> {
        let index = self
            .registry
            .position(name)
            .ok_or_else(|| GradeTrackError::CourseNotFound(name.to_string()))?;

        let mut updated = self.registry.courses()[index].clone();
        apply_changes(&mut updated, config, changes)?;

        let previous = self
            .registry
            .replace(index, updated)
            .ok_or_else(|| GradeTrackError::CourseNotFound(name.to_string()))?;
        let outcome = self.repository.save_courses(self.registry.courses())?;

        if outcome.is_saved() {
            info!(course = %name, "course edited");
        } else {
            self.registry.replace(index, previous);
            warn!(course = %name, "edit would duplicate a course name, rolled back");
        }

        Ok(outcome)
    }

    /// Courses ordered by semester
    pub fn list(&mut self) -> &[Course] {
        self.registry.sort_by_semester();
        self.registry.courses()
    }
}

fn checked_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GradeTrackError::InvalidInput(
            "course name must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Zero credits are left to the entity, which reports them as an invalid course
fn check_credit_limit(credits: u32) -> Result<()> {
    if credits > MAX_CREDITS {
        return Err(GradeTrackError::InvalidInput(format!(
            "credits {} above the limit of {} per course",
            credits, MAX_CREDITS
        )));
    }
    Ok(())
}

fn apply_changes(course: &mut Course, config: &StudyConfig, changes: CourseChanges) -> Result<()> {
    if let Some(name) = changes.rename {
        course.rename(checked_name(&name)?)?;
    }
    if let Some(credits) = changes.credits {
        check_credit_limit(credits)?;
        course.set_credits(credits)?;
    }
    if let Some(grade) = changes.grade {
        if grade != PENDING_GRADE && !(BEST_GRADE..=WORST_GRADE).contains(&grade) {
            return Err(GradeTrackError::InvalidInput(format!(
                "grade {} outside 0.0..={:.1}",
                grade, WORST_GRADE
            )));
        }
        course.set_grade(Some(grade));
    }
    if let Some(target_grade) = changes.target_grade {
        check_grade_range("target_grade", target_grade)?;
        course.set_target_grade(target_grade);
    }
    if let Some(semester) = changes.semester {
        CourseRegistry::check_placement(config, semester)?;
        course.set_semester(semester);
    }
    Ok(())
}
