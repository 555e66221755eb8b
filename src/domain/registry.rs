//! In-memory course collection

use crate::domain::{Course, StudyConfig};
use crate::error::{GradeTrackError, Result};
use std::collections::HashSet;

/// Result of handing a course list to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The list was written
    Saved,
    /// Nothing was written because these names occur more than once
    DuplicatesRejected { names: Vec<String> },
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Names that occur more than once, in order of their first repeat
pub fn duplicate_names(courses: &[Course]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for course in courses {
        if !seen.insert(course.name()) && reported.insert(course.name()) {
            duplicates.push(course.name().to_string());
        }
    }

    duplicates
}

/// Ordered, exclusively owned set of courses the calculators read from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseRegistry {
    courses: Vec<Course>,
}

impl CourseRegistry {
    pub fn new(courses: Vec<Course>) -> Self {
        CourseRegistry { courses }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Stable sort by semester; courses within a semester keep their order
    pub fn sort_by_semester(&mut self) {
        self.courses.sort_by_key(Course::semester);
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name() == name)
    }

    /// Append a course and return its index
    pub fn push(&mut self, course: Course) -> usize {
        self.courses.push(course);
        self.courses.len() - 1
    }

    /// Remove the course at `index`, returning it
    pub fn remove(&mut self, index: usize) -> Option<Course> {
        (index < self.courses.len()).then(|| self.courses.remove(index))
    }

    /// Swap in a new course at `index`, returning the one it replaced
    pub fn replace(&mut self, index: usize, course: Course) -> Option<Course> {
        let slot = self.courses.get_mut(index)?;
        Some(std::mem::replace(slot, course))
    }

    pub fn duplicate_names(&self) -> Vec<String> {
        duplicate_names(&self.courses)
    }

    /// Courses placed beyond the configured horizon
    pub fn outside_horizon(&self, config: &StudyConfig) -> Vec<&Course> {
        let range = config.semester_range();
        self.courses
            .iter()
            .filter(|c| !range.contains(&c.semester()))
            .collect()
    }

    /// Reject a semester placement outside `1..=target_time * 2`
    pub fn check_placement(config: &StudyConfig, semester: u32) -> Result<()> {
        let range = config.semester_range();
        if range.contains(&semester) {
            Ok(())
        } else {
            Err(GradeTrackError::InvalidInput(format!(
                "semester {} outside {}..={}",
                semester,
                range.start(),
                range.end()
            )))
        }
    }

    pub fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}
