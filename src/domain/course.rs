//! Course entity and its persisted record shape

use crate::error::{GradeTrackError, Result};
use serde::{Deserialize, Serialize};

/// Grade value stored for a course that has been enrolled but not graded yet.
///
/// Distinct from an absent grade on disk, but treated like one by every
/// aggregation.
pub const PENDING_GRADE: f64 = 0.0;

/// Lowest (best) passing grade
pub const BEST_GRADE: f64 = 1.0;

/// Highest grade that still counts as passed
pub const LAST_PASSING_GRADE: f64 = 4.0;

/// Worst grade on the scale (fail)
pub const WORST_GRADE: f64 = 5.0;

/// Largest credit weight the course forms accept for one module
pub const MAX_CREDITS: u32 = 30;

/// Persisted/exchanged shape of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    #[serde(alias = "ects")]
    pub credits: u32,
    #[serde(default)]
    pub grade: Option<f64>,
    pub target_grade: f64,
    pub semester: u32,
}

/// A single academic module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord", into = "CourseRecord")]
pub struct Course {
    name: String,
    credits: u32,
    grade: Option<f64>,
    target_grade: f64,
    semester: u32,
}

impl Course {
    /// Create a course. Fails when `name` is blank or `credits` is zero; all
    /// other fields are stored verbatim.
    pub fn new(
        name: impl Into<String>,
        credits: u32,
        grade: Option<f64>,
        target_grade: f64,
        semester: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GradeTrackError::InvalidCourse(
                "course name must not be empty".to_string(),
            ));
        }
        if credits == 0 {
            return Err(GradeTrackError::InvalidCourse(format!(
                "course '{}' must carry at least one credit",
                name
            )));
        }

        Ok(Course {
            name,
            credits,
            grade,
            target_grade,
            semester,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Raw grade as stored, including the pending sentinel
    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    /// Grade that takes part in aggregates: absent and pending grades yield `None`
    pub fn counted_grade(&self) -> Option<f64> {
        self.grade.filter(|g| *g != PENDING_GRADE)
    }

    pub fn target_grade(&self) -> f64 {
        self.target_grade
    }

    pub fn semester(&self) -> u32 {
        self.semester
    }

    /// Passed courses have a grade in `1.0..=4.0`
    pub fn is_completed(&self) -> bool {
        self.grade
            .is_some_and(|g| (BEST_GRADE..=LAST_PASSING_GRADE).contains(&g))
    }

    /// Replace the name. A blank name is rejected and the prior one kept.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GradeTrackError::InvalidCourse(format!(
                "course '{}' cannot be renamed to an empty name",
                self.name
            )));
        }
        self.name = name;
        Ok(())
    }

    /// Replace the credit weight. Zero is rejected and the prior value kept.
    pub fn set_credits(&mut self, credits: u32) -> Result<()> {
        if credits == 0 {
            return Err(GradeTrackError::InvalidCourse(format!(
                "course '{}' must carry at least one credit (keeping {})",
                self.name, self.credits
            )));
        }
        self.credits = credits;
        Ok(())
    }

    pub fn set_grade(&mut self, grade: Option<f64>) {
        self.grade = grade;
    }

    pub fn set_target_grade(&mut self, target_grade: f64) {
        self.target_grade = target_grade;
    }

    pub fn set_semester(&mut self, semester: u32) {
        self.semester = semester;
    }

    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            name: self.name.clone(),
            credits: self.credits,
            grade: self.grade,
            target_grade: self.target_grade,
            semester: self.semester,
        }
    }

    pub fn from_record(record: CourseRecord) -> Result<Self> {
        Course::new(
            record.name,
            record.credits,
            record.grade,
            record.target_grade,
            record.semester,
        )
    }
}

impl TryFrom<CourseRecord> for Course {
    type Error = GradeTrackError;

    fn try_from(record: CourseRecord) -> Result<Self> {
        Course::from_record(record)
    }
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        CourseRecord {
            name: course.name,
            credits: course.credits,
            grade: course.grade,
            target_grade: course.target_grade,
            semester: course.semester,
        }
    }
}
