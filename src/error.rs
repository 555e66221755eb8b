//! Error types for gradetrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gradetrack application
#[derive(Debug, Error)]
pub enum GradeTrackError {
    #[error("Not a gradetrack directory: {0}")]
    NotGradeTrackDirectory(PathBuf),

    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Course store is corrupt: {0}")]
    CorruptCourseStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradeTrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GradeTrackError::NotGradeTrackDirectory(_) => 2,
            GradeTrackError::InvalidCourse(_) | GradeTrackError::InvalidInput(_) => 3,
            GradeTrackError::CourseNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GradeTrackError::NotGradeTrackDirectory(path) => {
                format!(
                    "Not a gradetrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'gradetrack init --target-time 3 --target-grade 2.0' to start tracking\n\
                    • Navigate to an existing gradetrack directory\n\
                    • Set GRADETRACK_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            GradeTrackError::CourseNotFound(name) => {
                format!(
                    "Course not found: '{}'\n\n\
                    Suggestions:\n\
                    • Course names are case-sensitive\n\
                    • Use 'gradetrack list' to see all courses",
                    name
                )
            }
            GradeTrackError::InvalidInput(msg) => {
                if msg.contains("semester") {
                    format!(
                        "Invalid input: {}\n\n\
                        Semesters run from 1 to target_time * 2.\n\
                        Check the horizon with: gradetrack config target_time",
                        msg
                    )
                } else if msg.contains("grade") {
                    format!(
                        "Invalid input: {}\n\n\
                        Grades use a 1.0 (best) to 5.0 (fail) scale; 0 clears a grade.",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            GradeTrackError::CorruptCourseStore(msg) => {
                format!(
                    "Course store is corrupt: {}\n\n\
                    Suggestions:\n\
                    • Inspect .gradetrack/courses.json and fix the JSON by hand\n\
                    • Move the file away to start with an empty course list",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GradeTrackError
pub type Result<T> = std::result::Result<T, GradeTrackError>;
