//! gradetrack - Degree progress tracker
//!
//! Keeps a list of enrolled courses with credits, semesters and grades, and
//! derives the weighted average grade and a credit burndown across the
//! planned semesters.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::GradeTrackError;
