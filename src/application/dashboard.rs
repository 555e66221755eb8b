//! Dashboard snapshot use case

use crate::domain::{
    average_grade, current_vs_target, project, BurndownProjection, Course, CourseRegistry,
    GradeComparison, StudyConfig,
};
use crate::error::Result;
use crate::infrastructure::StudyRepository;
use serde::Serialize;
use tracing::debug;

/// One row of the course table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRow {
    pub name: String,
    pub credits: u32,
    /// `None` when the course has no counted grade
    pub grade: Option<f64>,
    pub target_grade: f64,
    pub semester: u32,
}

impl From<&Course> for CourseRow {
    fn from(course: &Course) -> Self {
        CourseRow {
            name: course.name().to_string(),
            credits: course.credits(),
            grade: course.counted_grade(),
            target_grade: course.target_grade(),
            semester: course.semester(),
        }
    }
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub target_time: u32,
    pub target_semesters: u32,
    pub target_grade: f64,
    pub rows: Vec<CourseRow>,
    pub average_grade: Option<f64>,
    pub comparison: GradeComparison,
    pub burndown: BurndownProjection,
    /// Courses placed beyond the configured horizon
    pub outside_horizon: Vec<String>,
}

impl Dashboard {
    /// Build the snapshot from goals and a course registry
    pub fn build(config: &StudyConfig, registry: &CourseRegistry) -> Self {
        let courses = registry.courses();
        let burndown = project(courses, config.target_time);
        debug!(
            periods = burndown.periods.len(),
            target_credits = burndown.target_credits,
            earned_credits = burndown.earned_credits,
            "burndown projected"
        );

        Dashboard {
            target_time: config.target_time,
            target_semesters: config.total_semesters(),
            target_grade: config.target_grade,
            rows: courses.iter().map(CourseRow::from).collect(),
            average_grade: average_grade(courses),
            comparison: current_vs_target(courses, config.target_grade),
            burndown,
            outside_horizon: registry
                .outside_horizon(config)
                .into_iter()
                .map(|c| c.name().to_string())
                .collect(),
        }
    }
}

/// Service computing the dashboard from stored courses
pub struct DashboardService<R: StudyRepository> {
    repository: R,
}

impl<R: StudyRepository> DashboardService<R> {
    pub fn new(repository: R) -> Self {
        DashboardService { repository }
    }

    /// Load courses, order them by semester and compute all projections
    pub fn snapshot(&self, config: &StudyConfig) -> Result<Dashboard> {
        let mut registry = CourseRegistry::new(self.repository.load_courses()?);
        registry.sort_by_semester();
        Ok(Dashboard::build(config, &registry))
    }
}
