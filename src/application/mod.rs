//! Application layer - Use cases and orchestration

pub mod dashboard;
pub mod init;
pub mod manage_config;
pub mod manage_courses;

pub use dashboard::{CourseRow, Dashboard, DashboardService};
pub use manage_config::{ConfigPrompt, ConfigService};
pub use manage_courses::{CourseChanges, CourseDraft, CourseService};
