//! Domain layer - Course model and progress calculations

pub mod burndown;
pub mod course;
pub mod progress;
pub mod registry;
pub mod study_config;

pub use burndown::{project, BurndownProjection};
pub use course::{Course, CourseRecord, PENDING_GRADE};
pub use progress::{average_grade, current_vs_target, GradeComparison};
pub use registry::{duplicate_names, CourseRegistry, SaveOutcome};
pub use study_config::StudyConfig;
