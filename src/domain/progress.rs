//! Grade aggregation over a course snapshot

use crate::domain::Course;
use serde::Serialize;

/// Current grade set against the configured goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeComparison {
    /// Plain mean of all counted grades, `0.0` when nothing is graded
    pub actual: f64,
    pub target: f64,
}

impl GradeComparison {
    /// Lower grades are better, so the goal is met while `actual <= target`.
    /// An empty record is not on track.
    pub fn on_track(&self) -> bool {
        self.actual > 0.0 && self.actual <= self.target
    }
}

/// Round half away from zero to two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted average of counted grades, rounded to two decimals.
///
/// Absent and pending (`0`) grades are left out of both numerator and
/// denominator. Returns `None` when no credits carry a grade.
pub fn average_grade(courses: &[Course]) -> Option<f64> {
    let (weighted_sum, total_credits) = courses
        .iter()
        .filter_map(|c| c.counted_grade().map(|g| (c.credits(), g)))
        .fold((0.0, 0u64), |(sum, credits), (c, g)| {
            (sum + f64::from(c) * g, credits + u64::from(c))
        });

    if total_credits > 0 {
        Some(round2(weighted_sum / total_credits as f64))
    } else {
        None
    }
}

/// Unweighted mean of counted grades next to the target grade
pub fn current_vs_target(courses: &[Course], target_grade: f64) -> GradeComparison {
    let grades: Vec<f64> = courses.iter().filter_map(Course::counted_grade).collect();

    let actual = if grades.is_empty() {
        0.0
    } else {
        grades.iter().sum::<f64>() / grades.len() as f64
    };

    GradeComparison {
        actual,
        target: target_grade,
    }
}
