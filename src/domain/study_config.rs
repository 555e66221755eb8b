//! Study goals: completion horizon and target grade

use crate::domain::course::{BEST_GRADE, WORST_GRADE};
use crate::error::{GradeTrackError, Result};
use std::ops::RangeInclusive;

/// Semesters per planning year
pub const SEMESTERS_PER_YEAR: u32 = 2;

/// Accepted target horizon in years
pub const TARGET_TIME_RANGE: RangeInclusive<u32> = 1..=10;

/// Goals the projections are measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyConfig {
    /// Completion horizon in years
    pub target_time: u32,
    /// Target final grade (1.0 best, 5.0 fail)
    pub target_grade: f64,
}

impl StudyConfig {
    pub fn new(target_time: u32, target_grade: f64) -> Self {
        StudyConfig {
            target_time,
            target_grade,
        }
    }

    /// Planning horizon in semesters, saturating for unchecked horizons
    pub fn total_semesters(&self) -> u32 {
        self.target_time.saturating_mul(SEMESTERS_PER_YEAR)
    }

    /// Semester numbers a course may be placed in
    pub fn semester_range(&self) -> RangeInclusive<u32> {
        1..=self.total_semesters()
    }

    /// Check both goals against the accepted input ranges
    pub fn validate(&self) -> Result<()> {
        if !TARGET_TIME_RANGE.contains(&self.target_time) {
            return Err(GradeTrackError::InvalidInput(format!(
                "target_time {} outside {}..={} years",
                self.target_time,
                TARGET_TIME_RANGE.start(),
                TARGET_TIME_RANGE.end()
            )));
        }
        check_grade_range("target_grade", self.target_grade)
    }
}

/// Reject grades outside `1.0..=5.0`
pub fn check_grade_range(field: &str, value: f64) -> Result<()> {
    if (BEST_GRADE..=WORST_GRADE).contains(&value) {
        Ok(())
    } else {
        Err(GradeTrackError::InvalidInput(format!(
            "{} {} outside {:.1}..={:.1}",
            field, value, BEST_GRADE, WORST_GRADE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_horizon() {
        let config = StudyConfig::new(3, 2.0);
        assert_eq!(config.total_semesters(), 6);
        assert_eq!(config.semester_range(), 1..=6);
    }

    #[test]
    fn test_semester_horizon_saturates() {
        let config = StudyConfig::new(3_000_000_000, 2.0);
        assert_eq!(config.total_semesters(), u32::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(StudyConfig::new(1, 1.0).validate().is_ok());
        assert!(StudyConfig::new(10, 5.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(StudyConfig::new(0, 2.0).validate().is_err());
        assert!(StudyConfig::new(11, 2.0).validate().is_err());
        assert!(StudyConfig::new(3, 0.5).validate().is_err());
        assert!(StudyConfig::new(3, 5.5).validate().is_err());
    }

    #[test]
    fn test_grade_range_message_names_field() {
        let err = check_grade_range("target_grade", 6.0).unwrap_err();
        assert!(err.to_string().contains("target_grade 6 outside 1.0..=5.0"));
    }
}
