//! Credit burndown projection across the planning horizon
//!
//! Every series is a straight line starting from the total planned credits.
//! The slope is fixed from today's totals; it is not recomputed as semesters
//! elapse.

use crate::domain::study_config::SEMESTERS_PER_YEAR;
use crate::domain::Course;
use serde::Serialize;

/// Remaining-credit series for each semester of the horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurndownProjection {
    /// Semester numbers `1..=target_time * 2`
    pub periods: Vec<u32>,
    /// Sum of credits over all courses
    pub target_credits: u64,
    /// Sum of credits over completed courses
    pub earned_credits: u64,
    /// Remaining credits when the earned credits are spread over the horizon
    pub actual: Vec<f64>,
    /// Straight line from full load to zero
    pub ideal: Vec<f64>,
    /// Remaining credits at the historical average rate. `None` when the
    /// horizon is shorter than two semesters.
    pub average_rate: Option<Vec<f64>>,
}

impl BurndownProjection {
    pub fn remaining_credits(&self) -> u64 {
        self.target_credits.saturating_sub(self.earned_credits)
    }

    /// Average-rate series, empty when undefined
    pub fn average_rate_series(&self) -> &[f64] {
        self.average_rate.as_deref().unwrap_or_default()
    }
}

/// Project remaining credits over `target_time` years
pub fn project(courses: &[Course], target_time: u32) -> BurndownProjection {
    // Summed as u64; single weights are u32
    let target_credits: u64 = courses.iter().map(|c| u64::from(c.credits())).sum();
    let earned_credits: u64 = courses
        .iter()
        .filter(|c| c.is_completed())
        .map(|c| u64::from(c.credits()))
        .sum();
    let remaining_credits = target_credits.saturating_sub(earned_credits);

    let total_periods = target_time.saturating_mul(SEMESTERS_PER_YEAR);
    let periods: Vec<u32> = (1..=total_periods).collect();

    let target = target_credits as f64;
    let earned = earned_credits as f64;
    let n = f64::from(total_periods);

    let (actual, ideal): (Vec<f64>, Vec<f64>) = if total_periods == 0 {
        (Vec::new(), Vec::new())
    } else {
        let earned_per_period = earned / n;
        let ideal_per_period = target / n;
        periods
            .iter()
            .map(|&i| {
                let i = f64::from(i);
                (target - i * earned_per_period, target - ideal_per_period * i)
            })
            .unzip()
    };

    let average_rate = (total_periods > 1).then(|| {
        let rate = (target - remaining_credits as f64) / (n - 1.0);
        periods
            .iter()
            .map(|&i| target - f64::from(i) * rate)
            .collect()
    });

    BurndownProjection {
        periods,
        target_credits,
        earned_credits,
        actual,
        ideal,
        average_rate,
    }
}
