//! Output formatting utilities

use crate::application::{CourseRow, Dashboard};
use crate::domain::{BurndownProjection, GradeComparison};
use crate::infrastructure::Config;

const NOT_AVAILABLE: &str = "N/A";

fn format_grade(grade: Option<f64>) -> String {
    grade.map_or_else(|| NOT_AVAILABLE.to_string(), |g| format!("{:.2}", g))
}

/// Format the configured goals
pub fn format_config(config: &Config) -> String {
    format!(
        "target_time = {}\ntarget_grade = {}\ncreated = {}\n",
        config.target_time,
        config.target_grade,
        config.created.to_rfc3339()
    )
}

/// Format course rows as an aligned table
pub fn format_course_table(rows: &[CourseRow]) -> String {
    if rows.is_empty() {
        return "No courses found".to_string();
    }

    let width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut output = format!(
        "{:<width$}  {:>7}  {:>5}  {:>6}  {:>8}\n",
        "Name",
        "Credits",
        "Grade",
        "Target",
        "Semester",
        width = width
    );
    for row in rows {
        output.push_str(&format!(
            "{:<width$}  {:>7}  {:>5}  {:>6.2}  {:>8}\n",
            row.name,
            row.credits,
            format_grade(row.grade),
            row.target_grade,
            row.semester,
            width = width
        ));
    }
    output
}

/// Format the weighted average line
pub fn format_average(average: Option<f64>) -> String {
    format!("Weighted average: {}\n", format_grade(average))
}

/// Format current grade against the target
pub fn format_comparison(comparison: &GradeComparison) -> String {
    let verdict = if comparison.actual == 0.0 {
        "no grades yet"
    } else if comparison.on_track() {
        "on track"
    } else {
        "behind target"
    };

    format!(
        "Current grade: {:.2}\nTarget grade:  {:.2}\nStatus:        {}\n",
        comparison.actual, comparison.target, verdict
    )
}

/// Format the burndown series, one semester per line
pub fn format_burndown(projection: &BurndownProjection) -> String {
    if projection.periods.is_empty() {
        return "No semesters planned".to_string();
    }

    let mut output = format!(
        "Planned credits: {}  earned: {}  remaining: {}\n",
        projection.target_credits,
        projection.earned_credits,
        projection.remaining_credits()
    );
    output.push_str(&format!(
        "{:>8}  {:>8}  {:>8}  {:>8}\n",
        "Semester", "Actual", "Ideal", "Average"
    ));

    let average = projection.average_rate_series();
    for (idx, period) in projection.periods.iter().enumerate() {
        let avg = average
            .get(idx)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}", v));
        output.push_str(&format!(
            "{:>8}  {:>8.2}  {:>8.2}  {:>8}\n",
            period, projection.actual[idx], projection.ideal[idx], avg
        ));
    }
    output
}

/// Format the full dashboard
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = format!(
        "Target time: {} years\nTarget semesters: {}\nTarget grade: {}\n\n",
        dashboard.target_time, dashboard.target_semesters, dashboard.target_grade
    );

    output.push_str(&format_course_table(&dashboard.rows));
    output.push('\n');
    output.push_str(&format_average(dashboard.average_grade));
    output.push('\n');
    output.push_str(&format_comparison(&dashboard.comparison));
    output.push('\n');
    output.push_str(&format_burndown(&dashboard.burndown));

    if !dashboard.outside_horizon.is_empty() {
        output.push_str(&format!(
            "\nWarning: placed beyond semester {}: {}\n",
            dashboard.target_semesters,
            dashboard.outside_horizon.join(", ")
        ));
    }

    output
}
