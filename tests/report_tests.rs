//! Integration tests for progress, burndown and status commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::{in_workspace, init_workspace};

fn add_graded(path: &Path, name: &str, credits: &str, grade: &str) {
    in_workspace(path)
        .args(["add", name, "--credits", credits, "--target-grade", "2.0"])
        .args(["--semester", "1"])
        .assert()
        .success();
    in_workspace(path)
        .args(["edit", name, "--grade", grade])
        .assert()
        .success();
}

#[test]
fn test_progress_weighted_and_plain_mean() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    add_graded(temp.path(), "Logic", "3", "2.0");
    add_graded(temp.path(), "Algebra", "2", "4.0");

    in_workspace(temp.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted average: 2.80"))
        .stdout(predicate::str::contains("Current grade: 3.00"))
        .stdout(predicate::str::contains("behind target"));
}

#[test]
fn test_progress_without_grades() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    in_workspace(temp.path())
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weighted average: N/A"))
        .stdout(predicate::str::contains("no grades yet"));
}

#[test]
fn test_burndown_json() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    add_graded(temp.path(), "Logic", "6", "1.0");
    add_graded(temp.path(), "Algebra", "6", "5.0");

    let output = in_workspace(temp.path())
        .args(["burndown", "--json"])
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["periods"], serde_json::json!([1, 2, 3, 4, 5, 6]));
    assert_eq!(json["target_credits"], 12);
    assert_eq!(json["earned_credits"], 6);
    assert_eq!(json["actual"][0], 11.0);
    assert_eq!(json["ideal"][5], 0.0);
    assert_eq!(json["average_rate"].as_array().unwrap().len(), 6);
}

#[test]
fn test_burndown_table() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());

    in_workspace(temp.path())
        .arg("burndown")
        .assert()
        .success()
        .stdout(predicate::str::contains("Planned credits: 0"))
        .stdout(predicate::str::contains("Semester"));
}

#[test]
fn test_status_dashboard() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    add_graded(temp.path(), "Logic", "5", "1.7");

    in_workspace(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Target time: 3 years"))
        .stdout(predicate::str::contains("Target semesters: 6"))
        .stdout(predicate::str::contains("Logic"))
        .stdout(predicate::str::contains("Weighted average: 1.70"))
        .stdout(predicate::str::contains("on track"));
}

#[test]
fn test_status_warns_about_courses_beyond_horizon() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path());
    in_workspace(temp.path())
        .args(["add", "Thesis", "--credits", "12", "--target-grade", "2.0"])
        .args(["--semester", "6"])
        .assert()
        .success();
    in_workspace(temp.path())
        .args(["config", "target_time", "2"])
        .assert()
        .success();

    in_workspace(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("placed beyond semester 4: Thesis"));
}
