//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gradetrack")]
#[command(about = "Track credits and grades toward a degree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Years planned until graduation
        #[arg(short = 't', long)]
        target_time: u32,

        /// Target final grade (1.0 best, 5.0 fail)
        #[arg(short = 'g', long)]
        target_grade: f64,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Add a course
    Add {
        /// Course name (must be unique)
        name: String,

        /// Credit points
        #[arg(short, long)]
        credits: u32,

        /// Target grade for this course
        #[arg(short = 'g', long)]
        target_grade: f64,

        /// Semester the course is placed in
        #[arg(short, long)]
        semester: u32,
    },

    /// Edit an existing course
    Edit {
        /// Name of the course to edit
        name: String,

        /// New name
        #[arg(long)]
        rename: Option<String>,

        /// New credit points
        #[arg(short, long)]
        credits: Option<u32>,

        /// Earned grade (0 clears it)
        #[arg(long)]
        grade: Option<f64>,

        /// New target grade
        #[arg(short = 'g', long)]
        target_grade: Option<f64>,

        /// New semester
        #[arg(short, long)]
        semester: Option<u32>,
    },

    /// List courses ordered by semester
    List,

    /// Compare the current grade with the target grade
    Progress,

    /// Show the credit burndown projection
    Burndown {
        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show goals, courses, grades and burndown together
    Status,
}
