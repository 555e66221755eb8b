//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use output::{
    format_average, format_burndown, format_comparison, format_config, format_course_table,
    format_dashboard,
};
pub use prompt::StdinPrompt;
