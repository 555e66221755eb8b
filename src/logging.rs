//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "GRADETRACK_LOG";

/// Install a compact stderr logger. `GRADETRACK_LOG` takes precedence over
/// the `verbose` default.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "gradetrack=debug"
    } else {
        "gradetrack=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
