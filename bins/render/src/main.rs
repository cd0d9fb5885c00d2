//! Tally statement renderer.
//!
//! Reads a report job (or an array of jobs) from a JSON file, renders the
//! statements, and writes the outcome as JSON.
//!
//! Usage: tally [JOB.json]

mod job;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tally_shared::config::LoggingConfig;
use tally_shared::{AppConfig, AppError};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let Some(job_path) = std::env::args().nth(1).or_else(|| config.report.job_path.clone()) else {
        let err = AppError::Config(
            "no job file given (pass a path or set TALLY__REPORT__JOB_PATH)".to_string(),
        );
        error!(code = err.error_code(), "{err}");
        std::process::exit(err.exit_code());
    };

    match job::run(&job_path, &config.report) {
        Ok(summary) => {
            info!(
                path = %job_path,
                jobs = summary.jobs,
                suppressed = summary.suppressed,
                failed = summary.failed,
                "Report run finished"
            );
            Ok(())
        }
        Err(err) => {
            error!(path = %job_path, code = err.error_code(), "{err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.clone().into());

    // Logs go to stderr; stdout may carry the rendered document.
    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!logging.json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}
