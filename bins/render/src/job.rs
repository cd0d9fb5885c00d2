//! Job file handling.

use std::fs;
use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use tally_core::{ReportJob, ReportOutcome, ReportRequest, ReportService};
use tally_shared::config::ReportConfig;
use tally_shared::{AppError, AppResult};

/// Counts reported after a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Jobs processed.
    pub jobs: usize,
    /// Jobs suppressed for lack of revenue.
    pub suppressed: usize,
    /// Jobs that failed.
    pub failed: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobOutput {
    name: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    outcome: Option<ReportOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Reads the job file at `path`, renders it, and writes the output.
pub fn run(path: &str, config: &ReportConfig) -> AppResult<RunSummary> {
    let input = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("cannot read {path}: {e}")))?;
    let (output, summary) = render(&input)?;

    let text = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match &config.output_path {
        Some(out) => {
            fs::write(out, text).map_err(|e| AppError::Io(format!("cannot write {out}: {e}")))?;
            debug!(path = %out, "Output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(summary)
}

/// Renders a job document.
///
/// The input may be a bare request, a named job (`{"name", "request"}`), or
/// an array of named jobs. A single failing request is an error; failures
/// inside a batch are reported per job.
pub fn render(input: &str) -> AppResult<(Value, RunSummary)> {
    let document: Value = serde_json::from_str(input)?;

    if document.is_array() {
        let jobs: Vec<ReportJob> = serde_json::from_value(document)?;
        let results = ReportService::generate_batch(&jobs);
        let mut summary = RunSummary {
            jobs: results.len(),
            ..RunSummary::default()
        };
        let outputs: Vec<JobOutput> = results
            .into_iter()
            .map(|r| match r.result {
                Ok(outcome) => {
                    if outcome.document.is_none() {
                        summary.suppressed += 1;
                    }
                    JobOutput {
                        name: r.name,
                        outcome: Some(outcome),
                        error: None,
                    }
                }
                Err(err) => {
                    summary.failed += 1;
                    JobOutput {
                        name: r.name,
                        outcome: None,
                        error: Some(err.to_string()),
                    }
                }
            })
            .collect();
        return Ok((serde_json::to_value(outputs)?, summary));
    }

    let request: ReportRequest = if document.get("request").is_some() {
        serde_json::from_value::<ReportJob>(document)?.request
    } else {
        serde_json::from_value(document)?
    };
    let outcome =
        ReportService::generate(&request).map_err(|e| AppError::Report(e.to_string()))?;
    let summary = RunSummary {
        jobs: 1,
        suppressed: usize::from(outcome.document.is_none()),
        failed: 0,
    };
    Ok((serde_json::to_value(outcome)?, summary))
}
