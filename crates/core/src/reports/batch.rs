//! Parallel batch runs.
//!
//! Reports share no state, so a batch (one report per facility or district,
//! say) is fanned out over the rayon thread pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ReportError;
use super::service::{ReportRequest, ReportService};
use super::types::ReportOutcome;

/// A named report request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportJob {
    /// Job name, echoed back in the result.
    pub name: String,
    /// The request to run.
    pub request: ReportRequest,
}

/// Outcome of one job in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// Job name.
    pub name: String,
    /// Report outcome or error.
    pub result: Result<ReportOutcome, ReportError>,
}

impl ReportService {
    /// Runs every job in parallel. Results come back in input order.
    #[must_use]
    pub fn generate_batch(jobs: &[ReportJob]) -> Vec<BatchResult> {
        jobs.par_iter()
            .map(|job| {
                let result = Self::generate(&job.request);
                if let Err(err) = &result {
                    warn!(job = %job.name, error = %err, "Report job failed");
                }
                BatchResult {
                    name: job.name.clone(),
                    result,
                }
            })
            .collect()
    }
}
